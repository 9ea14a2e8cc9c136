//! variation::core: building blocks of the p-variation pruning pipeline.
//!
//! Purpose
//! -------
//! Hold the components that the driver in `variation::pvar` composes, in
//! dependency order:
//!
//! - [`edge_cost`]: `|d|^p`, the price of one link.
//! - [`chain`]: index arena holding the surviving points and cached link
//!   costs.
//! - [`extrema`]: reduction of the sequence to its local extrema.
//! - [`window`]: splicing of improvable three-link windows.
//! - [`merge`]: checkpoint selection and pairwise merging of optimal
//!   intervals.
//! - [`options`]: validated configuration of the merger.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every pass only ever replaces a chain segment by a link worth at least
//!   as much, so the chain cost is a non-decreasing lower bound on the
//!   p-variation that reaches it when the merge rounds finish (`p >= 1`).
//! - Components are total functions over `f64` input; validation lives in
//!   `variation::validation`.

pub mod chain;
pub mod edge_cost;
pub mod extrema;
pub mod merge;
pub mod options;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::chain::{Chain, Link};
pub use self::edge_cost::{edge_cost, EdgeCost};
pub use self::extrema::detect_local_extrema;
pub use self::merge::{
    merge_good_intervals, merge_intervals, select_checkpoints, CandidatePoint, MergeScratch,
};
pub use self::options::{PVarOptions, DEFAULT_CHECKPOINT_STRIDE, MAX_CHECKPOINT_STRIDE};
pub use self::window::{check_short_windows, WINDOW_EDGES};
