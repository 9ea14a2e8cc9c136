//! variation: exact p-variation of real-valued sequences.
//!
//! Purpose
//! -------
//! Collect the p-variation routines and their shared infrastructure: the
//! pruning pipeline in [`core`], the entry points in [`pvar`](mod@pvar), input guards
//! in [`validation`], and the error type in [`errors`].
//!
//! Key behaviors
//! -------------
//! - Expose the total function [`pvar()`] and its variants
//!   [`pvar_with_options`] and [`pvar_array`].
//! - Expose the validated surface [`PVarOutcome::compute`], which reports
//!   failures via [`PVarResult`].
//! - Provide `From<PVarError> for PyErr` when the `python-bindings` feature
//!   is enabled.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_pvar::variation::{pvar, PVarOptions, PVarOutcome};
//!
//!   let x = [0.0, 2.0, 1.0, 3.0, 0.0];
//!   assert_eq!(pvar(&x, 1.0), 8.0);
//!
//!   let outcome = PVarOutcome::compute(&x, 2.0, &PVarOptions::default())?;
//!   assert!(outcome.value() >= 9.0);
//!   # Ok::<(), rust_pvar::variation::PVarError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each component carries unit tests; the driver is compared against a
//!   brute-force reference in `tests/integration_pvar_properties.rs`.

pub mod core;
pub mod errors;
pub mod pvar;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::PVarOptions;
pub use self::errors::{PVarError, PVarResult};
pub use self::pvar::{pvar, pvar_array, pvar_with_options, PVarOutcome};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_pvar::variation::prelude::*;
//
// to import the main p-variation surface in a single line.

pub mod prelude {
    pub use super::core::PVarOptions;
    pub use super::errors::{PVarError, PVarResult};
    pub use super::pvar::{pvar, pvar_array, pvar_with_options, PVarOutcome};
}
