//! p-variation options: configuration of the interval merger.
//!
//! Purpose
//! -------
//! Collect the tuning knobs of the p-variation driver in one validated value
//! so that call sites pass explicit options instead of ad-hoc integers.
//!
//! Key behaviors
//! -------------
//! - Represent the checkpoint stride of the interval merger via
//!   [`PVarOptions`], constructed through [`PVarOptions::new`] which rejects
//!   invalid strides with a typed error instead of panicking.
//! - Provide `Default` with [`DEFAULT_CHECKPOINT_STRIDE`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 <= checkpoint_stride <= MAX_CHECKPOINT_STRIDE`. The merger assumes
//!   each initial checkpoint interval is already optimal; the short-window
//!   pass proves that for spans of at most four links, so larger strides
//!   would silently lose exactness.
//! - The stride only changes how much work each merge round does; for any
//!   admissible stride the computed p-variation is the same.
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults, accepted strides, and rejected strides.
//!   Stride independence of the result is covered by integration tests.

use crate::variation::{errors::PVarResult, validation::validate_checkpoint_stride};

/// Checkpoint stride used by [`pvar`](crate::variation::pvar::pvar).
pub const DEFAULT_CHECKPOINT_STRIDE: usize = 4;

/// Largest stride whose checkpoint intervals are guaranteed optimal after the
/// short-window pass.
pub const MAX_CHECKPOINT_STRIDE: usize = 4;

/// PVarOptions: validated configuration for the p-variation driver.
///
/// Fields
/// ------
/// - `checkpoint_stride`: `usize`
///   Every `checkpoint_stride`-th surviving point of the chain becomes a
///   checkpoint before the pairwise merge rounds start.
///
/// Invariants
/// ----------
/// - `1 <= checkpoint_stride <= MAX_CHECKPOINT_STRIDE`; enforced by
///   [`PVarOptions::new`], and the field is private so it cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PVarOptions {
    checkpoint_stride: usize,
}

impl PVarOptions {
    /// Construct options with an explicit checkpoint stride.
    ///
    /// Errors
    /// ------
    /// - `PVarError::InvalidCheckpointStride`
    ///   Returned when `checkpoint_stride == 0` or
    ///   `checkpoint_stride > MAX_CHECKPOINT_STRIDE`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_pvar::variation::core::options::PVarOptions;
    /// let opts = PVarOptions::new(2).unwrap();
    /// assert_eq!(opts.checkpoint_stride(), 2);
    ///
    /// assert!(PVarOptions::new(0).is_err());
    /// ```
    pub fn new(checkpoint_stride: usize) -> PVarResult<Self> {
        validate_checkpoint_stride(checkpoint_stride)?;
        Ok(PVarOptions { checkpoint_stride })
    }

    pub fn checkpoint_stride(&self) -> usize {
        self.checkpoint_stride
    }
}

impl Default for PVarOptions {
    fn default() -> Self {
        PVarOptions { checkpoint_stride: DEFAULT_CHECKPOINT_STRIDE }
    }
}
