//! variation::validation: shared input guards for p-variation entry points.
//!
//! Purpose
//! -------
//! Centralize the checks performed by the validated p-variation surface so
//! that the exponent, the data, and the checkpoint stride are guarded once in
//! a consistent way.
//!
//! Key behaviors
//! -------------
//! - Reject exponents that are NaN, infinite, or not strictly positive.
//! - Reject sequences holding NaN or ±∞, reporting the first offending index.
//! - Reject checkpoint strides outside `1..=MAX_CHECKPOINT_STRIDE`.
//!
//! Conventions
//! -----------
//! - Pure validation: no I/O and no allocation beyond error construction.
//! - The unvalidated core ([`pvar`](crate::variation::pvar::pvar)) never calls
//!   [`validate_input`]; it is a total function whose out-of-domain behavior
//!   follows `f64::powf`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and the success paths.

use crate::variation::{
    core::options::MAX_CHECKPOINT_STRIDE,
    errors::{PVarError, PVarResult},
};

/// Validate a sequence and exponent before computing a p-variation.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Ordered samples of the path. May be empty; every value must be finite.
/// - `p`: `f64`
///   Exponent of the p-variation. Must be finite and strictly positive.
///
/// Returns
/// -------
/// `PVarResult<()>`
///   `Ok(())` when every constraint holds.
///
/// Errors
/// ------
/// - `PVarError::InvalidExponent(p)`
///   Returned when `p` is NaN, ±∞, or `p <= 0.0`. Checked before the data.
/// - `PVarError::NonFiniteData { index, value }`
///   Returned for the first non-finite element of `data`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_pvar::variation::validation::validate_input;
/// # use rust_pvar::variation::errors::PVarError;
/// assert!(validate_input(&[0.0, 1.0, 0.5], 2.0).is_ok());
///
/// match validate_input(&[0.0, 1.0], 0.0) {
///     Err(PVarError::InvalidExponent(_)) => (),
///     other => panic!("expected InvalidExponent error, got {other:?}"),
/// }
/// ```
pub fn validate_input(data: &[f64], p: f64) -> PVarResult<()> {
    if !p.is_finite() || p <= 0.0 {
        return Err(PVarError::InvalidExponent(p));
    }

    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PVarError::NonFiniteData { index, value });
    }

    Ok(())
}

/// Validate the checkpoint stride used by the interval merger.
///
/// A checkpoint interval spans `stride` links of the chain. The window pass
/// only proves spans of up to [`MAX_CHECKPOINT_STRIDE`] links optimal, so
/// larger strides are rejected.
///
/// Errors
/// ------
/// - `PVarError::InvalidCheckpointStride { stride, max }`
///   Returned when `stride == 0` or `stride > MAX_CHECKPOINT_STRIDE`.
pub fn validate_checkpoint_stride(stride: usize) -> PVarResult<()> {
    if stride == 0 || stride > MAX_CHECKPOINT_STRIDE {
        return Err(PVarError::InvalidCheckpointStride { stride, max: MAX_CHECKPOINT_STRIDE });
    }
    Ok(())
}
