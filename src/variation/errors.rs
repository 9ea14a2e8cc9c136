//! variation::errors: error type and Python bridge for p-variation routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the validated p-variation
//! entry points and by the option builders, together with a conversion layer
//! to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`PVarResult`] and [`PVarError`] as the canonical result and error
//!   types for input validation and configuration of the p-variation driver.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<PVarError> for PyErr` to surface failures as
//!   `ValueError` at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - The core algorithm (`variation::core`) is total and never produces a
//!   [`PVarError`]; errors only arise from the validated entry points
//!   ([`PVarOutcome::compute`](crate::variation::pvar::PVarOutcome::compute))
//!   and from [`PVarOptions::new`](crate::variation::core::options::PVarOptions::new).
//! - `PVarError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("p must be finite
//!   and > 0") rather than low-level details.
//! - Indices carried by variants are 0-based, matching Rust and NumPy.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type PVarResult<T> = Result<T, PVarError>;

/// PVarError: validation failures for p-variation inputs and options.
///
/// Variants
/// --------
/// - `InvalidExponent(p)`
///   The exponent is NaN, infinite, or not strictly positive.
/// - `NonFiniteData { index, value }`
///   The input sequence holds a NaN or ±∞ at `index`.
/// - `InvalidCheckpointStride { stride, max }`
///   The checkpoint stride lies outside `1..=max`.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it works
///   with `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum PVarError {
    //------ Input validation errors ------
    InvalidExponent(f64),
    NonFiniteData { index: usize, value: f64 },

    //------ Options validation errors ------
    InvalidCheckpointStride { stride: usize, max: usize },
}

impl std::error::Error for PVarError {}

impl std::fmt::Display for PVarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PVarError::InvalidExponent(p) => {
                write!(f, "Invalid exponent p: {p}. Must be finite and > 0.")
            }
            PVarError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            PVarError::InvalidCheckpointStride { stride, max } => {
                write!(f, "Invalid checkpoint stride: {stride}. Must satisfy 1 ≤ stride ≤ {max}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<PVarError> for PyErr {
    fn from(err: PVarError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for every PVarError variant.
    // - Embedding of payload values (p, index, stride) into messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<PVarError> for PyErr` conversion, which needs the Python
    //   C API and is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `PVarError::InvalidExponent` includes the offending p.
    //
    // Given
    // -----
    // - `PVarError::InvalidExponent(-0.5)`.
    //
    // Expect
    // ------
    // - The message contains "-0.5".
    fn pvar_error_invalid_exponent_includes_payload_in_display() {
        // Arrange
        let err = PVarError::InvalidExponent(-0.5);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-0.5"), "Display message should include offending p.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `PVarError::NonFiniteData` reports both index and value.
    //
    // Given
    // -----
    // - `NonFiniteData { index: 7, value: inf }`.
    //
    // Expect
    // ------
    // - The message contains "7" and "inf".
    fn pvar_error_non_finite_data_includes_index_and_value() {
        // Arrange
        let err = PVarError::NonFiniteData { index: 7, value: f64::INFINITY };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("inf"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `PVarError::InvalidCheckpointStride` reports the stride
    // and the admissible maximum.
    //
    // Given
    // -----
    // - `InvalidCheckpointStride { stride: 9, max: 4 }`.
    //
    // Expect
    // ------
    // - The message contains "9" and "4".
    fn pvar_error_invalid_stride_includes_stride_and_max() {
        // Arrange
        let err = PVarError::InvalidCheckpointStride { stride: 9, max: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('9'), "Display message should include the stride.\nGot: {msg}");
        assert!(msg.contains('4'), "Display message should include the maximum.\nGot: {msg}");
    }
}
