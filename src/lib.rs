//! rust_pvar: exact p-variation of real-valued sequences with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the p-variation routines to Python via the `_rust_pvar` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing function, class, and submodule used by the `rust_pvar`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`variation`) as the public crate surface.
//! - Define the `pvar` `#[pyfunction]`, the `PVariation` `#[pyclass]`, and the
//!   `#[pymodule]` initializer for the `_rust_pvar` Python extension.
//! - Register the `variation` submodule under `rust_pvar` in `sys.modules` so
//!   that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `variation`; this file performs
//!   only FFI glue, argument conversion, and error mapping.
//! - `pvar` mirrors the total Rust function (no data validation), while
//!   `PVariation` mirrors [`PVarOutcome::compute`] and raises `ValueError` on
//!   out-of-contract input.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_rust_pvar.variation` and are typically
//!   wrapped by thin pure-Python facades in the top-level `rust_pvar` package.
//! - Errors from core Rust code are propagated as [`PVarError`] internally and
//!   converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`variation`] and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in `variation` and by
//!   `tests/integration_pvar_properties.rs`; the bindings are exercised by
//!   Python-level tests.
//!
//! [`PVarOutcome::compute`]: crate::variation::PVarOutcome::compute
//! [`PVarError`]: crate::variation::PVarError

pub mod utils;
pub mod variation;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    utils::{as_contiguous_slice, build_pvar_options, extract_f64_array},
    variation::{pvar::pvar_with_options, PVarOutcome},
};

/// pvar: p-variation of a one-dimensional array-like, callable from Python.
///
/// Parameters
/// ----------
/// Called from Python as `pvar(data, p, checkpoint_stride=None)`:
/// - `data`: `&PyAny`
///   One-dimensional array-like of `float64` values.
/// - `p`: `f64`
///   Exponent; intended domain `p >= 1` for exact results.
/// - `checkpoint_stride`: `Option<usize>`
///   Merge checkpoint stride in `1..=4`; defaults to 4.
///
/// Returns
/// -------
/// `float`
///   p-variation in sum-of-powers form. Inputs are not validated, matching
///   the Rust [`pvar`](crate::variation::pvar()) function.
///
/// Errors
/// ------
/// - `TypeError` when `data` is not convertible to a 1-D float array.
/// - `ValueError` when `checkpoint_stride` is out of range.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "pvar",
    text_signature = "(data, p, /, checkpoint_stride=None)",
    signature = (raw_data, p, checkpoint_stride = None)
)]
pub fn py_pvar<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, p: f64, checkpoint_stride: Option<usize>,
) -> PyResult<f64> {
    let options = build_pvar_options(checkpoint_stride)?;
    let arr = extract_f64_array(py, raw_data)?;
    let data = as_contiguous_slice(&arr)?;
    Ok(pvar_with_options(data, p, &options))
}

/// PVariation: Python-facing wrapper for a validated p-variation result.
///
/// Purpose
/// -------
/// Represent the outcome of [`PVarOutcome::compute`] when called from Python
/// and expose its scalars as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `PVariation(data, p, checkpoint_stride=None)`:
/// - `data`: `&PyAny`
///   One-dimensional array-like of finite `float64` values.
/// - `p`: `f64`
///   Finite, strictly positive exponent.
/// - `checkpoint_stride`: `Option<usize>`
///   Merge checkpoint stride in `1..=4`; defaults to 4.
///
/// Fields
/// ------
/// - `inner`: [`PVarOutcome`]
///   Rust-side result used by the accessors.
///
/// Notes
/// -----
/// - Native Rust code should call [`PVarOutcome::compute`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_pvar.variation")]
pub struct PVariation {
    inner: PVarOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PVariation {
    #[new]
    #[pyo3(
        text_signature = "(data, p, /, checkpoint_stride=None)",
        signature = (raw_data, p, checkpoint_stride = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, p: f64, checkpoint_stride: Option<usize>,
    ) -> PyResult<PVariation> {
        let options = build_pvar_options(checkpoint_stride)?;
        let arr = extract_f64_array(py, raw_data)?;
        let data = as_contiguous_slice(&arr)?;
        let inner = PVarOutcome::compute(data, p, &options)?;
        Ok(PVariation { inner })
    }

    /// p-variation in sum-of-powers form.
    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value()
    }

    /// p-variation norm, `value ** (1 / p)`.
    #[getter]
    pub fn norm(&self) -> f64 {
        self.inner.norm()
    }

    #[getter]
    pub fn p(&self) -> f64 {
        self.inner.p()
    }

    /// Number of observations in the input.
    #[getter]
    pub fn length(&self) -> usize {
        self.inner.n_obs()
    }

    fn __repr__(&self) -> String {
        format!("PVariation(value={}, p={}, length={})", self.value(), self.p(), self.length())
    }
}

/// _rust_pvar: PyO3 module initializer for the Python extension.
///
/// Creates the `variation` submodule, attaches it to `_rust_pvar`, and
/// registers it in `sys.modules` as `rust_pvar.variation` so it is importable
/// via a dotted path.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_pvar<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let variation_mod = PyModule::new(py, "variation")?;
    variation(py, m, &variation_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?.getattr("modules")?.set_item("rust_pvar.variation", variation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn variation<'py>(
    _py: Python<'py>, rust_pvar: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_pvar, m)?)?;
    m.add_class::<PVariation>()?;
    rust_pvar.add_submodule(m)?;
    Ok(())
}
