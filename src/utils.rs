//! utils: conversion helpers for the PyO3 boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature. The
//! helpers turn Python arguments into the plain Rust values expected by the
//! `variation` module and map failures into Python exceptions.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::variation::core::options::PVarOptions;

/// Borrow or build a contiguous 1-D `float64` array from a Python object.
///
/// Accepts, in order of preference:
/// - a contiguous 1-D `numpy.ndarray` of `float64` (borrowed, no copy),
/// - any object with a `to_numpy()` method, such as a `pandas.Series`,
/// - any Python sequence of floats (copied once into a new array).
///
/// Errors
/// ------
/// - `TypeError` when none of the above conversions succeeds.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Build [`PVarOptions`] from the optional `checkpoint_stride` keyword.
///
/// `None` selects the default stride; an out-of-range stride raises
/// `ValueError` through `From<PVarError> for PyErr`.
#[cfg(feature = "python-bindings")]
pub fn build_pvar_options(checkpoint_stride: Option<usize>) -> PyResult<PVarOptions> {
    match checkpoint_stride {
        Some(stride) => Ok(PVarOptions::new(stride)?),
        None => Ok(PVarOptions::default()),
    }
}

/// Borrow the contents of an extracted array as a slice.
///
/// `extract_f64_array` only returns contiguous arrays, so failure here means
/// the invariant was broken upstream.
#[cfg(feature = "python-bindings")]
pub fn as_contiguous_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    arr.as_slice().map_err(|_| {
        PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
    })
}
