//! utils — conversion helpers for the Python bindings.
//!
//! Purpose
//! -------
//! Move data across the PyO3 boundary: accept array-likes from Python as
//! contiguous `f64` buffers and turn correlation tables into column
//! dictionaries that `pandas.DataFrame` accepts directly.
//!
//! Conventions
//! -----------
//! - Column names follow the DataFrames the Python package has always
//!   produced: `lag`, `values`, `ci_low`, `ci_upp` for ACF/PACF tables and
//!   `lag`, `values`, `pvalues` for the Ljung-Box table.
//! - Everything here is compiled only with the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use crate::correlation::{CorrelationTable, QStatTable};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array1 / Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    types::{PyAny, PyDict},
};

/// Accept a 1-D `numpy.ndarray`, a `pandas.Series` or any sequence of
/// floats as a contiguous read-only `f64` array.
///
/// Errors
/// ------
/// - `TypeError` when `raw_data` is none of the above.
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

    // pandas.Series and friends
    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
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

/// Columns `lag`, `values`, `ci_low`, `ci_upp` of an ACF or PACF table as
/// numpy arrays.
#[cfg(feature = "python-bindings")]
pub fn correlation_columns<'py>(
    py: Python<'py>, table: &CorrelationTable,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("lag", table.lags().into_pyarray(py))?;
    dict.set_item("values", table.estimates().into_pyarray(py))?;
    dict.set_item("ci_low", table.ci_low_offsets().into_pyarray(py))?;
    dict.set_item("ci_upp", table.ci_high_offsets().into_pyarray(py))?;
    Ok(dict)
}

/// Columns `lag`, `values`, `pvalues` of a Ljung-Box table.
#[cfg(feature = "python-bindings")]
pub fn qstat_columns<'py>(py: Python<'py>, table: &QStatTable) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("lag", table.lags().into_pyarray(py))?;
    dict.set_item("values", table.statistics().into_pyarray(py))?;
    dict.set_item("pvalues", table.p_values().into_pyarray(py))?;
    Ok(dict)
}
