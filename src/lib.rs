//! box_jenkins — correlation tables for Box-Jenkins model identification.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the correlogram builder to Python via the `_box_jenkins`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing class and submodule used by the
//! `box_jenkins` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`correlation`] module as the public crate surface.
//! - Define the `Correlogram` `#[pyclass]` wrapper and the `#[pymodule]`
//!   initializer for the `_box_jenkins` extension.
//! - Register the `correlation` submodule under `box_jenkins` in
//!   `sys.modules` so that dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in [`correlation`]; this file only
//!   performs FFI glue, argument parsing and error mapping.
//! - Python-side tables use the `values` / `ci_low` / `ci_upp` / `pvalues`
//!   column layout of the pandas correlograms, so existing Altair plotting
//!   code can consume them unchanged.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`correlation`] directly and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! ```rust
//! use box_jenkins::correlation::prelude::*;
//!
//! let data: Vec<f64> = (0..120).map(|t| (t as f64 * 0.5).sin()).collect();
//! let correlogram = Correlogram::with_max_lag(&data, 12).unwrap();
//! for row in correlogram.acf().plot_rows() {
//!     println!("{:>3} {:+.3} ±{:.3}", row.lag, row.estimate, row.half_width());
//! }
//! ```

pub mod correlation;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    correlation::{AcfBand, Correlogram as RustCorrelogram, CorrelogramOptions, PacfMethod},
    utils::{correlation_columns, extract_f64_array, qstat_columns},
};

/// Correlogram — Python-facing wrapper for the correlation table builder.
///
/// Purpose
/// -------
/// Compute ACF, PACF and Ljung-Box tables from Python and hand them back
/// as column dictionaries ready for `pandas.DataFrame`.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Correlogram(data, nlags=24, alpha=0.05, pacf_method="yule_walker_adjusted",
/// acf_band="white_noise", qstat=True, fft=True)`:
/// - `data`: array-like of `f64`, finite, length ≥ `nlags + 1`.
/// - `nlags`: largest lag.
/// - `alpha`: two-sided significance level in (0, 1).
/// - `pacf_method`: PACF estimator name (statsmodels short names accepted).
/// - `acf_band`: `"white_noise"` or `"bartlett"`.
/// - `qstat`: compute Ljung-Box statistics.
/// - `fft`: frequency-domain autocovariance.
///
/// Fields
/// ------
/// - `inner`: [`RustCorrelogram`] holding the computed tables.
///
/// Notes
/// -----
/// - Every Rust-side error surfaces as `ValueError`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "box_jenkins.correlation", name = "Correlogram", frozen)]
pub struct PyCorrelogram {
    inner: RustCorrelogram,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyCorrelogram {
    #[new]
    #[pyo3(
        signature = (
            raw_data,
            nlags = 24,
            alpha = 0.05,
            pacf_method = "yule_walker_adjusted",
            acf_band = "white_noise",
            qstat = true,
            fft = true,
        ),
        text_signature = "(data, /, nlags=24, alpha=0.05, pacf_method='yule_walker_adjusted', \
                          acf_band='white_noise', qstat=True, fft=True)"
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, nlags: usize, alpha: f64,
        pacf_method: &str, acf_band: &str, qstat: bool, fft: bool,
    ) -> PyResult<Self> {
        let pacf_method: PacfMethod =
            pacf_method.parse().map_err(|e| PyValueError::new_err(format!("{e}")))?;
        let acf_band: AcfBand =
            acf_band.parse().map_err(|e| PyValueError::new_err(format!("{e}")))?;

        let arr: PyReadonlyArray1<f64> = extract_f64_array(py, raw_data)?;
        let data: &[f64] = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D array"))?;

        let options = CorrelogramOptions::new(nlags)
            .with_alpha(alpha)
            .with_pacf_method(pacf_method)
            .with_acf_band(acf_band)
            .with_qstat(qstat)
            .with_fft(fft);
        let inner = RustCorrelogram::compute(data, &options)?;
        Ok(PyCorrelogram { inner })
    }

    /// ACF table as `{"lag", "values", "ci_low", "ci_upp"}` columns.
    #[getter]
    pub fn acf<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        correlation_columns(py, self.inner.acf())
    }

    /// PACF table as `{"lag", "values", "ci_low", "ci_upp"}` columns.
    #[getter]
    pub fn pacf<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        correlation_columns(py, self.inner.pacf())
    }

    /// Ljung-Box table as `{"lag", "values", "pvalues"}` columns, or `None`
    /// when constructed with `qstat=False`.
    #[getter]
    pub fn qstat<'py>(&self, py: Python<'py>) -> PyResult<Option<Bound<'py, PyDict>>> {
        self.inner.qstat().map(|table| qstat_columns(py, table)).transpose()
    }

    #[getter]
    pub fn nobs(&self) -> usize {
        self.inner.nobs()
    }

    #[getter]
    pub fn nlags(&self) -> usize {
        self.inner.max_lag()
    }

    #[getter]
    pub fn alpha(&self) -> f64 {
        self.inner.options().alpha
    }

    #[getter]
    pub fn pacf_method(&self) -> &'static str {
        self.inner.options().pacf_method.name()
    }

    fn __repr__(&self) -> String {
        format!(
            "Correlogram(nobs={}, nlags={}, alpha={}, pacf_method='{}')",
            self.inner.nobs(),
            self.inner.max_lag(),
            self.inner.options().alpha,
            self.inner.options().pacf_method
        )
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _box_jenkins<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let correlation_mod = PyModule::new(_py, "correlation")?;
    correlation(_py, m, &correlation_mod)?;

    // Register in sys.modules so `import box_jenkins.correlation` resolves.
    _py.import("sys")?.getattr("modules")?.set_item("box_jenkins.correlation", correlation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn correlation<'py>(
    _py: Python, box_jenkins: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyCorrelogram>()?;
    box_jenkins.add_submodule(m)?;
    Ok(())
}
