//! correlation::correlogram — ACF, PACF and Ljung-Box tables in one call.
//!
//! Purpose
//! -------
//! Provide the public entry point of the crate: given a univariate series
//! and [`CorrelogramOptions`], build the ACF table, the PACF table and
//! (optionally) the Ljung-Box table used for Box-Jenkins identification.
//!
//! Key behaviors
//! -------------
//! - Validates options and input before any estimation runs.
//! - Computes autocorrelations once and reuses them for the ACF table, the
//!   Bartlett band and the Ljung-Box statistics.
//! - Frames every confidence band around zero (offsets `−h`, `+h`).
//! - The PACF band is `z / √n` from lag 1 on and zero at lag 0, where the
//!   estimate is fixed at 1.
//!
//! Invariants & assumptions
//! ------------------------
//! - ACF and PACF tables have `max_lag + 1` rows with `estimate == 1.0` at
//!   lag 0; the Q table has `max_lag` rows.
//! - The computation is pure: the same series and options always produce
//!   identical tables.
//!
//! Downstream usage
//! ----------------
//! - Python bindings wrap [`Correlogram`] and convert its tables to column
//!   dictionaries.
//! - Rust callers read the tables through [`Correlogram::acf`],
//!   [`Correlogram::pacf`] and [`Correlogram::qstat`].
//!
//! Testing notes
//! -------------
//! - Unit tests below cover shape, option plumbing and error routing.
//! - Statistical scenarios on simulated series live in
//!   `tests/integration_correlogram.rs`.

use crate::correlation::{
    acf::{acf_half_widths, autocorrelation, normal_quantile},
    errors::CorrResult,
    ljung_box::ljung_box,
    options::CorrelogramOptions,
    pacf::{pacf_half_width, partial_autocorrelation},
    table::{CorrelationKind, CorrelationTable, QStatTable},
    validation::validate_series,
};
use log::debug;

/// Correlogram — correlation tables of one series.
///
/// Purpose
/// -------
/// Own the ACF, PACF and optional Ljung-Box tables together with the
/// options that produced them.
///
/// Fields
/// ------
/// - `acf`: [`CorrelationTable`] for lags `0..=max_lag`.
/// - `pacf`: [`CorrelationTable`] for lags `0..=max_lag`.
/// - `qstat`: `Option<QStatTable>`; `Some` iff `options.include_qstat`.
/// - `nobs`: sample size.
/// - `options`: the [`CorrelogramOptions`] used.
///
/// Examples
/// --------
/// ```rust
/// # use box_jenkins::correlation::{Correlogram, CorrelogramOptions, PacfMethod};
/// let data: Vec<f64> = (0..80).map(|t| (t as f64 * 0.37).cos() + 0.01 * t as f64).collect();
/// let opts = CorrelogramOptions::new(10).with_pacf_method(PacfMethod::LevinsonDurbin);
/// let correlogram = Correlogram::compute(&data, &opts).unwrap();
///
/// assert_eq!(correlogram.acf().len(), 11);
/// assert_eq!(correlogram.pacf().len(), 11);
/// assert_eq!(correlogram.qstat().unwrap().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    acf: CorrelationTable,
    pacf: CorrelationTable,
    qstat: Option<QStatTable>,
    nobs: usize,
    options: CorrelogramOptions,
}

impl Correlogram {
    /// Compute the correlation tables of `data`.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Sample sequence, read-only.
    /// - `options`: `&CorrelogramOptions`
    ///   Lag count, significance level and estimator choices.
    ///
    /// Returns
    /// -------
    /// `CorrResult<Correlogram>`
    ///
    /// Errors
    /// ------
    /// - `CorrError::Validation` for an invalid alpha, an empty series, a
    ///   non-finite value, a series shorter than `max_lag + 1`, or
    ///   `max_lag >= n / 2` (and `max_lag > 0`).
    /// - `CorrError::Estimation` for a constant series, a singular PACF
    ///   system or a non-finite estimate.
    pub fn compute(data: &[f64], options: &CorrelogramOptions) -> CorrResult<Self> {
        options.validate()?;
        validate_series(data, options.max_lag)?;

        let nobs = data.len();
        let max_lag = options.max_lag;
        debug!(
            "computing correlogram: n = {nobs}, max_lag = {max_lag}, pacf = {}, alpha = {}",
            options.pacf_method, options.alpha
        );

        let z = normal_quantile(options.alpha)?;

        let acf_values = autocorrelation(data, max_lag, options.fft)?;
        let acf_widths = acf_half_widths(&acf_values, nobs, z, options.acf_band);
        let acf = CorrelationTable::from_estimates(
            CorrelationKind::Acf,
            nobs,
            options.alpha,
            &acf_values,
            &acf_widths,
        );

        let pacf_values =
            partial_autocorrelation(data, max_lag, options.pacf_method, options.fft)?;
        let mut pacf_widths = vec![pacf_half_width(nobs, z); pacf_values.len()];
        pacf_widths[0] = 0.0;
        let pacf = CorrelationTable::from_estimates(
            CorrelationKind::Pacf,
            nobs,
            options.alpha,
            &pacf_values,
            &pacf_widths,
        );

        let qstat = if options.include_qstat {
            Some(QStatTable::new(nobs, ljung_box(&acf_values, nobs)?))
        } else {
            None
        };

        Ok(Correlogram { acf, pacf, qstat, nobs, options: options.clone() })
    }

    /// Shorthand for [`Correlogram::compute`] with default options and the
    /// given lag count.
    pub fn with_max_lag(data: &[f64], max_lag: usize) -> CorrResult<Self> {
        Self::compute(data, &CorrelogramOptions::new(max_lag))
    }

    pub fn acf(&self) -> &CorrelationTable {
        &self.acf
    }

    pub fn pacf(&self) -> &CorrelationTable {
        &self.pacf
    }

    /// Ljung-Box table, if it was requested.
    pub fn qstat(&self) -> Option<&QStatTable> {
        self.qstat.as_ref()
    }

    pub fn nobs(&self) -> usize {
        self.nobs
    }

    pub fn max_lag(&self) -> usize {
        self.options.max_lag
    }

    pub fn options(&self) -> &CorrelogramOptions {
        &self.options
    }
}
