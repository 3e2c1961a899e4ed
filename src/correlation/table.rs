//! correlation::table — lag-indexed result tables.
//!
//! Purpose
//! -------
//! Hold the output of a correlogram computation in a plotting-friendly
//! shape: one row per lag, a point estimate and two confidence offsets
//! framed around zero, plus the Ljung-Box rows.
//!
//! Key behaviors
//! -------------
//! - [`CorrelationTable`] stores ACF or PACF rows for lags `0..=max_lag`
//!   together with the sample size and significance level they were
//!   computed with.
//! - [`QStatTable`] stores Ljung-Box rows for lags `1..=max_lag`.
//! - Columns are exposed as `ndarray::Array1<f64>`; rows serialize with
//!   `serde` so tables can be written as JSON records or CSV for an
//!   external charting layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rows are sorted by lag, contiguous, and start at 0 (ACF/PACF) or 1
//!   (Q statistics).
//! - `ci_low_offset = lower_bound − estimate` and
//!   `ci_high_offset = upper_bound − estimate`; with the symmetric normal
//!   bands used here this is `−h` and `+h`.
//! - Tables are immutable once built.
//!
//! Downstream usage
//! ----------------
//! - A bar layer plots `estimate` against `lag`; two band layers plot
//!   `ci_low_offset` and `ci_high_offset`. Use [`CorrelationTable::plot_rows`]
//!   to drop the trivial lag-0 row.

use crate::correlation::errors::ExportError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::{fmt, io};

/// Which correlation function a [`CorrelationTable`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    Acf,
    Pacf,
}

impl fmt::Display for CorrelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelationKind::Acf => f.write_str("ACF"),
            CorrelationKind::Pacf => f.write_str("PACF"),
        }
    }
}

/// One lag of an ACF or PACF table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRow {
    pub lag: usize,
    pub estimate: f64,
    pub ci_low_offset: f64,
    pub ci_high_offset: f64,
}

impl CorrelationRow {
    /// Lower end of the confidence interval around the estimate.
    pub fn lower_bound(&self) -> f64 {
        self.estimate + self.ci_low_offset
    }

    /// Upper end of the confidence interval around the estimate.
    pub fn upper_bound(&self) -> f64 {
        self.estimate + self.ci_high_offset
    }

    /// Half-width of the band, `(ci_high_offset − ci_low_offset) / 2`.
    pub fn half_width(&self) -> f64 {
        0.5 * (self.ci_high_offset - self.ci_low_offset)
    }

    /// `true` when the estimate lies strictly outside the zero-centred band
    /// `[ci_low_offset, ci_high_offset]`.
    pub fn is_significant(&self) -> bool {
        self.estimate < self.ci_low_offset || self.estimate > self.ci_high_offset
    }
}

/// One lag of the Ljung-Box table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QStatRow {
    pub lag: usize,
    pub statistic: f64,
    pub p_value: f64,
}

/// CorrelationTable — ACF or PACF estimates with confidence offsets.
///
/// Construction
/// ------------
/// Built by `Correlogram::compute`; the constructor is crate-private so
/// the row invariants above always hold.
///
/// Examples
/// --------
/// ```rust
/// # use box_jenkins::correlation::Correlogram;
/// let data: Vec<f64> = (0..60).map(|t| (t as f64 * 0.9).sin()).collect();
/// let correlogram = Correlogram::with_max_lag(&data, 6).unwrap();
/// let acf = correlogram.acf();
/// assert_eq!(acf.len(), 7);
/// assert_eq!(acf.plot_rows().len(), 6);
/// assert_eq!(acf.get(0).unwrap().estimate, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationTable {
    kind: CorrelationKind,
    nobs: usize,
    alpha: f64,
    rows: Vec<CorrelationRow>,
}

impl CorrelationTable {
    /// Assemble a table from estimates and half-widths of equal length,
    /// indexed by lag from 0.
    pub(crate) fn from_estimates(
        kind: CorrelationKind, nobs: usize, alpha: f64, estimates: &[f64], half_widths: &[f64],
    ) -> Self {
        let rows = estimates
            .iter()
            .zip(half_widths)
            .enumerate()
            .map(|(lag, (&estimate, &h))| CorrelationRow {
                lag,
                estimate,
                ci_low_offset: -h,
                ci_high_offset: h,
            })
            .collect();
        CorrelationTable { kind, nobs, alpha, rows }
    }

    pub fn kind(&self) -> CorrelationKind {
        self.kind
    }

    pub fn nobs(&self) -> usize {
        self.nobs
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn rows(&self) -> &[CorrelationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest lag in the table.
    pub fn max_lag(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Row at `lag`, if present.
    pub fn get(&self, lag: usize) -> Option<&CorrelationRow> {
        self.rows.get(lag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorrelationRow> {
        self.rows.iter()
    }

    /// Rows from lag 1 onwards.
    pub fn plot_rows(&self) -> &[CorrelationRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Lags ≥ 1 whose estimate falls outside the band.
    pub fn significant_lags(&self) -> Vec<usize> {
        self.plot_rows().iter().filter(|r| r.is_significant()).map(|r| r.lag).collect()
    }

    pub fn lags(&self) -> Array1<usize> {
        self.rows.iter().map(|r| r.lag).collect()
    }

    pub fn estimates(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.estimate).collect()
    }

    pub fn ci_low_offsets(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.ci_low_offset).collect()
    }

    pub fn ci_high_offsets(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.ci_high_offset).collect()
    }

    /// Rows as a JSON array of `{lag, estimate, ci_low_offset, ci_high_offset}`
    /// records.
    pub fn to_json_records(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    /// Write the rows as CSV with a header line.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        write_records(writer, &self.rows)
    }
}

impl<'a> IntoIterator for &'a CorrelationTable {
    type Item = &'a CorrelationRow;
    type IntoIter = std::slice::Iter<'a, CorrelationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Ljung-Box statistics for lags `1..=max_lag`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QStatTable {
    nobs: usize,
    rows: Vec<QStatRow>,
}

impl QStatTable {
    pub(crate) fn new(nobs: usize, rows: Vec<QStatRow>) -> Self {
        QStatTable { nobs, rows }
    }

    pub fn nobs(&self) -> usize {
        self.nobs
    }

    pub fn rows(&self) -> &[QStatRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `lag` (lags start at 1).
    pub fn get(&self, lag: usize) -> Option<&QStatRow> {
        lag.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QStatRow> {
        self.rows.iter()
    }

    pub fn lags(&self) -> Array1<usize> {
        self.rows.iter().map(|r| r.lag).collect()
    }

    pub fn statistics(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.statistic).collect()
    }

    pub fn p_values(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.p_value).collect()
    }

    pub fn to_json_records(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        write_records(writer, &self.rows)
    }
}

impl<'a> IntoIterator for &'a QStatTable {
    type Item = &'a QStatRow;
    type IntoIter = std::slice::Iter<'a, QStatRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn write_records<W: io::Write, R: Serialize>(writer: W, rows: &[R]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
