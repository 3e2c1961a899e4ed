//! correlation::ljung_box — cumulative Ljung-Box Q statistics.
//!
//! Purpose
//! -------
//! Turn the sample autocorrelations r̂₁..r̂ₘ of a series into the sequence of
//! Ljung-Box portmanteau statistics Q₁..Qₘ and their χ² p-values, one row
//! per lag.
//!
//! Key behaviors
//! -------------
//! - Qₖ = n(n + 2) Σ_{j=1..k} r̂ⱼ² / (n − j), accumulated in a single pass.
//! - pₖ = P(χ²ₖ > Qₖ), evaluated with `statrs`' survival function.
//! - Lag 0 never appears: the table has exactly `acf.len() - 1` rows.
//!
//! Invariants & assumptions
//! ------------------------
//! - `acf` comes from `acf::autocorrelation` on a validated series, so
//!   `acf.len() <= nobs` and every n − j is positive.
//! - Qₖ is non-decreasing in k and each pₖ lies in [0, 1].

use crate::correlation::{
    errors::{CorrResult, EstimationError},
    table::QStatRow,
};
use log::trace;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Ljung-Box rows for lags 1..=max_lag.
///
/// Parameters
/// ----------
/// - `acf`: `&[f64]`
///   Autocorrelations r̂₀..r̂ₘ (r̂₀ is ignored).
/// - `nobs`: `usize`
///   Sample size n used to estimate `acf`.
///
/// Returns
/// -------
/// `CorrResult<Vec<QStatRow>>` with one row per lag k = 1..=m.
///
/// Errors
/// ------
/// - `EstimationError::Distribution` if the χ²ₖ reference distribution
///   cannot be constructed.
pub fn ljung_box(acf: &[f64], nobs: usize) -> CorrResult<Vec<QStatRow>> {
    let n = nobs as f64;
    let scale = n * (n + 2.0);

    let mut rows = Vec::with_capacity(acf.len().saturating_sub(1));
    let mut running = 0.0;
    for (lag, r) in acf.iter().enumerate().skip(1) {
        running += r * r / (n - lag as f64);
        let statistic = scale * running;
        let chi2 = ChiSquared::new(lag as f64)
            .map_err(|e| EstimationError::Distribution(e.to_string()))?;
        let p_value = chi2.sf(statistic).clamp(0.0, 1.0);
        rows.push(QStatRow { lag, statistic, p_value });
    }

    trace!("ljung-box statistics computed for {} lags", rows.len());
    Ok(rows)
}
