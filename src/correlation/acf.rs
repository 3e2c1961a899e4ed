//! correlation::acf — sample autocovariance, autocorrelation and ACF bands.
//!
//! Purpose
//! -------
//! Compute the biased sample autocovariance γ̂ₖ and autocorrelation
//! r̂ₖ = γ̂ₖ / γ̂₀ up to a maximum lag, either in the frequency domain (FFT)
//! or by direct summation, together with the half-widths of the ACF
//! confidence band.
//!
//! Key behaviors
//! -------------
//! - [`autocovariance`] returns γ̂ₖ = (1 / n) Σₜ (xₜ − x̄)(xₜ₊ₖ − x̄) for
//!   k = 0..=max_lag. The FFT path zero-pads the demeaned series to a power
//!   of two no shorter than 2n − 1 so the circular correlation equals the
//!   linear one.
//! - [`autocorrelation`] normalizes by γ̂₀ and pins r̂₀ to exactly 1.0.
//! - [`acf_half_widths`] implements the white-noise and Bartlett band
//!   formulas selected by [`AcfBand`].
//! - [`normal_quantile`] returns z₁₋α/₂ used by every band in the crate.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers pass validated input (`correlation::validation`): non-empty,
//!   finite, and `max_lag < n`.
//! - A constant series (or one whose γ̂₀ underflows to zero) yields
//!   `EstimationError::ZeroVariance` instead of NaN correlations. The
//!   level of the series plays no role.
//!
//! Testing notes
//! -------------
//! - Unit tests compare the FFT and direct paths, check hand-computed
//!   values on short series and exercise both band formulas.

use crate::correlation::{
    errors::{CorrResult, EstimationError},
    options::AcfBand,
};
use log::trace;
use rustfft::{FftPlanner, num_complex::Complex64};
use statrs::distribution::{ContinuousCDF, Normal};

/// Sample mean x̄ of a non-empty series.
#[inline]
pub(crate) fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Biased sample autocovariance γ̂ₖ for k = 0..=max_lag.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Validated series of length n > max_lag.
/// - `max_lag`: `usize`
///   Largest lag to return.
/// - `fft`: `bool`
///   Use the frequency-domain path when `true`, direct summation otherwise.
///
/// Returns
/// -------
/// `Vec<f64>` of length `max_lag + 1` with the `1 / n` normalization.
///
/// Panics
/// ------
/// - Panics if `data` is empty or `max_lag >= data.len()`; public entry
///   points validate both conditions first.
pub fn autocovariance(data: &[f64], max_lag: usize, fft: bool) -> Vec<f64> {
    let n = data.len() as f64;
    lagged_products(data, max_lag, fft).into_iter().map(|s| s / n).collect()
}

/// Raw lagged cross-products Σₜ (xₜ − x̄)(xₜ₊ₖ − x̄) for k = 0..=max_lag.
///
/// Kept unnormalized so that estimators can apply either the `1 / n` or
/// the `1 / (n − k)` scaling without compounding rounding error.
pub(crate) fn lagged_products(data: &[f64], max_lag: usize, fft: bool) -> Vec<f64> {
    let m = mean(data);
    let demeaned: Vec<f64> = data.iter().map(|x| x - m).collect();
    if fft {
        lagged_products_fft(&demeaned, max_lag)
    } else {
        lagged_products_direct(&demeaned, max_lag)
    }
}

fn lagged_products_direct(demeaned: &[f64], max_lag: usize) -> Vec<f64> {
    (0..=max_lag)
        .map(|k| demeaned[k..].iter().zip(demeaned).map(|(a, b)| a * b).sum::<f64>())
        .collect()
}

fn lagged_products_fft(demeaned: &[f64], max_lag: usize) -> Vec<f64> {
    let n = demeaned.len();
    let size = (2 * n - 1).next_power_of_two();

    let mut buffer: Vec<Complex64> = demeaned
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .chain(std::iter::repeat(Complex64::new(0.0, 0.0)))
        .take(size)
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(size).process(&mut buffer);
    for value in buffer.iter_mut() {
        *value = Complex64::new(value.norm_sqr(), 0.0);
    }
    planner.plan_fft_inverse(size).process(&mut buffer);

    // rustfft leaves the inverse unnormalized
    let scale = size as f64;
    buffer.iter().take(max_lag + 1).map(|c| c.re / scale).collect()
}

/// Reject a series whose demeaned values carry no variation.
///
/// Only the spread around the mean matters: a large level with ordinary
/// fluctuations (prices, timestamps) is a valid series.
pub(crate) fn ensure_variance(data: &[f64], c0: f64) -> CorrResult<()> {
    let constant = data.iter().all(|&x| x == data[0]);
    if constant || c0 <= 0.0 {
        return Err(EstimationError::ZeroVariance.into());
    }
    Ok(())
}

/// Sample autocorrelations r̂ₖ = γ̂ₖ / γ̂₀ for k = 0..=max_lag.
///
/// Returns
/// -------
/// `CorrResult<Vec<f64>>` with `r[0] == 1.0` exactly.
///
/// Errors
/// ------
/// - `EstimationError::ZeroVariance` for a constant series or γ̂₀ = 0.
/// - `EstimationError::NonFiniteEstimate` if any r̂ₖ is not finite, which
///   can only happen through overflow on extreme inputs.
pub fn autocorrelation(data: &[f64], max_lag: usize, fft: bool) -> CorrResult<Vec<f64>> {
    let acov = autocovariance(data, max_lag, fft);
    let c0 = acov[0];
    ensure_variance(data, c0)?;

    let mut acf: Vec<f64> = acov.iter().map(|c| c / c0).collect();
    acf[0] = 1.0;
    if let Some((lag, &value)) = acf.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EstimationError::NonFiniteEstimate { lag, value }.into());
    }
    trace!("autocorrelation computed for {} lags (fft = {fft})", max_lag + 1);
    Ok(acf)
}

/// Two-sided standard normal quantile z₁₋α/₂.
///
/// Errors
/// ------
/// - `EstimationError::Distribution` if the standard normal cannot be
///   constructed (never expected in practice).
pub fn normal_quantile(alpha: f64) -> CorrResult<f64> {
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| EstimationError::Distribution(e.to_string()))?;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0))
}

/// Half-widths of the ACF confidence band for each lag.
///
/// Parameters
/// ----------
/// - `acf`: `&[f64]`
///   Autocorrelations r̂₀..r̂ₘ (only used by the Bartlett formula).
/// - `nobs`: `usize`
///   Sample size n.
/// - `z`: `f64`
///   Normal quantile from [`normal_quantile`].
/// - `band`: [`AcfBand`]
///   Band formula.
///
/// Returns
/// -------
/// `Vec<f64>` of the same length as `acf`.
///
/// Notes
/// -----
/// - `WhiteNoise` returns z / √n everywhere, lag 0 included, so plotted
///   bands stay flat across the whole lag axis.
/// - `Bartlett` follows the large-lag variance
///   Var(r̂ₖ) ≈ (1 + 2 Σ_{j=1}^{k−1} r̂ⱼ²) / n with Var(r̂₀) = 0.
pub fn acf_half_widths(acf: &[f64], nobs: usize, z: f64, band: AcfBand) -> Vec<f64> {
    let n = nobs as f64;
    match band {
        AcfBand::WhiteNoise => vec![z / n.sqrt(); acf.len()],
        AcfBand::Bartlett => {
            let mut widths = Vec::with_capacity(acf.len());
            let mut cumulative = 0.0;
            for (k, r) in acf.iter().enumerate() {
                let variance = match k {
                    0 => 0.0,
                    _ => (1.0 + 2.0 * cumulative) / n,
                };
                if k >= 1 {
                    cumulative += r * r;
                }
                widths.push(z * variance.sqrt());
            }
            widths
        }
    }
}
