//! correlation::pacf — partial autocorrelation estimators.
//!
//! Purpose
//! -------
//! Estimate the partial autocorrelation φₖₖ for k = 0..=max_lag with the
//! estimator selected by [`PacfMethod`], and provide the half-width of the
//! PACF confidence band.
//!
//! Key behaviors
//! -------------
//! - Yule-Walker variants solve, for each order k, the Toeplitz system
//!   R₍ₖ₎ φ = (r₁, …, rₖ)ᵀ with R₍ₖ₎[i, j] = r_|i−j| and report the last
//!   coefficient. `Adjusted`/`Unbiased` scale the lagged products by
//!   `1 / (n − k)`, `Mle` by `1 / n`.
//! - `LevinsonDurbin` runs the Durbin-Levinson recursion on the biased
//!   autocorrelations and agrees with `YuleWalkerMle` up to rounding;
//!   `LevinsonDurbinAdjusted` runs it on the `1 / (n − k)` scaled ones and
//!   agrees with `YuleWalkerAdjusted`.
//! - `Ols` regresses xₜ on an intercept and xₜ₋₁..xₜ₋ₖ for each k and
//!   reports the coefficient on xₜ₋ₖ. The series is demeaned first, which
//!   leaves the slopes unchanged and keeps the normal equations well
//!   conditioned for series with a large level.
//! - φ₀₀ is always exactly 1.0.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input has passed `correlation::validation`; in particular
//!   `max_lag < n / 2` (or `max_lag = 0`). The order-k OLS regression then
//!   has `n − k >= k + 2` rows for `k + 1` coefficients.
//! - A system that cannot be solved at order k surfaces as
//!   `EstimationError::SingularSystem { lag: k }`; no regularization or
//!   fallback estimator is attempted.
//!
//! Conventions
//! -----------
//! - Linear algebra uses `nalgebra` (`LU` for Toeplitz systems, Cholesky
//!   for the OLS normal equations).

use crate::correlation::{
    acf::{ensure_variance, lagged_products, mean},
    errors::{CorrResult, EstimationError},
    options::PacfMethod,
};
use log::trace;
use nalgebra::{DMatrix, DVector};

/// Partial autocorrelations φₖₖ for k = 0..=max_lag.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Validated series of length n with `max_lag < n / 2`.
/// - `max_lag`: `usize`
///   Largest lag to estimate.
/// - `method`: [`PacfMethod`]
///   Estimator variant.
/// - `fft`: `bool`
///   Passed to the autocovariance routine for the Yule-Walker and
///   Durbin-Levinson variants; ignored by `Ols`.
///
/// Returns
/// -------
/// `CorrResult<Vec<f64>>` of length `max_lag + 1` with `pacf[0] == 1.0`.
///
/// Errors
/// ------
/// - `EstimationError::ZeroVariance` for a constant series.
/// - `EstimationError::SingularSystem { lag }` when the order-`lag`
///   system is singular.
/// - `EstimationError::NonFiniteEstimate { lag, value }` if a solved
///   coefficient is NaN or ±∞.
pub fn partial_autocorrelation(
    data: &[f64], max_lag: usize, method: PacfMethod, fft: bool,
) -> CorrResult<Vec<f64>> {
    let n = data.len();
    let products = lagged_products(data, max_lag, fft);
    ensure_variance(data, products[0] / n as f64)?;

    let pacf = match method {
        PacfMethod::YuleWalkerAdjusted | PacfMethod::YuleWalkerUnbiased => {
            let acov: Vec<f64> =
                products.iter().enumerate().map(|(k, s)| s / (n - k) as f64).collect();
            yule_walker(&acov, max_lag)?
        }
        PacfMethod::YuleWalkerMle => {
            let acov: Vec<f64> = products.iter().map(|s| s / n as f64).collect();
            yule_walker(&acov, max_lag)?
        }
        PacfMethod::LevinsonDurbin => {
            let acf: Vec<f64> = products.iter().map(|s| s / products[0]).collect();
            levinson_durbin(&acf, max_lag)?
        }
        PacfMethod::LevinsonDurbinAdjusted => {
            let c0 = products[0] / n as f64;
            let acf: Vec<f64> =
                products.iter().enumerate().map(|(k, s)| s / (n - k) as f64 / c0).collect();
            levinson_durbin(&acf, max_lag)?
        }
        PacfMethod::Ols => ols(data, max_lag)?,
    };

    if let Some((lag, &value)) = pacf.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EstimationError::NonFiniteEstimate { lag, value }.into());
    }
    trace!("partial autocorrelation computed with {method} up to lag {max_lag}");
    Ok(pacf)
}

/// Half-width z / √n of the PACF confidence band.
#[inline]
pub fn pacf_half_width(nobs: usize, z: f64) -> f64 {
    z / (nobs as f64).sqrt()
}

// ---- Estimators ----

fn yule_walker(acov: &[f64], max_lag: usize) -> CorrResult<Vec<f64>> {
    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    for k in 1..=max_lag {
        let toeplitz = DMatrix::from_fn(k, k, |i, j| acov[i.abs_diff(j)]);
        let rhs = DVector::from_fn(k, |i, _| acov[i + 1]);
        let phi = toeplitz.lu().solve(&rhs).ok_or(EstimationError::SingularSystem { lag: k })?;
        pacf.push(phi[k - 1]);
    }
    Ok(pacf)
}

fn levinson_durbin(acf: &[f64], max_lag: usize) -> CorrResult<Vec<f64>> {
    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);

    // phi[j - 1] holds φₖ,ⱼ of the current order k
    let mut phi: Vec<f64> = Vec::with_capacity(max_lag);
    let mut sigma = 1.0_f64;
    for k in 1..=max_lag {
        let numerator =
            acf[k] - phi.iter().enumerate().map(|(j, p)| p * acf[k - 1 - j]).sum::<f64>();
        if sigma.abs() < f64::EPSILON {
            return Err(EstimationError::SingularSystem { lag: k }.into());
        }
        let phi_kk = numerator / sigma;

        let previous = phi.clone();
        for (j, value) in phi.iter_mut().enumerate() {
            *value = previous[j] - phi_kk * previous[k - 2 - j];
        }
        phi.push(phi_kk);
        sigma *= 1.0 - phi_kk * phi_kk;
        pacf.push(phi_kk);
    }
    Ok(pacf)
}

fn ols(data: &[f64], max_lag: usize) -> CorrResult<Vec<f64>> {
    let n = data.len();
    let m = mean(data);
    let data: Vec<f64> = data.iter().map(|x| x - m).collect();
    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    for k in 1..=max_lag {
        let rows = n - k;
        let design = DMatrix::from_fn(rows, k + 1, |r, c| match c {
            0 => 1.0,
            lag => data[r + k - lag],
        });
        let target = DVector::from_fn(rows, |r, _| data[r + k]);

        let gram = design.transpose() * &design;
        let moment = design.transpose() * &target;
        let beta = gram
            .cholesky()
            .map(|chol| chol.solve(&moment))
            .ok_or(EstimationError::SingularSystem { lag: k })?;
        pacf.push(beta[k]);
    }
    Ok(pacf)
}
