//! correlation::validation — input guards for correlogram construction.
//!
//! Purpose
//! -------
//! Centralize the checks on series length, finiteness, lag count and
//! significance level so that the ACF, PACF and Ljung-Box routines can
//! assume well-formed input.
//!
//! Invariants & assumptions
//! ------------------------
//! - A series of length `n` supports lags `0..=max_lag` only when
//!   `n >= max_lag + 1`.
//! - Partial autocorrelations are restricted to `max_lag < n / 2`, the
//!   same limit the reference statistical packages enforce. It leaves every
//!   order-k OLS regression with more rows than coefficients. `max_lag = 0`
//!   is always accepted.
//! - `alpha` must lie in the open interval (0, 1).
//!
//! Conventions
//! -----------
//! - Checks run in a fixed order (empty, finiteness, length, PACF limit,
//!   alpha) so that the reported error is deterministic.
//! - This module performs no allocation beyond error construction.

use crate::correlation::errors::{CorrResult, ValidationError};

/// Validate a sample sequence and lag bound for correlogram construction.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample sequence. Must be non-empty and contain only finite values.
/// - `max_lag`: `usize`
///   Largest lag requested. Must satisfy `max_lag + 1 <= n` and, unless it
///   is zero, `max_lag < n / 2`.
///
/// Errors
/// ------
/// - `ValidationError::EmptySeries` when `data` is empty.
/// - `ValidationError::NonFiniteData { index, value }` for the first NaN or
///   ±∞ element.
/// - `ValidationError::InsufficientData { needed, got }` when
///   `n < max_lag + 1`.
/// - `ValidationError::LagTooLarge { max_lag, limit }` when
///   `max_lag >= n / 2`; `limit` is `n / 2 - 1`.
///
/// Examples
/// --------
/// ```rust
/// # use box_jenkins::correlation::validation::validate_series;
/// let data = vec![0.4_f64, -0.1, 0.3, 0.2, -0.5, 0.1];
/// assert!(validate_series(&data, 2).is_ok());
/// assert!(validate_series(&data, 3).is_err());
/// assert!(validate_series(&data, 12).is_err());
/// ```
pub fn validate_series(data: &[f64], max_lag: usize) -> CorrResult<()> {
    if data.is_empty() {
        return Err(ValidationError::EmptySeries.into());
    }

    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationError::NonFiniteData { index, value }.into());
    }

    let n = data.len();
    if n < max_lag + 1 {
        return Err(ValidationError::InsufficientData { needed: max_lag + 1, got: n }.into());
    }

    if max_lag > 0 && max_lag >= n / 2 {
        let limit = (n / 2).saturating_sub(1);
        return Err(ValidationError::LagTooLarge { max_lag, limit }.into());
    }

    Ok(())
}

/// Validate a two-sided significance level.
pub fn validate_alpha(alpha: f64) -> CorrResult<()> {
    if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAlpha { alpha }.into())
    }
}
