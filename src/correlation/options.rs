//! correlation::options — configuration for correlogram construction.
//!
//! Purpose
//! -------
//! Collect every knob of the correlogram builder in one place: lag count,
//! significance level, PACF estimator, ACF band formula, whether Ljung-Box
//! statistics are computed, and whether autocovariances go through the FFT.
//!
//! Key behaviors
//! -------------
//! - [`CorrelogramOptions`] is a plain data carrier with documented
//!   defaults and chained `with_*` setters.
//! - [`PacfMethod`] and [`AcfBand`] parse case-insensitively from strings so
//!   that bindings and configuration files can pass names.
//! - All types derive `serde` traits and can be read from or written to any
//!   serde format.
//!
//! Invariants & assumptions
//! ------------------------
//! - Options are not validated on construction; [`CorrelogramOptions::validate`]
//!   is called by the builder before any estimation runs. Series-dependent
//!   checks (lag versus length) live in `correlation::validation`.

use crate::correlation::{
    errors::{CorrResult, EstimationError},
    validation::validate_alpha,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default lag count.
pub const DEFAULT_MAX_LAG: usize = 24;

/// Default two-sided significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Estimator used for the partial autocorrelation function.
///
/// Variants
/// --------
/// - `YuleWalkerAdjusted`: Yule-Walker equations on autocovariances scaled
///   by `1 / (n - k)`.
/// - `YuleWalkerUnbiased`: legacy name of `YuleWalkerAdjusted`; produces
///   identical estimates.
/// - `YuleWalkerMle`: Yule-Walker equations on autocovariances scaled by
///   `1 / n`.
/// - `LevinsonDurbin`: Durbin-Levinson recursion on the biased
///   autocovariance.
/// - `LevinsonDurbinAdjusted`: Durbin-Levinson recursion on the
///   autocovariance scaled by `1 / (n - k)`; matches `YuleWalkerAdjusted`.
/// - `Ols`: last coefficient of an OLS regression of the series on an
///   intercept and its first `k` lags.
///
/// Parsing
/// -------
/// `FromStr` accepts the snake_case names above as well as the short
/// statsmodels spellings (`"yw"`, `"ywadjusted"`, `"ywunbiased"`, `"ywm"`,
/// `"ywmle"`, `"ld"`, `"ldadjusted"`, `"ldb"`, `"ldbiased"`, `"ols"`). As in
/// statsmodels, `"ld"` is the adjusted recursion. Unknown names return
/// `EstimationError::UnsupportedMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacfMethod {
    #[default]
    YuleWalkerAdjusted,
    YuleWalkerUnbiased,
    YuleWalkerMle,
    LevinsonDurbin,
    LevinsonDurbinAdjusted,
    Ols,
}

impl PacfMethod {
    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            PacfMethod::YuleWalkerAdjusted => "yule_walker_adjusted",
            PacfMethod::YuleWalkerUnbiased => "yule_walker_unbiased",
            PacfMethod::YuleWalkerMle => "yule_walker_mle",
            PacfMethod::LevinsonDurbin => "levinson_durbin",
            PacfMethod::LevinsonDurbinAdjusted => "levinson_durbin_adjusted",
            PacfMethod::Ols => "ols",
        }
    }
}

impl fmt::Display for PacfMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PacfMethod {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "yule_walker_adjusted" | "ywadjusted" | "yw" => Ok(PacfMethod::YuleWalkerAdjusted),
            "yule_walker_unbiased" | "ywunbiased" => Ok(PacfMethod::YuleWalkerUnbiased),
            "yule_walker_mle" | "ywmle" | "ywm" => Ok(PacfMethod::YuleWalkerMle),
            "levinson_durbin" | "ldb" | "ldbiased" => Ok(PacfMethod::LevinsonDurbin),
            "levinson_durbin_adjusted" | "ldadjusted" | "ld" => {
                Ok(PacfMethod::LevinsonDurbinAdjusted)
            }
            "ols" => Ok(PacfMethod::Ols),
            _ => Err(EstimationError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Formula for the ACF confidence band.
///
/// - `WhiteNoise`: `h = z / √n` at every lag. The band width depends only
///   on `alpha` and `n`.
/// - `Bartlett`: `h_k = z · √((1 + 2 Σ_{j<k} r_j²) / n)` for `k ≥ 2`,
///   `h_1 = z / √n`, `h_0 = 0`. Widens with the lag for autocorrelated
///   series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcfBand {
    #[default]
    WhiteNoise,
    Bartlett,
}

impl FromStr for AcfBand {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "white_noise" | "normal" => Ok(AcfBand::WhiteNoise),
            "bartlett" => Ok(AcfBand::Bartlett),
            _ => Err(EstimationError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// CorrelogramOptions — configuration for one correlogram computation.
///
/// Fields
/// ------
/// - `max_lag`: `usize`
///   Largest lag in the ACF/PACF tables (default 24).
/// - `alpha`: `f64`
///   Two-sided significance level of the confidence bands (default 0.05).
/// - `pacf_method`: [`PacfMethod`]
///   PACF estimator (default `YuleWalkerAdjusted`).
/// - `acf_band`: [`AcfBand`]
///   ACF band formula (default `WhiteNoise`).
/// - `include_qstat`: `bool`
///   Whether the Ljung-Box table is computed (default `true`).
/// - `fft`: `bool`
///   Compute autocovariances in the frequency domain (default `true`).
///   Results agree with the direct sum to floating-point tolerance.
///
/// Examples
/// --------
/// ```rust
/// # use box_jenkins::correlation::options::{CorrelogramOptions, PacfMethod};
/// let opts = CorrelogramOptions::new(12)
///     .with_alpha(0.01)
///     .with_pacf_method(PacfMethod::YuleWalkerMle)
///     .with_qstat(false);
/// assert_eq!(opts.max_lag, 12);
/// assert!(!opts.include_qstat);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelogramOptions {
    pub max_lag: usize,
    pub alpha: f64,
    pub pacf_method: PacfMethod,
    pub acf_band: AcfBand,
    pub include_qstat: bool,
    pub fft: bool,
}

impl CorrelogramOptions {
    /// Defaults with the given lag count.
    pub fn new(max_lag: usize) -> Self {
        CorrelogramOptions { max_lag, ..Default::default() }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_pacf_method(mut self, pacf_method: PacfMethod) -> Self {
        self.pacf_method = pacf_method;
        self
    }

    pub fn with_acf_band(mut self, acf_band: AcfBand) -> Self {
        self.acf_band = acf_band;
        self
    }

    pub fn with_qstat(mut self, include_qstat: bool) -> Self {
        self.include_qstat = include_qstat;
        self
    }

    pub fn with_fft(mut self, fft: bool) -> Self {
        self.fft = fft;
        self
    }

    /// Check the series-independent options.
    ///
    /// Errors
    /// ------
    /// - `ValidationError::InvalidAlpha` when `alpha` is not in (0, 1).
    pub fn validate(&self) -> CorrResult<()> {
        validate_alpha(self.alpha)
    }
}

impl Default for CorrelogramOptions {
    fn default() -> Self {
        CorrelogramOptions {
            max_lag: DEFAULT_MAX_LAG,
            alpha: DEFAULT_ALPHA,
            pacf_method: PacfMethod::default(),
            acf_band: AcfBand::default(),
            include_qstat: true,
            fft: true,
        }
    }
}
