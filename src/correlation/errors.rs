//! correlation::errors — error taxonomy for correlogram construction.
//!
//! Purpose
//! -------
//! Provide the error enums and result alias shared by the ACF, PACF and
//! Ljung-Box routines, together with a conversion layer to Python
//! exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Split failures into two kinds: [`ValidationError`] for malformed or
//!   insufficient input, and [`EstimationError`] for numerical routines that
//!   cannot produce a finite result.
//! - Wrap both kinds in [`CorrError`] so public entry points return a single
//!   [`CorrResult<T>`] while callers can still branch on the kind via
//!   [`CorrError::is_validation`] / [`CorrError::is_estimation`].
//! - Report table export failures (JSON, CSV, I/O) as [`ExportError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised immediately; no routine in this crate retries or
//!   substitutes fallback values.
//! - Every variant carries just enough payload (offending value, lag,
//!   lengths) to make the `Display` message actionable.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints
//!   ("need at least 13 observations") rather than implementation details.
//! - With the `python-bindings` feature, every [`CorrError`] maps to a
//!   Python `ValueError` whose message is the Rust `Display` output.
//!
//! Testing notes
//! -------------
//! - Unit tests check that messages embed their payloads and that the kind
//!   predicates classify wrapped errors correctly.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};
use thiserror::Error;

/// Result alias for correlogram routines.
pub type CorrResult<T> = Result<T, CorrError>;

/// Malformed or insufficient input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The sample sequence has no observations.
    #[error("Series is empty; at least one observation is required.")]
    EmptySeries,

    /// A sample value is NaN or ±∞.
    #[error("Invalid data value {value} at index {index}. Must be a finite number.")]
    NonFiniteData { index: usize, value: f64 },

    /// Fewer observations than lags requested.
    #[error("Insufficient data: need at least {needed} observations, got {got}.")]
    InsufficientData { needed: usize, got: usize },

    /// Partial autocorrelations need `max_lag < n / 2`; `limit` is the
    /// largest admissible lag.
    #[error("max_lag = {max_lag} is too large; partial autocorrelations require max_lag <= {limit}.")]
    LagTooLarge { max_lag: usize, limit: usize },

    /// Significance level outside (0, 1).
    #[error("Invalid alpha {alpha}. Must satisfy 0 < alpha < 1.")]
    InvalidAlpha { alpha: f64 },
}

/// Failure of a numerical estimator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// The series is constant, so autocorrelations are undefined.
    #[error("Sample variance is zero; autocorrelations are undefined for a constant series.")]
    ZeroVariance,

    /// The Yule-Walker or OLS system of the given order could not be solved.
    #[error("Singular linear system while estimating the partial autocorrelation at lag {lag}.")]
    SingularSystem { lag: usize },

    /// An estimator produced NaN or ±∞.
    #[error("Non-finite estimate {value} at lag {lag}.")]
    NonFiniteEstimate { lag: usize, value: f64 },

    /// A reference distribution could not be constructed.
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// The requested PACF estimator name is not known.
    #[error(
        "Unsupported PACF method {0:?}. Valid options are 'yule_walker_adjusted', \
         'yule_walker_unbiased', 'yule_walker_mle', 'levinson_durbin', \
         'levinson_durbin_adjusted' or 'ols'."
    )]
    UnsupportedMethod(String),
}

/// Unified error type for correlogram construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),
}

impl CorrError {
    /// `true` if the input was rejected before any estimation ran.
    pub fn is_validation(&self) -> bool {
        matches!(self, CorrError::Validation(_))
    }

    /// `true` if a numerical estimator failed.
    pub fn is_estimation(&self) -> bool {
        matches!(self, CorrError::Estimation(_))
    }
}

/// Failure while exporting a table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "python-bindings")]
impl From<CorrError> for PyErr {
    fn from(err: CorrError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
