//! correlation — ACF, PACF and Ljung-Box tables for model identification.
//!
//! Purpose
//! -------
//! Collect the estimators and result tables used to read a correlogram
//! when choosing ARIMA orders: sample autocorrelations with confidence
//! bands, partial autocorrelations with several estimators, and cumulative
//! Ljung-Box portmanteau statistics.
//!
//! Key behaviors
//! -------------
//! - [`Correlogram::compute`] validates the series, runs the estimators and
//!   returns immutable [`CorrelationTable`]s and an optional [`QStatTable`].
//! - Confidence bands are framed around zero so that a plotting layer can
//!   draw the estimate as a bar and the two offsets as a shaded band.
//! - Configuration lives in [`CorrelogramOptions`]; estimator choices parse
//!   from strings for bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series are univariate, finite and at least `max_lag + 1` long;
//!   PACF estimation further requires `max_lag < n / 2` (lag 0 excepted).
//! - All routines are pure functions of their inputs. No global state, no
//!   caching between calls.
//! - Failures are reported through [`CorrResult`]; user-facing invalid input
//!   never panics.
//!
//! Conventions
//! -----------
//! - Autocovariances use the biased `1 / n` normalization; lag-0
//!   autocorrelation and partial autocorrelation are exactly 1.0.
//! - Lags are `usize` and start at 0 for ACF/PACF tables, at 1 for the
//!   Ljung-Box table.
//!
//! Downstream usage
//! ----------------
//! - The Python extension wraps [`Correlogram`] and converts tables into
//!   column dictionaries.
//! - Rust callers typically import [`prelude`].

pub mod acf;
pub mod correlogram;
pub mod errors;
pub mod ljung_box;
pub mod options;
pub mod pacf;
pub mod table;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::correlogram::Correlogram;
pub use self::errors::{CorrError, CorrResult, EstimationError, ExportError, ValidationError};
pub use self::options::{AcfBand, CorrelogramOptions, PacfMethod};
pub use self::table::{CorrelationKind, CorrelationRow, CorrelationTable, QStatRow, QStatTable};
pub use self::validation::validate_series;

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use box_jenkins::correlation::prelude::*;

pub mod prelude {
    pub use super::correlogram::Correlogram;
    pub use super::errors::{CorrError, CorrResult};
    pub use super::options::{AcfBand, CorrelogramOptions, PacfMethod};
    pub use super::table::{CorrelationRow, CorrelationTable, QStatRow, QStatTable};
}
