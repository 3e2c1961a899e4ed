//! Integration tests for correlogram construction on simulated series.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path from a raw series through validation,
//!   estimation and table assembly to export.
//! - Check the identification patterns a practitioner relies on: flat
//!   correlograms for white noise, slowly decaying ACF with a single PACF
//!   spike for a random walk, and a PACF cut-off after lag 1 for AR(1).
//!
//! Coverage
//! --------
//! - `correlation::Correlogram` with default and non-default options.
//! - `correlation::table` accessors and JSON/CSV export.
//! - Error routing for short series and for lags at half the sample size.
//! - statsmodels method names resolving to the matching estimator.
//!
//! Exclusions
//! ----------
//! - Closed-form checks of individual estimators; those are unit tests.
//! - Python bindings.
//!
//! Notes
//! -----
//! - Series come from the seeded generators in `tests/common`, so every
//!   expectation below is deterministic. Pinned values were cross-checked
//!   against an independent implementation of the same estimators.
mod common;

use approx::assert_relative_eq;
use box_jenkins::correlation::{
    AcfBand, CorrError, Correlogram, CorrelogramOptions, PacfMethod, ValidationError,
};
use common::{SplitMix64, ar1, random_walk, white_noise};

const WHITE_NOISE_SEED: u64 = 35;
const RANDOM_WALK_SEED: u64 = 57;
const AR1_SEED: u64 = 25;

const ALL_METHODS: [PacfMethod; 6] = [
    PacfMethod::YuleWalkerAdjusted,
    PacfMethod::YuleWalkerUnbiased,
    PacfMethod::YuleWalkerMle,
    PacfMethod::LevinsonDurbin,
    PacfMethod::LevinsonDurbinAdjusted,
    PacfMethod::Ols,
];

#[test]
// Purpose
// -------
// Pin the generator stream so that seeds keep their meaning.
fn generator_stream_is_stable() {
    let mut rng = SplitMix64::new(WHITE_NOISE_SEED);
    assert_eq!(rng.next_u64(), 5_574_532_911_583_637_595);
    assert_eq!(rng.next_u64(), 11_136_364_323_668_202_034);

    let draws = white_noise(WHITE_NOISE_SEED, 3);
    assert_relative_eq!(draws[0], -0.674511523186984, epsilon = 1e-12);
    assert_relative_eq!(draws[1], -1.1835665479569533, epsilon = 1e-12);
    assert_relative_eq!(draws[2], 0.11272076651111619, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// White noise shows no structure: every estimate sits inside its band
// and the Ljung-Box test does not reject.
//
// Given
// -----
// - 120 seeded N(0, 1) draws, max_lag = 12, default options.
//
// Expect
// ------
// - All ACF and PACF estimates at lags 1..=12 inside ±1.96/√120.
// - Lag-12 Q p-value > 0.05.
fn white_noise_stays_within_bands() {
    // Arrange
    let data = white_noise(WHITE_NOISE_SEED, 120);

    // Act
    let c = Correlogram::with_max_lag(&data, 12).expect("white noise correlogram");

    // Assert
    assert_eq!(c.acf().len(), 13);
    assert!(c.acf().significant_lags().is_empty(), "ACF: {:?}", c.acf().significant_lags());
    assert!(c.pacf().significant_lags().is_empty(), "PACF: {:?}", c.pacf().significant_lags());

    let q = c.qstat().expect("qstat enabled by default");
    assert_eq!(q.len(), 12);
    assert!(q.get(12).unwrap().p_value > 0.05);
}

#[test]
fn white_noise_estimates_match_reference_values() {
    let data = white_noise(WHITE_NOISE_SEED, 120);
    let c = Correlogram::with_max_lag(&data, 12).unwrap();

    assert_relative_eq!(c.acf().get(1).unwrap().estimate, -0.04346706689548451, epsilon = 1e-9);
    assert_relative_eq!(c.acf().get(2).unwrap().estimate, -0.09709088883145443, epsilon = 1e-9);
    assert_relative_eq!(c.pacf().get(1).unwrap().estimate, -0.04383233636519446, epsilon = 1e-9);
    assert_relative_eq!(c.pacf().get(2).unwrap().estimate, -0.10085153422941721, epsilon = 1e-9);

    let q = c.qstat().unwrap();
    assert_relative_eq!(q.get(1).unwrap().statistic, 0.23244209783049694, epsilon = 1e-8);
    assert_relative_eq!(q.get(1).unwrap().p_value, 0.629718932411073, epsilon = 1e-8);
    assert_relative_eq!(q.get(12).unwrap().statistic, 5.208773077890986, epsilon = 1e-8);
    assert_relative_eq!(q.get(12).unwrap().p_value, 0.9506396115466207, epsilon = 1e-8);
}

#[test]
// Purpose
// -------
// A random walk has a slowly decaying ACF and a single PACF spike.
//
// Given
// -----
// - Cumulative sum of 200 seeded N(0, 1) draws, max_lag = 10.
//
// Expect
// ------
// - ACF significant at every lag 1..=10.
// - PACF significant at lag 1 only.
// - Ljung-Box rejects at every lag.
fn random_walk_shows_nonstationary_pattern() {
    // Arrange
    let data = random_walk(RANDOM_WALK_SEED, 200);

    // Act
    let c = Correlogram::with_max_lag(&data, 10).expect("random walk correlogram");

    // Assert
    assert_eq!(c.acf().significant_lags(), (1..=10).collect::<Vec<_>>());
    assert_eq!(c.pacf().significant_lags(), vec![1]);
    assert!(c.pacf().get(1).unwrap().estimate > 0.9);
    assert!(c.qstat().unwrap().iter().all(|row| row.p_value < 0.01));
}

#[test]
// Purpose
// -------
// Every PACF estimator identifies an AR(1) process.
//
// Given
// -----
// - 300 points of xₜ = 0.6 xₜ₋₁ + εₜ, max_lag = 8.
//
// Expect
// ------
// - PACF significant at lag 1 only, with φ₁₁ near 0.6, for each method.
fn ar1_pacf_cuts_off_after_lag_one() {
    let data = ar1(AR1_SEED, 300, 0.6);
    for method in ALL_METHODS {
        let opts = CorrelogramOptions::new(8).with_pacf_method(method);
        let c = Correlogram::compute(&data, &opts).unwrap();
        assert_eq!(c.pacf().significant_lags(), vec![1], "method {method}");
        let phi = c.pacf().get(1).unwrap().estimate;
        assert!((phi - 0.6).abs() < 0.1, "method {method}: phi_11 = {phi}");
    }
}

#[test]
fn bartlett_band_is_wider_than_white_noise_band_for_persistent_series() {
    let data = ar1(AR1_SEED, 300, 0.6);
    let narrow = Correlogram::with_max_lag(&data, 8).unwrap();
    let wide =
        Correlogram::compute(&data, &CorrelogramOptions::new(8).with_acf_band(AcfBand::Bartlett))
            .unwrap();

    assert_relative_eq!(
        wide.acf().get(1).unwrap().half_width(),
        narrow.acf().get(1).unwrap().half_width(),
        epsilon = 1e-12
    );
    for lag in 2..=8 {
        let (w, n) = (wide.acf().get(lag).unwrap(), narrow.acf().get(lag).unwrap());
        assert!(w.half_width() > n.half_width(), "lag {lag}");
    }
    // estimates do not depend on the band formula
    assert_eq!(wide.acf().estimates(), narrow.acf().estimates());
}

#[test]
// Purpose
// -------
// Twelve lags cannot be estimated from five observations.
fn short_series_is_rejected() {
    let result = Correlogram::with_max_lag(&[0.3, -1.2, 0.8, 0.1, -0.4], 12);
    match result {
        Err(CorrError::Validation(ValidationError::InsufficientData { needed, got })) => {
            assert_eq!((needed, got), (13, 5));
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// Half the sample size is already one lag too many, for every estimator.
//
// Given
// -----
// - 120 white-noise draws; max_lag = 60 and max_lag = 59.
//
// Expect
// ------
// - `LagTooLarge { max_lag: 60, limit: 59 }` for every method.
// - max_lag = 59 with OLS gives finite estimates at every lag.
fn lag_at_half_sample_is_rejected_for_every_method() {
    // Arrange
    let data = white_noise(WHITE_NOISE_SEED, 120);

    for method in ALL_METHODS {
        // Act
        let result =
            Correlogram::compute(&data, &CorrelogramOptions::new(60).with_pacf_method(method));

        // Assert
        match result {
            Err(CorrError::Validation(ValidationError::LagTooLarge { max_lag, limit })) => {
                assert_eq!((max_lag, limit), (60, 59), "method {method}");
            }
            other => panic!("expected LagTooLarge for {method}, got {other:?}"),
        }
    }

    let opts = CorrelogramOptions::new(59).with_pacf_method(PacfMethod::Ols);
    let c = Correlogram::compute(&data, &opts).expect("largest admissible OLS lag");
    assert_eq!(c.pacf().len(), 60);
    assert!(c.pacf().iter().all(|r| r.estimate.is_finite()));
}

#[test]
// Purpose
// -------
// "ld" selects the adjusted Durbin-Levinson recursion, whose estimates
// equal adjusted Yule-Walker; "ldb" gives the biased ones.
//
// Given
// -----
// - The AR(1) series, max_lag = 8.
//
// Expect
// ------
// - "ld" and "yw" PACF estimates agree to 1e-10 at every lag.
// - "ldb" and "ywm" agree to 1e-10 at every lag.
fn short_method_names_select_matching_estimators() {
    // Arrange
    let data = ar1(AR1_SEED, 300, 0.6);
    let run = |name: &str| {
        let method: PacfMethod = name.parse().unwrap();
        Correlogram::compute(&data, &CorrelogramOptions::new(8).with_pacf_method(method)).unwrap()
    };

    // Act
    let (ld, yw, ldb, ywm) = (run("ld"), run("yw"), run("ldb"), run("ywm"));

    // Assert
    for (a, b) in ld.pacf().iter().zip(yw.pacf()) {
        assert_relative_eq!(a.estimate, b.estimate, epsilon = 1e-10);
    }
    for (a, b) in ldb.pacf().iter().zip(ywm.pacf()) {
        assert_relative_eq!(a.estimate, b.estimate, epsilon = 1e-10);
    }
    assert_eq!(ld.options().pacf_method, PacfMethod::LevinsonDurbinAdjusted);
}

#[test]
fn non_finite_input_is_rejected_with_its_index() {
    let mut data = white_noise(WHITE_NOISE_SEED, 50);
    data[17] = f64::NAN;
    match Correlogram::with_max_lag(&data, 5) {
        Err(CorrError::Validation(ValidationError::NonFiniteData { index, .. })) => {
            assert_eq!(index, 17)
        }
        other => panic!("expected NonFiniteData, got {other:?}"),
    }
}

#[test]
fn repeated_computation_is_identical() {
    let data = random_walk(RANDOM_WALK_SEED, 200);
    let opts = CorrelogramOptions::new(10).with_pacf_method(PacfMethod::Ols);
    let first = Correlogram::compute(&data, &opts).unwrap();
    let second = Correlogram::compute(&data, &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
// Purpose
// -------
// Exported records carry one entry per lag with the plotting columns.
fn tables_export_to_json_and_csv() {
    // Arrange
    let data = white_noise(WHITE_NOISE_SEED, 120);
    let c = Correlogram::with_max_lag(&data, 12).unwrap();

    // Act
    let acf_json = c.acf().to_json_records().unwrap();
    let q_json = c.qstat().unwrap().to_json_records().unwrap();
    let mut csv_buffer = Vec::new();
    c.pacf().write_csv(&mut csv_buffer).unwrap();

    // Assert
    let acf_records: Vec<serde_json::Value> = serde_json::from_str(&acf_json).unwrap();
    assert_eq!(acf_records.len(), 13);
    assert_eq!(acf_records[0]["estimate"], 1.0);
    assert!(acf_records[5]["ci_low_offset"].as_f64().unwrap() < 0.0);

    let q_records: Vec<serde_json::Value> = serde_json::from_str(&q_json).unwrap();
    assert_eq!(q_records.len(), 12);
    assert_eq!(q_records[0]["lag"], 1);
    assert!(q_records[0].get("p_value").is_some());

    let csv_text = String::from_utf8(csv_buffer).unwrap();
    assert_eq!(csv_text.lines().count(), 14);
    assert!(csv_text.starts_with("lag,estimate,ci_low_offset,ci_high_offset"));
}
