//! Deterministic series generators shared by the integration tests.
//!
//! Purpose
//! -------
//! - Produce reproducible Gaussian white noise and random walks without
//!   depending on the stream stability of an external RNG crate.
//!
//! Notes
//! -----
//! - The uniform source is SplitMix64; normals come from the cosine branch
//!   of the Box-Muller transform (one normal per pair of uniforms).
#![allow(dead_code)]

use std::f64::consts::PI;

/// SplitMix64 pseudo-random generator.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform on [0, 1) with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Standard normal draw.
    pub fn next_normal(&mut self) -> f64 {
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

/// `n` i.i.d. standard normal draws.
pub fn white_noise(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = SplitMix64::new(seed);
    (0..n).map(|_| rng.next_normal()).collect()
}

/// Cumulative sum of `n` standard normal increments.
pub fn random_walk(seed: u64, n: usize) -> Vec<f64> {
    white_noise(seed, n)
        .into_iter()
        .scan(0.0, |level, step| {
            *level += step;
            Some(*level)
        })
        .collect()
}

/// AR(1) process xₜ = φ xₜ₋₁ + εₜ started at zero.
pub fn ar1(seed: u64, n: usize, phi: f64) -> Vec<f64> {
    white_noise(seed, n)
        .into_iter()
        .scan(0.0, |level, shock| {
            *level = phi * *level + shock;
            Some(*level)
        })
        .collect()
}
