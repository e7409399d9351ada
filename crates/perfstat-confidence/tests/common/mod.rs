//! Shared fixtures for bootstrap integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_distr::{LogNormal, Normal};

/// Normally distributed sample
pub fn normal_sample(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

/// Right-skewed latency-like sample
pub fn latency_sample(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(2.0, 0.6).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}
