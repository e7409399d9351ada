//! Shared fixtures for effect-size integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_distr::{LogNormal, Normal};

pub fn normal_sample(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

/// Latency-like sample scaled by `factor`
pub fn scaled_latencies(size: usize, factor: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(3.0, 0.4).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) * factor).collect()
}
