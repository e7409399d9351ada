//! Shared fixtures for facade integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_distr::{LogNormal, Normal};
use std::collections::BTreeMap;
use std::sync::Once;

static INIT: Once = Once::new();

/// Route engine events to the test writer; filter with `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn one_to_n(n: u32) -> Vec<f64> {
    (1..=n).map(f64::from).collect()
}

pub fn latency_sample(size: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(2.5, 0.5).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) * scale).collect()
}

pub fn normal_groups(means: &[(&str, f64)], size: usize, seed: u64) -> BTreeMap<String, Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    means
        .iter()
        .map(|&(name, mean)| {
            let dist = Normal::new(mean, 1.0).unwrap();
            (name.to_string(), (0..size).map(|_| dist.sample(&mut rng)).collect())
        })
        .collect()
}
