//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Probabilities used for quantile round trips
pub fn probability_grid() -> Vec<f64> {
    vec![0.001, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.975, 0.99, 0.999]
}

/// Group counts and error degrees of freedom typical of benchmark ANOVAs
pub fn tukey_grid() -> Vec<(usize, f64)> {
    vec![(2, 5.0), (3, 10.0), (4, 30.0), (6, 60.0), (10, 120.0)]
}
