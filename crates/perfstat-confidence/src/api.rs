//! High-level API for bootstrap confidence intervals
//!
//! Thin functions over [`Bootstrap`] with every knob explicit, including the
//! seed: the same inputs and seed always give the same interval.

use crate::bootstrap::Bootstrap;
use crate::types::BootstrapResult;
use perfstat_core::{check_quantile_level, Result};
use perfstat_quantile::{percentile_label, quantile};
use serde::Serialize;

/// Quantiles reported by default in comparisons and CI tables
pub const DEFAULT_QUANTILES: [f64; 4] = [0.50, 0.90, 0.95, 0.99];

fn percentile(confidence: f64, n_resamples: usize, seed: u64) -> Bootstrap {
    Bootstrap::percentile()
        .with_confidence_level(confidence)
        .with_resamples(n_resamples)
        .with_seed(seed)
}

/// Percentile bootstrap CI for an arbitrary statistic
///
/// Samples with fewer than two values return a degenerate zero result.
///
/// # Examples
///
/// ```rust
/// use perfstat_confidence::bootstrap_ci;
/// use perfstat_quantile::median;
///
/// let data = [12.0, 15.0, 11.0, 14.0, 13.0, 12.5, 16.0];
/// let r = bootstrap_ci(&data, median, 0.95, 1000, 42).unwrap();
/// assert!(r.ci_lower <= r.point_estimate && r.point_estimate <= r.ci_upper);
/// ```
pub fn bootstrap_ci<S>(
    sample: &[f64],
    statistic: S,
    confidence: f64,
    n_resamples: usize,
    seed: u64,
) -> Result<BootstrapResult>
where
    S: Fn(&[f64]) -> Result<f64> + Sync,
{
    percentile(confidence, n_resamples, seed).one_sample(sample, statistic)
}

/// Percentile bootstrap CI for the `q`-th quantile
pub fn bootstrap_ci_quantile(
    sample: &[f64],
    q: f64,
    confidence: f64,
    n_resamples: usize,
    seed: u64,
) -> Result<BootstrapResult> {
    check_quantile_level(q)?;
    bootstrap_ci(sample, |x| quantile(x, q), confidence, n_resamples, seed)
}

/// Bootstrap CI for `quantile(a, q) - quantile(b, q)`
///
/// Each iteration resamples `a` and `b` independently at their own sizes.
/// An empty sample on either side returns a degenerate zero result. The
/// difference is significant when the interval excludes zero
/// ([`BootstrapResult::is_significant`]).
pub fn quantile_difference_ci(
    a: &[f64],
    b: &[f64],
    q: f64,
    confidence: f64,
    n_resamples: usize,
    seed: u64,
) -> Result<BootstrapResult> {
    check_quantile_level(q)?;
    percentile(confidence, n_resamples, seed).two_sample(a, b, |ra, rb| {
        Ok(quantile(ra, q)? - quantile(rb, q)?)
    })
}

/// Bootstrap CI for one quantile level, in report form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileCi {
    /// Report label such as `p50` or `p99.9`
    pub label: String,
    pub quantile: f64,
    pub estimate: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// Distance from the estimate to the upper bound
    pub margin: f64,
    pub ci_width: f64,
    pub degenerate: bool,
}

/// Bootstrap CIs for several quantile levels of one sample
///
/// Every level reuses the same seed, so each row is reproducible on its own.
pub fn quantile_cis(
    sample: &[f64],
    quantiles: &[f64],
    confidence: f64,
    n_resamples: usize,
    seed: u64,
) -> Result<Vec<QuantileCi>> {
    quantiles
        .iter()
        .map(|&q| {
            let r = bootstrap_ci_quantile(sample, q, confidence, n_resamples, seed)?;
            Ok(QuantileCi {
                label: percentile_label(q),
                quantile: q,
                estimate: r.point_estimate,
                ci_lower: r.ci_lower,
                ci_upper: r.ci_upper,
                margin: r.ci_upper - r.point_estimate,
                ci_width: r.width(),
                degenerate: r.degenerate,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn one_to(n: u32) -> Vec<f64> {
        (1..=n).map(f64::from).collect()
    }

    #[test]
    fn test_quantile_ci_deterministic() {
        let data = one_to(50);
        let a = bootstrap_ci_quantile(&data, 0.9, 0.95, 800, 11).unwrap();
        let b = bootstrap_ci_quantile(&data, 0.9, 0.95, 800, 11).unwrap();
        assert_eq!(a, b);
        assert_abs_diff_eq!(a.point_estimate, 45.1, epsilon = 1e-9);
    }

    #[test]
    fn test_quantile_ci_small_sample() {
        let r = bootstrap_ci_quantile(&[5.0], 0.5, 0.95, 100, 1).unwrap();
        assert!(r.degenerate);
        assert_eq!(r.as_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quantile_ci_rejects_bad_level() {
        assert!(bootstrap_ci_quantile(&[1.0, 2.0], 1.2, 0.95, 100, 1).is_err());
        assert!(quantile_difference_ci(&[1.0], &[2.0], -0.5, 0.95, 100, 1).is_err());
    }

    #[test]
    fn test_difference_identical_samples() {
        let data = one_to(40);
        let r = quantile_difference_ci(&data, &data, 0.5, 0.95, 1000, 42).unwrap();
        assert_eq!(r.point_estimate, 0.0);
        assert!(r.ci_lower <= 0.0 && r.ci_upper >= 0.0);
        assert!(!r.is_significant());
    }

    #[test]
    fn test_difference_shifted_samples() {
        let a = one_to(60);
        let b: Vec<f64> = a.iter().map(|x| x + 100.0).collect();
        let r = quantile_difference_ci(&b, &a, 0.5, 0.95, 1000, 42).unwrap();
        assert_abs_diff_eq!(r.point_estimate, 100.0, epsilon = 1e-9);
        assert!(r.is_significant());
        assert!(r.ci_lower > 0.0);
    }

    #[test]
    fn test_difference_empty_side() {
        let r = quantile_difference_ci(&[], &[1.0, 2.0], 0.5, 0.95, 100, 1).unwrap();
        assert!(r.degenerate);
    }

    #[test]
    fn test_quantile_cis_rows() {
        let data = one_to(100);
        let rows = quantile_cis(&data, &DEFAULT_QUANTILES, 0.95, 500, 42).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["p50", "p90", "p95", "p99"]);
        for row in &rows {
            assert!(row.ci_lower <= row.estimate && row.estimate <= row.ci_upper);
            assert_abs_diff_eq!(row.ci_width, row.ci_upper - row.ci_lower);
            assert_abs_diff_eq!(row.margin, row.ci_upper - row.estimate);
        }
    }
}
