//! Quantile-based comparison of a treatment against a baseline
//!
//! Each requested quantile is compared through a seeded bootstrap CI of
//! `quantile(baseline, q) - quantile(treatment, q)`, so positive differences
//! mean the treatment is smaller (faster, for latencies). This is the same
//! orientation as the t test's mean difference. The report also carries the
//! Hodges-Lehmann shift on that orientation, a robust summary of each side and
//! a mean/spread [`RegressionVerdict`].

use crate::hodges_lehmann::hodges_lehmann;
use crate::regression::RegressionVerdict;
use perfstat_confidence::{
    quantile_difference_ci, DEFAULT_CONFIDENCE, DEFAULT_QUANTILES, DEFAULT_RESAMPLES,
    DEFAULT_SEED,
};
use perfstat_core::{check_open_probability, utils::sorted, Error, Result};
use perfstat_quantile::{percentile_label, quantile_sorted};
use perfstat_spread::{describe, RobustSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bootstrap settings for [`quantile_comparison`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub confidence: f64,
    pub n_resamples: usize,
    pub seed: u64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            n_resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        check_open_probability("Confidence level", self.confidence)?;
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One row of a quantile comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileDelta {
    pub label: String,
    pub quantile: f64,
    pub baseline: f64,
    pub treatment: f64,
    /// `baseline - treatment`
    pub difference: f64,
    /// `difference / baseline * 100`, or 0 when the baseline quantile is 0
    pub percent_change: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// The CI excludes zero
    pub significant: bool,
}

/// Full comparison report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileComparison {
    pub quantiles: Vec<QuantileDelta>,
    /// Median pairwise difference `baseline - treatment`
    pub hodges_lehmann: f64,
    pub baseline_summary: RobustSummary,
    pub treatment_summary: RobustSummary,
    pub regression: RegressionVerdict,
    pub confidence: f64,
}

impl QuantileComparison {
    /// Row for a report label such as `p99`
    pub fn get(&self, label: &str) -> Option<&QuantileDelta> {
        self.quantiles.iter().find(|row| row.label == label)
    }

    /// Rows whose CI excludes zero
    pub fn significant(&self) -> impl Iterator<Item = &QuantileDelta> {
        self.quantiles.iter().filter(|row| row.significant)
    }

    pub fn is_regression(&self) -> bool {
        self.regression.is_regression
    }
}

/// Compare `treatment` against `baseline` at each level in `quantiles`
///
/// Pass [`DEFAULT_QUANTILES`] for the usual p50/p90/p95/p99 table. Both
/// samples must be non-empty.
#[instrument(skip(baseline, treatment, quantiles), fields(n_baseline = baseline.len(), n_treatment = treatment.len()))]
pub fn quantile_comparison(
    baseline: &[f64],
    treatment: &[f64],
    quantiles: &[f64],
    config: &ComparisonConfig,
) -> Result<QuantileComparison> {
    config.validate()?;
    let baseline_summary = describe(baseline)?;
    let treatment_summary = describe(treatment)?;

    let sorted_baseline = sorted(baseline);
    let sorted_treatment = sorted(treatment);

    let rows = quantiles
        .iter()
        .map(|&q| {
            let ci = quantile_difference_ci(
                baseline,
                treatment,
                q,
                config.confidence,
                config.n_resamples,
                config.seed,
            )?;
            let q_baseline = quantile_sorted(&sorted_baseline, q)?;
            let q_treatment = quantile_sorted(&sorted_treatment, q)?;
            let difference = q_baseline - q_treatment;
            let percent_change = if q_baseline == 0.0 {
                0.0
            } else {
                difference / q_baseline * 100.0
            };
            debug!(q, difference, lower = ci.ci_lower, upper = ci.ci_upper, "quantile compared");

            Ok(QuantileDelta {
                label: percentile_label(q),
                quantile: q,
                baseline: q_baseline,
                treatment: q_treatment,
                difference,
                percent_change,
                ci_lower: ci.ci_lower,
                ci_upper: ci.ci_upper,
                significant: ci.is_significant(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuantileComparison {
        quantiles: rows,
        hodges_lehmann: hodges_lehmann(baseline, treatment),
        baseline_summary,
        treatment_summary,
        regression: RegressionVerdict::from_samples(baseline, treatment),
        confidence: config.confidence,
    })
}

/// [`quantile_comparison`] at [`DEFAULT_QUANTILES`] with default settings
pub fn default_quantile_comparison(
    baseline: &[f64],
    treatment: &[f64],
) -> Result<QuantileComparison> {
    quantile_comparison(
        baseline,
        treatment,
        &DEFAULT_QUANTILES,
        &ComparisonConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quick() -> ComparisonConfig {
        ComparisonConfig {
            n_resamples: 500,
            ..ComparisonConfig::default()
        }
    }

    #[test]
    fn test_shifted_treatment() {
        let baseline: Vec<f64> = (1..=60).map(f64::from).collect();
        let treatment: Vec<f64> = baseline.iter().map(|x| x + 50.0).collect();
        let report = quantile_comparison(&baseline, &treatment, &DEFAULT_QUANTILES, &quick()).unwrap();

        let p50 = report.get("p50").unwrap();
        assert_relative_eq!(p50.difference, -50.0, epsilon = 1e-9);
        assert_relative_eq!(p50.percent_change, -50.0 / 30.5 * 100.0, epsilon = 1e-9);
        assert!(p50.significant);
        assert!(p50.ci_upper < 0.0);
        assert_relative_eq!(report.hodges_lehmann, -50.0);
        assert_eq!(report.quantiles.len(), 4);
        assert!(report.is_regression());
    }

    #[test]
    fn test_identical_samples() {
        let data: Vec<f64> = (0..80).map(|i| ((i * 17) % 23) as f64 + 1.0).collect();
        let report = quantile_comparison(&data, &data, &DEFAULT_QUANTILES, &quick()).unwrap();
        assert_eq!(report.significant().count(), 0);
        for row in &report.quantiles {
            assert_eq!(row.difference, 0.0);
            assert!(row.ci_lower <= 0.0 && row.ci_upper >= 0.0);
        }
        assert_eq!(report.hodges_lehmann, 0.0);
    }

    #[test]
    fn test_faster_treatment_is_positive() {
        let baseline: Vec<f64> = (10..20).map(f64::from).collect();
        let treatment: Vec<f64> = (8..18).map(f64::from).collect();
        let report = quantile_comparison(&baseline, &treatment, &[0.5], &quick()).unwrap();
        assert_relative_eq!(report.hodges_lehmann, 2.0);
        assert_relative_eq!(report.quantiles[0].difference, 2.0, epsilon = 1e-12);
        assert!(report.quantiles[0].ci_lower <= 2.0 && 2.0 <= report.quantiles[0].ci_upper);
        assert!(!report.is_regression());
    }

    #[test]
    fn test_zero_baseline_percent_change() {
        let baseline = [0.0, 0.0, 0.0, 0.0, 0.0];
        let treatment = [1.0, 2.0, 3.0, 4.0, 5.0];
        let report = quantile_comparison(&baseline, &treatment, &[0.5], &quick()).unwrap();
        assert_eq!(report.quantiles[0].percent_change, 0.0);
        assert_eq!(report.quantiles[0].difference, -3.0);
    }

    #[test]
    fn test_rejects_empty_and_bad_config() {
        assert!(quantile_comparison(&[], &[1.0], &[0.5], &quick()).is_err());
        let bad = ComparisonConfig {
            confidence: 1.5,
            ..quick()
        };
        assert!(quantile_comparison(&[1.0, 2.0], &[1.0, 2.0], &[0.5], &bad).is_err());
        assert!(quantile_comparison(&[1.0, 2.0], &[1.0, 2.0], &[2.0], &quick()).is_err());
    }
}
