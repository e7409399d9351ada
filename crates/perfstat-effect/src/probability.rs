//! Normal-approximation probability that a treatment improves on a baseline

use perfstat_core::utils::{mean, variance};
use perfstat_core::{NumericBackend, Precision, Result};
use serde::Serialize;

/// `P(treatment mean > baseline mean)` under a normal approximation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImprovementProbability {
    pub prob_treatment_better: f64,
    pub prob_baseline_better: f64,
    /// `mean(treatment) - mean(baseline)`
    pub difference_mean: f64,
    pub difference_se: f64,
    pub precision: Precision,
}

/// Φ(Δ / SE) with Δ = mean(treatment) - mean(baseline) and
/// SE = sqrt(s_b²/n_b + s_t²/n_t)
///
/// When SE is zero the probability is 1 if Δ > 0 and 0 otherwise. "Better"
/// means a larger mean; callers comparing latencies read the complement.
/// Both samples need at least two observations.
pub fn probability_of_improvement(
    baseline: &[f64],
    treatment: &[f64],
    backend: NumericBackend,
) -> Result<ImprovementProbability> {
    let var_b = variance(baseline)?;
    let var_t = variance(treatment)?;
    let difference_mean = mean(treatment) - mean(baseline);
    let difference_se = (var_b / baseline.len() as f64 + var_t / treatment.len() as f64).sqrt();

    let (prob, precision) = if difference_se == 0.0 {
        let p = if difference_mean > 0.0 { 1.0 } else { 0.0 };
        (p, Precision::Exact)
    } else {
        let tagged = backend.normal_cdf(difference_mean / difference_se)?;
        (tagged.value.clamp(0.0, 1.0), tagged.precision)
    };

    Ok(ImprovementProbability {
        prob_treatment_better: prob,
        prob_baseline_better: 1.0 - prob,
        difference_mean,
        difference_se,
        precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equal_means_is_half() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let r = probability_of_improvement(&a, &a, NumericBackend::Exact).unwrap();
        assert_abs_diff_eq!(r.prob_treatment_better, 0.5, epsilon = 1e-12);
        assert_eq!(r.precision, Precision::Exact);
    }

    #[test]
    fn test_clear_improvement() {
        let baseline = [10.0, 10.5, 9.5, 10.2, 9.8];
        let treatment = [20.0, 20.5, 19.5, 20.2, 19.8];
        let r = probability_of_improvement(&baseline, &treatment, NumericBackend::Exact).unwrap();
        assert!(r.prob_treatment_better > 0.999);
        assert_abs_diff_eq!(r.difference_mean, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.prob_baseline_better, 1.0 - r.prob_treatment_better);
    }

    #[test]
    fn test_zero_se() {
        let up = probability_of_improvement(&[1.0, 1.0], &[2.0, 2.0], NumericBackend::Exact).unwrap();
        assert_eq!(up.prob_treatment_better, 1.0);
        let same = probability_of_improvement(&[1.0, 1.0], &[1.0, 1.0], NumericBackend::Exact).unwrap();
        assert_eq!(same.prob_treatment_better, 0.0);
    }

    #[test]
    fn test_approximate_backend_is_tagged() {
        let r = probability_of_improvement(
            &[1.0, 2.0, 3.0],
            &[2.0, 3.0, 4.0],
            NumericBackend::Approximate,
        )
        .unwrap();
        assert_eq!(r.precision, Precision::Approximate);
        assert!(r.prob_treatment_better > 0.5);
    }

    #[test]
    fn test_needs_two_per_group() {
        assert!(probability_of_improvement(&[1.0], &[1.0, 2.0], NumericBackend::Exact).is_err());
    }
}
