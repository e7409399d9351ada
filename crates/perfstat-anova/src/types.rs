//! Result records for group-based analyses

use perfstat_core::utils::{mean, sum_of_squares};
use perfstat_core::Precision;
use perfstat_effect::{interpret_eta_squared, EffectSize, EffectSizeInterpretation, EffectSizeType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-group descriptive statistics
///
/// `variance` uses Bessel's correction and is reported as 0 for a single
/// observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub name: String,
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl GroupStats {
    pub fn from_sample(name: impl Into<String>, data: &[f64]) -> Self {
        let n = data.len();
        let variance = if n < 2 {
            0.0
        } else {
            sum_of_squares(data) / (n - 1) as f64
        };
        Self {
            name: name.into(),
            n,
            mean: mean(data),
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// One-way ANOVA table with effect sizes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub ss_between: f64,
    pub ss_within: f64,
    pub ss_total: f64,
    pub ms_between: f64,
    pub ms_within: f64,
    pub eta_squared: f64,
    pub omega_squared: f64,
    pub grand_mean: f64,
    pub n_total: usize,
    pub n_groups: usize,
    /// Non-empty groups ordered by name
    pub groups: Vec<GroupStats>,
    /// Precision of `p_value`
    pub precision: Precision,
}

impl AnovaResult {
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    pub fn group(&self, name: &str) -> Option<&GroupStats> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Eta² as an interpreted effect size
    pub fn effect_size(&self) -> EffectSize {
        EffectSize::new(self.eta_squared, EffectSizeType::VarianceExplained, None)
    }

    pub fn interpretation(&self) -> EffectSizeInterpretation {
        interpret_eta_squared(self.eta_squared)
    }

    /// Number of unordered group pairs
    pub fn n_comparisons(&self) -> usize {
        self.n_groups * self.n_groups.saturating_sub(1) / 2
    }

    /// Flatten the table into `statistic name -> value`
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::new();
        map.insert("f_statistic".to_string(), self.f_statistic);
        map.insert("p_value".to_string(), self.p_value);
        map.insert("df_between".to_string(), self.df_between as f64);
        map.insert("df_within".to_string(), self.df_within as f64);
        map.insert("ss_between".to_string(), self.ss_between);
        map.insert("ss_within".to_string(), self.ss_within);
        map.insert("ss_total".to_string(), self.ss_total);
        map.insert("ms_between".to_string(), self.ms_between);
        map.insert("ms_within".to_string(), self.ms_within);
        map.insert("eta_squared".to_string(), self.eta_squared);
        map.insert("omega_squared".to_string(), self.omega_squared);
        map.insert("grand_mean".to_string(), self.grand_mean);
        map.insert("n_total".to_string(), self.n_total as f64);
        map.insert("n_groups".to_string(), self.n_groups as f64);
        map
    }
}

/// One pairwise post-hoc comparison
///
/// `test_statistic` is the studentized range `q` for Tukey HSD and Welch's
/// `t` for Bonferroni. `p_value_corrected` is only set by Bonferroni.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparison {
    pub group1: String,
    pub group2: String,
    pub mean1: f64,
    pub mean2: f64,
    /// `mean1 - mean2`
    pub mean_diff: f64,
    pub test_statistic: f64,
    pub std_error: f64,
    pub p_value: f64,
    pub p_value_corrected: Option<f64>,
    pub significant: bool,
    pub precision: Precision,
}

/// Bonferroni-corrected pairwise t-tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonferroniReport {
    pub comparisons: Vec<PairwiseComparison>,
    pub n_comparisons: usize,
    pub alpha: f64,
    pub alpha_corrected: f64,
}

impl BonferroniReport {
    pub fn significant(&self) -> impl Iterator<Item = &PairwiseComparison> {
        self.comparisons.iter().filter(|c| c.significant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_group_stats() {
        let stats = GroupStats::from_sample("a", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.n, 5);
        assert_relative_eq!(stats.mean, 3.0);
        assert_relative_eq!(stats.variance, 2.5);
        assert_relative_eq!(stats.std_dev, 2.5f64.sqrt());
    }

    #[test]
    fn test_single_observation_group() {
        let stats = GroupStats::from_sample("solo", &[7.0]);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.mean, 7.0);
    }
}
