//! Post-hoc pairwise comparisons after a one-way ANOVA
//!
//! Both procedures take an [`AnovaResult`] by reference and read the
//! per-group statistics, `ms_within` and `df_within` from it. Pairs are
//! visited in lexicographic name order and each unordered pair appears once.

use crate::types::{AnovaResult, BonferroniReport, GroupStats, PairwiseComparison};
use perfstat_core::{check_open_probability, Error, NumericBackend, Precision, Result, Tagged};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use tracing::debug;

/// How Tukey HSD p-values are computed under the exact backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentizedRange {
    /// Numerically integrated studentized range distribution
    #[default]
    Exact,
    /// Two-sided t test on `q / sqrt(2)`, tagged approximate
    TApproximation,
}

/// Post-hoc test engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PostHoc {
    backend: NumericBackend,
    studentized_range: StudentizedRange,
}

impl PostHoc {
    pub fn new(backend: NumericBackend) -> Self {
        Self {
            backend,
            studentized_range: StudentizedRange::default(),
        }
    }

    pub fn with_studentized_range(mut self, method: StudentizedRange) -> Self {
        self.studentized_range = method;
        self
    }

    pub fn backend(&self) -> NumericBackend {
        self.backend
    }

    pub fn studentized_range(&self) -> StudentizedRange {
        self.studentized_range
    }

    fn tukey_p(&self, q: f64, k: usize, df: f64) -> Result<Tagged<f64>> {
        match (self.backend, self.studentized_range) {
            (NumericBackend::Exact, StudentizedRange::TApproximation) => {
                let p = self.backend.t_two_sided_p(q / SQRT_2, df)?;
                Ok(Tagged::approximate(p.value))
            }
            _ => self.backend.studentized_range_upper_tail(q, k, df),
        }
    }

    /// Tukey's honestly significant difference test
    ///
    /// For each pair, `se = sqrt(ms_within · (1/n_i + 1/n_j) / 2)` and
    /// `q = |mean_i - mean_j| / se`. A pair is significant when `p < alpha`.
    pub fn tukey_hsd(&self, anova: &AnovaResult, alpha: f64) -> Result<Vec<PairwiseComparison>> {
        check_open_probability("alpha", alpha)?;
        let k = anova.n_groups;
        let df = anova.df_within as f64;

        let mut comparisons = Vec::with_capacity(anova.n_comparisons());
        for (g1, g2) in pairs(&anova.groups) {
            let mean_diff = g1.mean - g2.mean;
            let se = (anova.ms_within * (1.0 / g1.n as f64 + 1.0 / g2.n as f64) / 2.0).sqrt();

            let (q, p) = if se == 0.0 {
                if mean_diff == 0.0 {
                    (0.0, Tagged::exact(1.0))
                } else {
                    (f64::INFINITY, Tagged::exact(0.0))
                }
            } else {
                let q = mean_diff.abs() / se;
                (q, self.tukey_p(q, k, df)?)
            };

            debug!(group1 = %g1.name, group2 = %g2.name, q, p = p.value, "Tukey HSD pair");
            comparisons.push(PairwiseComparison {
                group1: g1.name.clone(),
                group2: g2.name.clone(),
                mean1: g1.mean,
                mean2: g2.mean,
                mean_diff,
                test_statistic: q,
                std_error: se,
                p_value: p.value,
                p_value_corrected: None,
                significant: p.value < alpha,
                precision: p.precision,
            });
        }
        Ok(comparisons)
    }

    /// Bonferroni-corrected pairwise Welch t statistics
    ///
    /// Each pair uses `se = sqrt(var1/n1 + var2/n2)` with `n1 + n2 - 2`
    /// degrees of freedom. With `C` comparisons the corrected p-value is
    /// `min(1, p·C)` and a pair is significant when `p < alpha / C`.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientData`] if any group has fewer than two values.
    pub fn bonferroni(&self, anova: &AnovaResult, alpha: f64) -> Result<BonferroniReport> {
        check_open_probability("alpha", alpha)?;
        if let Some(small) = anova.groups.iter().find(|g| g.n < 2) {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: small.n,
            });
        }

        let n_comparisons = anova.n_comparisons();
        let alpha_corrected = alpha / n_comparisons as f64;

        let mut comparisons = Vec::with_capacity(n_comparisons);
        for (g1, g2) in pairs(&anova.groups) {
            let mean_diff = g1.mean - g2.mean;
            let se = (g1.variance / g1.n as f64 + g2.variance / g2.n as f64).sqrt();
            let df = (g1.n + g2.n - 2) as f64;

            let (t, p) = if se == 0.0 {
                if mean_diff == 0.0 {
                    (0.0, Tagged::exact(1.0))
                } else {
                    (mean_diff.signum() * f64::INFINITY, Tagged::exact(0.0))
                }
            } else {
                let t = mean_diff / se;
                (t, self.backend.t_two_sided_p(t, df)?)
            };

            comparisons.push(PairwiseComparison {
                group1: g1.name.clone(),
                group2: g2.name.clone(),
                mean1: g1.mean,
                mean2: g2.mean,
                mean_diff,
                test_statistic: t,
                std_error: se,
                p_value: p.value,
                p_value_corrected: Some((p.value * n_comparisons as f64).min(1.0)),
                significant: p.value < alpha_corrected,
                precision: p.precision,
            });
        }

        debug!(n_comparisons, alpha_corrected, "Bonferroni comparisons computed");
        Ok(BonferroniReport {
            comparisons,
            n_comparisons,
            alpha,
            alpha_corrected,
        })
    }
}

fn pairs(groups: &[GroupStats]) -> impl Iterator<Item = (&GroupStats, &GroupStats)> {
    groups
        .iter()
        .enumerate()
        .flat_map(move |(i, g1)| groups[i + 1..].iter().map(move |g2| (g1, g2)))
}

/// [`PostHoc::tukey_hsd`] with the exact backend and exact studentized range
pub fn tukey_hsd(anova: &AnovaResult, alpha: f64) -> Result<Vec<PairwiseComparison>> {
    PostHoc::new(NumericBackend::Exact).tukey_hsd(anova, alpha)
}

/// [`PostHoc::bonferroni`] with the exact backend
pub fn bonferroni(anova: &AnovaResult, alpha: f64) -> Result<BonferroniReport> {
    PostHoc::new(NumericBackend::Exact).bonferroni(anova, alpha)
}

/// Whether every record in `comparisons` came from an exact path
pub fn all_exact(comparisons: &[PairwiseComparison]) -> bool {
    comparisons.iter().all(|c| c.precision == Precision::Exact)
}
