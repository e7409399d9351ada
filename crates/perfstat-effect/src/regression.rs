//! Mean/spread regression screen
//!
//! A coarse verdict for dashboards: the treatment regresses when its mean
//! rises by more than [`REGRESSION_SLOWDOWN_PCT`] percent or its standard
//! deviation by more than [`REGRESSION_SPREAD_PCT`] percent. It carries no
//! uncertainty; use the quantile CIs for inference.

use perfstat_core::utils::{mean, std_dev};
use serde::Serialize;

/// Mean increase, in percent, above which a treatment is a regression
pub const REGRESSION_SLOWDOWN_PCT: f64 = 5.0;

/// Standard deviation increase, in percent, above which a treatment is a regression
pub const REGRESSION_SPREAD_PCT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionVerdict {
    /// `(mean_treatment - mean_baseline) / mean_baseline * 100`, 0 for a zero baseline mean
    pub runtime_change_pct: f64,
    /// Same ratio on sample standard deviations, 0 when the baseline has no spread
    pub variance_change_pct: f64,
    pub is_regression: bool,
}

impl RegressionVerdict {
    /// Screen `treatment` against `baseline`
    ///
    /// Samples with fewer than two values count as having zero spread.
    pub fn from_samples(baseline: &[f64], treatment: &[f64]) -> Self {
        let runtime_change_pct = percent_change(mean(baseline), mean(treatment));
        let variance_change_pct = percent_change(
            std_dev(baseline).unwrap_or(0.0),
            std_dev(treatment).unwrap_or(0.0),
        );
        Self {
            runtime_change_pct,
            variance_change_pct,
            is_regression: runtime_change_pct > REGRESSION_SLOWDOWN_PCT
                || variance_change_pct > REGRESSION_SPREAD_PCT,
        }
    }
}

fn percent_change(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        return 0.0;
    }
    (after - before) / before * 100.0
}
