//! Bootstrap interval methods
//!
//! Only the percentile method is provided. It reads the interval straight off
//! the sorted bootstrap distribution without bias correction.

use crate::ConfidenceInterval;
use perfstat_core::{utils::sorted, Error, Result};

/// Turns a bootstrap distribution into a confidence interval
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from bootstrap distribution
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Percentile bootstrap method
///
/// With `B` sorted estimates and `alpha = 1 - confidence`, the bounds are the
/// estimates at indices `floor(alpha/2 * B)` and `floor((1 - alpha/2) * B)`,
/// both clamped to `B - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl PercentileBootstrap {
    /// Indices of the lower and upper bounds in a sorted distribution of `len`
    pub fn bound_indices(len: usize, confidence_level: f64) -> (usize, usize) {
        let alpha = 1.0 - confidence_level;
        let lower_idx = ((alpha / 2.0) * len as f64) as usize;
        let upper_idx = ((1.0 - alpha / 2.0) * len as f64) as usize;
        let last = len.saturating_sub(1);
        (lower_idx.min(last), upper_idx.min(last))
    }
}

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        if bootstrap_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let sorted_estimates = sorted(bootstrap_estimates);
        let (lower_idx, upper_idx) = Self::bound_indices(sorted_estimates.len(), confidence_level);

        Ok(ConfidenceInterval::new(
            sorted_estimates[lower_idx],
            sorted_estimates[upper_idx],
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}
