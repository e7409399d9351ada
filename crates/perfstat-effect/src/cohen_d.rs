//! Cohen's d with the pooled standard deviation
//!
//! d = (mean₁ - mean₂) / s_pooled, where
//! s_pooled² = ((n₁ - 1)s₁² + (n₂ - 1)s₂²) / (n₁ + n₂ - 2).

use crate::{EffectSize, EffectSizeType};
use perfstat_core::utils::{mean, variance};
use perfstat_core::Result;

/// Cohen's d from summary statistics
///
/// Returns `0.0` when the pooled standard deviation is zero.
pub fn cohens_d_from_stats(mean1: f64, mean2: f64, sd1: f64, sd2: f64, n1: usize, n2: usize) -> f64 {
    let dof = (n1 + n2).saturating_sub(2);
    if dof == 0 {
        return 0.0;
    }
    let pooled_variance = ((n1.saturating_sub(1)) as f64 * sd1 * sd1
        + (n2.saturating_sub(1)) as f64 * sd2 * sd2)
        / dof as f64;
    let pooled_sd = pooled_variance.sqrt();
    if pooled_sd == 0.0 {
        return 0.0;
    }
    (mean1 - mean2) / pooled_sd
}

/// Cohen's d of `a` against `b`
///
/// Both groups need at least two observations. Identical constant groups
/// give `0.0` rather than a division by zero.
///
/// # Examples
///
/// ```rust
/// use perfstat_effect::cohens_d;
///
/// let d = cohens_d(&[2.0, 4.0, 6.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert!((d - 0.5).abs() < 1e-12);
/// ```
pub fn cohens_d(a: &[f64], b: &[f64]) -> Result<f64> {
    let var_a = variance(a)?;
    let var_b = variance(b)?;
    Ok(cohens_d_from_stats(
        mean(a),
        mean(b),
        var_a.sqrt(),
        var_b.sqrt(),
        a.len(),
        b.len(),
    ))
}

/// Cohen's d estimator producing an interpreted [`EffectSize`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    pub fn new() -> Self {
        Self
    }

    /// Compute d for `group1 - group2`
    pub fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<EffectSize> {
        let d = cohens_d(group1, group2)?;
        Ok(EffectSize::new(
            d,
            EffectSizeType::StandardizedMeanDifference,
            Some((group1.len(), group2.len())),
        ))
    }
}
