//! Median Absolute Deviation (MAD) estimators

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use perfstat_core::{utils::sort_in_place, Result};
use perfstat_quantile::{QuantileEstimator, Type7};

/// Consistency constant making MAD comparable to the standard deviation
/// for normally distributed data
pub const NORMAL_CONSISTENCY: f64 = 1.4826;

/// Raw median absolute deviation: `median(|x - median(x)|)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Mad;

impl SpreadEstimatorProperties for Mad {
    fn name(&self) -> &str {
        "MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675 // 36.75% efficiency for MAD
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Mad {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let center = quantile_est.quantile_sorted(sorted_data, 0.5)?;
        let mut deviations: Vec<f64> = sorted_data.iter().map(|&x| (x - center).abs()).collect();
        sort_in_place(&mut deviations);
        quantile_est.quantile_sorted(&deviations, 0.5)
    }
}

/// MAD scaled by [`NORMAL_CONSISTENCY`]
#[derive(Debug, Clone, Copy)]
pub struct StandardizedMad {
    factor: f64,
}

impl StandardizedMad {
    pub fn new() -> Self {
        Self {
            factor: NORMAL_CONSISTENCY,
        }
    }

    /// Use a custom consistency factor
    pub fn with_factor(factor: f64) -> Self {
        Self { factor }
    }
}

impl Default for StandardizedMad {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadEstimatorProperties for StandardizedMad {
    fn name(&self) -> &str {
        "Standardized MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for StandardizedMad {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        Ok(self.factor * Mad.estimate_sorted(sorted_data, quantile_est)?)
    }
}

/// Raw MAD with the Type 7 convention
pub fn mad(data: &[f64]) -> Result<f64> {
    Mad.estimate(data, &Type7)
}

/// MAD rescaled to estimate the standard deviation of normal data
pub fn mad_normal(data: &[f64]) -> Result<f64> {
    StandardizedMad::new().estimate(data, &Type7)
}
