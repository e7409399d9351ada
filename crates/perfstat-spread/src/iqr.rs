//! Interquartile range

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use perfstat_core::Result;
use perfstat_quantile::{QuantileEstimator, Type7};

/// Interquartile range estimator: `Q3 - Q1`
#[derive(Debug, Clone, Copy, Default)]
pub struct Iqr;

impl SpreadEstimatorProperties for Iqr {
    fn name(&self) -> &str {
        "IQR"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.37
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Iqr {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let q1 = quantile_est.quantile_sorted(sorted_data, 0.25)?;
        let q3 = quantile_est.quantile_sorted(sorted_data, 0.75)?;
        Ok(q3 - q1)
    }
}

/// Interquartile range with the Type 7 convention
///
/// # Examples
///
/// ```rust
/// use perfstat_spread::iqr;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(iqr(&data).unwrap(), 2.0);
/// ```
pub fn iqr(data: &[f64]) -> Result<f64> {
    Iqr.estimate(data, &Type7)
}
