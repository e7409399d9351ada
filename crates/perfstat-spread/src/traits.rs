//! Core traits for spread estimation

use perfstat_core::Result;
use perfstat_quantile::{QuantileEstimator, Type7};

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;
}

/// Spread/scale estimators parameterized by the quantile estimator they use
pub trait SpreadEstimator<Q: QuantileEstimator = Type7>: SpreadEstimatorProperties {
    /// Estimate spread of unsorted data
    fn estimate(&self, data: &[f64], quantile_est: &Q) -> Result<f64> {
        if data.is_empty() {
            return Err(perfstat_core::Error::empty_input("spread"));
        }
        self.estimate_sorted(&perfstat_core::utils::sorted(data), quantile_est)
    }

    /// Compute spread from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64>;
}
