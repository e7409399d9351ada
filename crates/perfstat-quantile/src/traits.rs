//! Traits for quantile estimators

use perfstat_core::{utils::sorted, Error, Result};

/// A quantile estimator over finite samples
///
/// Implementors only provide [`quantile_sorted`](QuantileEstimator::quantile_sorted);
/// the unsorted entry points sort a private copy, so callers' slices are never
/// reordered.
pub trait QuantileEstimator: Send + Sync {
    /// Estimate the `p`-th quantile of already sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate the `p`-th quantile of unsorted data
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::empty_input("quantile"));
        }
        self.quantile_sorted(&sorted(data), p)
    }

    /// Estimate several quantiles with a single sort
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        if data.is_empty() {
            return Err(Error::empty_input("quantiles"));
        }
        let sorted_data = sorted(data);
        ps.iter()
            .map(|&p| self.quantile_sorted(&sorted_data, p))
            .collect()
    }

    /// Human-readable estimator name
    fn name(&self) -> &'static str;
}
