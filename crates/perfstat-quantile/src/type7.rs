//! Linear interpolation between order statistics ("Type 7")
//!
//! For a sorted sample `x[0..n]` and level `q`, let `h = (n - 1) q` and
//! `f = floor(h)`. The estimate is `x[f] + (h - f) (x[f + 1] - x[f])`, or the
//! last value when `f` is the last index. `q = 0` is the minimum and `q = 1`
//! the maximum. Every statistic in perfstat that needs a quantile goes
//! through [`quantile_sorted`], so medians, IQRs and bootstrap targets share
//! one convention.

use crate::traits::QuantileEstimator;
use perfstat_core::{check_quantile_level, Error, Result};

/// The Type 7 estimator as a strategy object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Type7;

impl QuantileEstimator for Type7 {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        quantile_sorted(sorted_data, p)
    }

    fn name(&self) -> &'static str {
        "Type 7 (linear interpolation)"
    }
}

/// Type 7 quantile of already sorted data
pub fn quantile_sorted(sorted_data: &[f64], q: f64) -> Result<f64> {
    check_quantile_level(q)?;
    let n = sorted_data.len();
    if n == 0 {
        return Err(Error::empty_input("quantile"));
    }

    let h = (n - 1) as f64 * q;
    let f = h.floor() as usize;
    if f >= n - 1 {
        return Ok(sorted_data[n - 1]);
    }
    let frac = h - f as f64;
    let (lo, hi) = (sorted_data[f], sorted_data[f + 1]);
    // rounding must not step outside the bracketing order statistics
    Ok((lo + frac * (hi - lo)).max(lo).min(hi))
}

/// Type 7 quantile of unsorted data
///
/// # Examples
///
/// ```rust
/// use perfstat_quantile::quantile;
///
/// let data = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
/// assert_eq!(quantile(&data, 0.25).unwrap(), 2.0);
/// assert_eq!(data[0], 5.0); // untouched
/// ```
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    Type7.quantile(data, q)
}

/// Several Type 7 quantiles with a single sort
pub fn quantiles(data: &[f64], qs: &[f64]) -> Result<Vec<f64>> {
    Type7.quantiles(data, qs)
}

/// Sample median
pub fn median(data: &[f64]) -> Result<f64> {
    quantile(data, 0.5)
}

/// Median of already sorted data
pub fn median_sorted(sorted_data: &[f64]) -> Result<f64> {
    quantile_sorted(sorted_data, 0.5)
}

/// Report label for a quantile level: `0.5 -> "p50"`, `0.999 -> "p99.9"`
pub fn percentile_label(q: f64) -> String {
    let pct = (q * 100.0 * 1e6).round() / 1e6;
    if pct.fract() == 0.0 {
        format!("p{pct:.0}")
    } else {
        format!("p{pct}")
    }
}
