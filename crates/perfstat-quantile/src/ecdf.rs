//! Empirical cumulative distribution function
//!
//! Plotting code wants `(x, F(x))` pairs rather than histogram bins. The ECDF
//! is sampled at evenly spaced points across `[min, max]`, with each `F(x)`
//! being the fraction of observations `<= x`.

use perfstat_core::{utils::sorted, Error, Result};

/// Evaluation points used when callers have no preference
pub const DEFAULT_ECDF_POINTS: usize = 1000;

/// Sample the ECDF at `num_points` evenly spaced values over `[min, max]`
///
/// Returns `(x_values, cumulative_fractions)`. A constant sample yields the
/// single pair `([min], [1.0])`; an empty sample yields two empty vectors.
///
/// # Examples
///
/// ```rust
/// use perfstat_quantile::ecdf_values;
///
/// let (xs, ys) = ecdf_values(&[1.0, 2.0, 3.0, 4.0], 4).unwrap();
/// assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(ys, vec![0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn ecdf_values(sample: &[f64], num_points: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if num_points < 2 {
        return Err(Error::InvalidParameter(format!(
            "ECDF needs at least 2 evaluation points, got {num_points}"
        )));
    }
    if sample.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let sorted_data = sorted(sample);
    let n = sorted_data.len() as f64;
    let min = sorted_data[0];
    let max = sorted_data[sorted_data.len() - 1];

    if min == max {
        return Ok((vec![min], vec![1.0]));
    }

    let step = (max - min) / (num_points - 1) as f64;
    let mut xs = Vec::with_capacity(num_points);
    let mut ys = Vec::with_capacity(num_points);
    for i in 0..num_points {
        // pin the last point so rounding never leaves max uncounted
        let x = if i == num_points - 1 {
            max
        } else {
            min + step * i as f64
        };
        let count = sorted_data.partition_point(|&v| v <= x);
        xs.push(x);
        ys.push(count as f64 / n);
    }
    Ok((xs, ys))
}
