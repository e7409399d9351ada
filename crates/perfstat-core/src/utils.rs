//! Utility functions for working with data slices
//!
//! Every function here treats its input as read-only; sorting happens on a copy.

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use perfstat_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort an owned buffer ascending, NaN last
pub fn sort_in_place(buffer: &mut [f64]) {
    buffer.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use perfstat_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sum of squared deviations from the mean
pub fn sum_of_squares(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum()
}

/// Sample variance with Bessel's correction
///
/// Fails for fewer than two observations instead of returning a value that
/// could be mistaken for a real statistic.
pub fn variance(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    Ok(sum_of_squares(data) / (data.len() - 1) as f64)
}

/// Sample standard deviation
///
/// # Examples
///
/// ```rust
/// use perfstat_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Reject samples containing NaN or infinite values
pub fn validate_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
