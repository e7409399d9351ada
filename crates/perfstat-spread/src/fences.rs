//! Tukey's IQR fences
//!
//! Values beyond the fences are flagged for investigation, never removed:
//! in performance data they are usually real tail behaviour. Flags are the
//! positions of the offending values in the caller's original order.

use perfstat_core::{utils::sorted, Error, Result};
use perfstat_quantile::quantile_sorted;
use serde::Serialize;

/// Standard fence multiplier
pub const DEFAULT_FENCE_K: f64 = 1.5;

/// Multiplier for "far out" values
pub const FAR_OUT_FENCE_K: f64 = 3.0;

/// Minimum sample size for which fences are computed
pub const MIN_FENCE_SAMPLES: usize = 4;

/// Fence bounds and the indices of values outside them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
    /// Positions in the input, ascending
    pub flagged: Vec<usize>,
}

impl Fences {
    fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            flagged: Vec::new(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn has_flags(&self) -> bool {
        !self.flagged.is_empty()
    }
}

/// Tukey fences `[Q1 - k IQR, Q3 + k IQR]`
///
/// With fewer than [`MIN_FENCE_SAMPLES`] values spread cannot be assessed,
/// so the fences are `(-inf, +inf)` and nothing is flagged.
///
/// # Examples
///
/// ```rust
/// use perfstat_spread::{tukey_fences, DEFAULT_FENCE_K};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let fences = tukey_fences(&data, DEFAULT_FENCE_K).unwrap();
/// assert_eq!(fences.flagged, vec![9]);
/// ```
pub fn tukey_fences(data: &[f64], k: f64) -> Result<Fences> {
    if !k.is_finite() || k < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "fence multiplier {k} must be finite and non-negative"
        )));
    }
    if data.len() < MIN_FENCE_SAMPLES {
        return Ok(Fences::unbounded());
    }

    let sorted_data = sorted(data);
    let q1 = quantile_sorted(&sorted_data, 0.25)?;
    let q3 = quantile_sorted(&sorted_data, 0.75)?;
    let iqr = q3 - q1;
    let lower = q1 - k * iqr;
    let upper = q3 + k * iqr;

    let flagged = data
        .iter()
        .enumerate()
        .filter(|(_, v)| **v < lower || **v > upper)
        .map(|(i, _)| i)
        .collect();

    Ok(Fences {
        lower,
        upper,
        flagged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_high_outlier() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let fences = tukey_fences(&data, 1.5).unwrap();
        // Q1 = 3.25, Q3 = 7.75, IQR = 4.5
        assert_relative_eq!(fences.lower, -3.5);
        assert_relative_eq!(fences.upper, 14.5);
        assert_eq!(fences.flagged, vec![9]);
    }

    #[test]
    fn test_indices_keep_original_order() {
        let data = [100.0, 5.0, 4.0, 6.0, 5.0, -80.0, 5.5, 4.5];
        let fences = tukey_fences(&data, 1.5).unwrap();
        assert_eq!(fences.flagged, vec![0, 5]);
        assert!(!fences.contains(100.0));
    }

    #[test]
    fn test_small_samples_unbounded() {
        let fences = tukey_fences(&[1.0, 2.0, 1000.0], 1.5).unwrap();
        assert_eq!(fences.lower, f64::NEG_INFINITY);
        assert_eq!(fences.upper, f64::INFINITY);
        assert!(!fences.has_flags());
    }

    #[test]
    fn test_wider_fences_flag_less() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 19.0];
        let standard = tukey_fences(&data, DEFAULT_FENCE_K).unwrap();
        let far = tukey_fences(&data, FAR_OUT_FENCE_K).unwrap();
        assert_eq!(standard.flagged, vec![9]);
        assert!(far.flagged.is_empty());
    }

    #[test]
    fn test_invalid_multiplier() {
        assert!(tukey_fences(&[1.0, 2.0, 3.0, 4.0], -1.0).is_err());
        assert!(tukey_fences(&[1.0, 2.0, 3.0, 4.0], f64::NAN).is_err());
    }
}
