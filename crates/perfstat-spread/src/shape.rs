//! Distribution shape screens
//!
//! Cheap flags for report tables. [`detect_bimodal`] is a gap heuristic, not
//! a modality test.

use perfstat_core::utils::{mean, sorted, std_dev};

/// Minimum sample size for the bimodality gap screen
pub const MIN_BIMODAL_SAMPLES: usize = 10;

/// Largest-gap to mean-gap ratio above which a sample is flagged bimodal
pub const BIMODAL_GAP_RATIO: f64 = 3.0;

/// Sample standard deviation as a percentage of the mean
///
/// Returns `0.0` for fewer than two values or a zero mean.
///
/// # Examples
///
/// ```rust
/// use perfstat_spread::coefficient_of_variation;
///
/// let cv = coefficient_of_variation(&[9.0, 10.0, 11.0]);
/// assert!((cv - 10.0).abs() < 1e-12);
/// ```
pub fn coefficient_of_variation(data: &[f64]) -> f64 {
    let m = mean(data);
    if data.len() < 2 || m == 0.0 {
        return 0.0;
    }
    std_dev(data).map_or(0.0, |sd| sd / m * 100.0)
}

/// Gap screen on already sorted data
pub fn is_bimodal_sorted(sorted_data: &[f64]) -> bool {
    if sorted_data.len() < MIN_BIMODAL_SAMPLES {
        return false;
    }
    let gaps: Vec<f64> = sorted_data.windows(2).map(|w| w[1] - w[0]).collect();
    let mean_gap = mean(&gaps);
    let max_gap = gaps.iter().copied().fold(0.0, f64::max);
    max_gap > BIMODAL_GAP_RATIO * mean_gap
}

/// Flag samples whose largest gap between neighbouring sorted values exceeds
/// [`BIMODAL_GAP_RATIO`] times the mean gap
///
/// Samples smaller than [`MIN_BIMODAL_SAMPLES`] are never flagged.
pub fn detect_bimodal(data: &[f64]) -> bool {
    is_bimodal_sorted(&sorted(data))
}
