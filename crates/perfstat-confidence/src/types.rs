//! Common types for confidence intervals

use perfstat_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Both bounds strictly positive or both strictly negative
    pub fn excludes_zero(&self) -> bool {
        (self.lower > 0.0 && self.upper > 0.0) || (self.lower < 0.0 && self.upper < 0.0)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level, which must lie in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_probability("Confidence level", level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Outcome of a bootstrap run for a single statistic
///
/// `degenerate` marks the soft-fail contract: when the sample is too small to
/// resample, the bounds and estimate are all zero and no error is raised.
/// Callers that need a hard failure should check the sample size up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BootstrapResult {
    pub point_estimate: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub confidence_level: f64,
    pub n_resamples: usize,
    pub degenerate: bool,
}

impl BootstrapResult {
    /// Zero-width "no CI available" result
    pub fn degenerate(confidence_level: f64) -> Self {
        Self {
            point_estimate: 0.0,
            ci_lower: 0.0,
            ci_upper: 0.0,
            confidence_level,
            n_resamples: 0,
            degenerate: true,
        }
    }

    pub(crate) fn from_interval(interval: ConfidenceInterval, n_resamples: usize) -> Self {
        Self {
            point_estimate: interval.estimate,
            ci_lower: interval.lower,
            ci_upper: interval.upper,
            confidence_level: interval.confidence_level,
            n_resamples,
            degenerate: false,
        }
    }

    pub fn interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.ci_lower,
            self.ci_upper,
            self.point_estimate,
            self.confidence_level,
        )
    }

    /// `(point_estimate, lower, upper)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.point_estimate, self.ci_lower, self.ci_upper)
    }

    /// The interval excludes zero; a degenerate result is never significant
    pub fn is_significant(&self) -> bool {
        !self.degenerate && self.interval().excludes_zero()
    }

    pub fn width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }
}

impl fmt::Display for BootstrapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degenerate {
            return write!(f, "no CI available (sample too small)");
        }
        write!(f, "{}", self.interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0, 5.0, 0.95);

        assert_eq!(ci.width(), 6.0);
        assert_eq!(ci.margin_of_error(), 3.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::new(2.0, 6.0, 4.0, 0.95);
        let ci2 = ConfidenceInterval::new(4.0, 8.0, 6.0, 0.95);
        let ci3 = ConfidenceInterval::new(7.0, 9.0, 8.0, 0.95);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_excludes_zero() {
        assert!(ConfidenceInterval::new(0.5, 2.0, 1.0, 0.95).excludes_zero());
        assert!(ConfidenceInterval::new(-3.0, -0.1, -1.0, 0.95).excludes_zero());
        assert!(!ConfidenceInterval::new(-0.1, 2.0, 1.0, 0.95).excludes_zero());
        // touching zero is not exclusion
        assert!(!ConfidenceInterval::new(0.0, 2.0, 1.0, 0.95).excludes_zero());
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_confidence_level() {
        assert!(ConfidenceLevel::new(1.5).is_err());
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert!(ConfidenceLevel::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::new(2.5, 7.5, 5.0, 0.95);
        let display = format!("{}", ci);
        assert!(display.contains("95.0%"));
        assert!(display.contains("2.5000"));
        assert!(display.contains("7.5000"));
        assert!(display.contains("5.0000"));
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_FIVE), "95.0%");
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_NINE), "99.0%");
    }

    #[test]
    fn test_degenerate_result() {
        let result = BootstrapResult::degenerate(0.95);
        assert_eq!(result.as_tuple(), (0.0, 0.0, 0.0));
        assert!(result.degenerate);
        assert!(!result.is_significant());
        assert_eq!(result.width(), 0.0);
        assert!(result.to_string().contains("no CI"));
    }
}
