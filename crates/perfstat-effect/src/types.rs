//! Types for effect size representation

use serde::Serialize;
use std::fmt;

/// Types of effect sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeType {
    /// Standardized mean difference (Cohen's d)
    StandardizedMeanDifference,
    /// Proportion of variance explained (eta², omega²)
    VarianceExplained,
}

impl EffectSizeType {
    /// Get the name of the effect size type
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::VarianceExplained => "Variance Explained",
        }
    }

    /// Get the typical range for this effect size type
    pub fn typical_range(&self) -> (f64, f64) {
        match self {
            Self::StandardizedMeanDifference => (f64::NEG_INFINITY, f64::INFINITY),
            Self::VarianceExplained => (0.0, 1.0),
        }
    }
}

/// An effect size measurement with magnitude and interpretation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectSize {
    /// The effect size magnitude
    pub magnitude: f64,
    /// The type of effect size
    pub effect_type: EffectSizeType,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2)
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(
        magnitude: f64,
        effect_type: EffectSizeType,
        sample_sizes: Option<(usize, usize)>,
    ) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude, effect_type);

        Self {
            magnitude,
            effect_type,
            interpretation,
            sample_sizes,
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }

    /// Positive magnitudes favor group 1 for a mean difference `group1 - group2`
    pub fn favors_group1(&self) -> bool {
        self.magnitude > 0.0
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.effect_type.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from magnitude based on effect size type
    pub fn from_magnitude(magnitude: f64, effect_type: EffectSizeType) -> Self {
        let abs_magnitude = magnitude.abs();
        let (small, medium, large) = match effect_type {
            EffectSizeType::StandardizedMeanDifference => (0.2, 0.5, 0.8),
            EffectSizeType::VarianceExplained => (0.01, 0.06, 0.14),
        };

        if abs_magnitude < small {
            Self::Negligible
        } else if abs_magnitude < medium {
            Self::Small
        } else if abs_magnitude < large {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}

/// Cohen's conventions for |d|: 0.2 small, 0.5 medium, 0.8 large
pub fn interpret_cohens_d(d: f64) -> EffectSizeInterpretation {
    EffectSizeInterpretation::from_magnitude(d, EffectSizeType::StandardizedMeanDifference)
}

/// Conventions for eta²: 0.01 small, 0.06 medium, 0.14 large
pub fn interpret_eta_squared(eta_squared: f64) -> EffectSizeInterpretation {
    EffectSizeInterpretation::from_magnitude(eta_squared, EffectSizeType::VarianceExplained)
}
