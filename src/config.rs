//! Engine configuration
//!
//! [`EngineConfig`] gathers every knob the facade forwards to the component
//! crates. It deserializes from JSON with missing fields taking their
//! defaults, and [`EngineConfig::validate`] runs before an [`crate::Engine`]
//! is built.

use perfstat_anova::StudentizedRange;
use perfstat_confidence::{
    DEFAULT_CONFIDENCE, DEFAULT_QUANTILES, DEFAULT_RESAMPLES, DEFAULT_SEED,
};
use perfstat_core::{
    check_open_probability, check_quantile_level, Error, NumericBackend, Result, DEFAULT_ALPHA,
};
use perfstat_spread::DEFAULT_FENCE_K;
use serde::{Deserialize, Serialize};

/// Settings shared by every [`crate::Engine`] operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Exact special functions or coarse fallbacks
    pub backend: NumericBackend,
    /// Tukey HSD p-value method under the exact backend
    pub studentized_range: StudentizedRange,
    /// Bootstrap confidence level
    pub confidence: f64,
    pub n_resamples: usize,
    pub seed: u64,
    /// Significance level for ANOVA post-hoc tests and power analysis
    pub alpha: f64,
    /// Quantile levels reported by CI tables and comparisons
    pub quantiles: Vec<f64>,
    /// Tukey fence multiplier
    pub fence_k: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: NumericBackend::Exact,
            studentized_range: StudentizedRange::Exact,
            confidence: DEFAULT_CONFIDENCE,
            n_resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
            alpha: DEFAULT_ALPHA,
            quantiles: DEFAULT_QUANTILES.to_vec(),
            fence_k: DEFAULT_FENCE_K,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document; absent fields keep their defaults
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perfstat::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{"n_resamples": 2000, "backend": "approximate"}"#).unwrap();
    /// assert_eq!(config.n_resamples, 2000);
    /// assert_eq!(config.seed, 42);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Computation(format!("failed to serialize engine config: {e}")))
    }

    pub fn with_backend(mut self, backend: NumericBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_quantiles(mut self, quantiles: Vec<f64>) -> Self {
        self.quantiles = quantiles;
        self
    }

    /// Reject values no operation could use
    pub fn validate(&self) -> Result<()> {
        check_open_probability("Confidence level", self.confidence)?;
        check_open_probability("alpha", self.alpha)?;
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        for &q in &self.quantiles {
            check_quantile_level(q)?;
        }
        if !self.fence_k.is_finite() || self.fence_k < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "fence multiplier {} must be finite and non-negative",
                self.fence_k
            )));
        }
        Ok(())
    }
}
