//! Effect sizes and two-sample comparisons
//!
//! - [`hodges_lehmann`]: median of pairwise differences, a robust shift
//! - [`cohens_d`] / [`CohenD`]: standardized mean difference
//! - [`quantile_comparison`]: bootstrap CI per quantile plus robust summaries
//! - [`probability_of_improvement`]: normal-approximation `P(treatment > baseline)`
//! - [`RegressionVerdict`]: mean/spread regression screen carried on each report
//!
//! [`EffectSizeInterpretation`] applies Cohen's conventions to d and eta².
//!
//! # Example
//!
//! ```rust
//! use perfstat_effect::{quantile_comparison, ComparisonConfig};
//!
//! let baseline: Vec<f64> = (0..40).map(|i| 100.0 + (i % 7) as f64).collect();
//! let treatment: Vec<f64> = baseline.iter().map(|x| x * 1.2).collect();
//! let config = ComparisonConfig { n_resamples: 1000, ..Default::default() };
//! let report = quantile_comparison(&baseline, &treatment, &[0.5, 0.9], &config).unwrap();
//! assert!(report.get("p50").unwrap().significant);
//! ```

pub mod cohen_d;
pub mod comparison;
pub mod hodges_lehmann;
pub mod probability;
pub mod regression;
pub mod types;

pub use cohen_d::{cohens_d, cohens_d_from_stats, CohenD};
pub use comparison::{
    default_quantile_comparison, quantile_comparison, ComparisonConfig, QuantileComparison,
    QuantileDelta,
};
pub use hodges_lehmann::{hodges_lehmann, HODGES_LEHMANN_WARN_PAIRS};
pub use probability::{probability_of_improvement, ImprovementProbability};
pub use regression::{RegressionVerdict, REGRESSION_SLOWDOWN_PCT, REGRESSION_SPREAD_PCT};
pub use types::{
    interpret_cohens_d, interpret_eta_squared, EffectSize, EffectSizeInterpretation,
    EffectSizeType,
};

pub use perfstat_confidence::DEFAULT_QUANTILES;
pub use perfstat_core::{Error, Result};
