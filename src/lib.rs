//! # perfstat
//!
//! Non-parametric inference for repeated performance measurements: runtimes,
//! latencies and counters that are heavy-tailed, multimodal and rarely
//! normal.
//!
//! The workspace is split the same way the analysis is:
//!
//! - `perfstat_core`: errors, numeric backends with precision tags, slice
//!   helpers (re-exported at the crate root)
//! - [`quantile`]: Type 7 quantiles and the empirical CDF
//! - [`spread`]: robust summaries (median, IQR, MAD, percentile ladder, tail
//!   ratio, CV, bimodality flag) and Tukey fences
//! - [`confidence`]: seeded percentile-bootstrap CIs, including the
//!   two-sample quantile difference
//! - [`effect`]: Hodges-Lehmann, Cohen's d, quantile comparison reports and a
//!   regression verdict
//! - [`anova`]: one-way ANOVA, Tukey HSD, Bonferroni and t tests
//! - [`power`]: sample size, detectable effect and achieved power
//!
//! [`Engine`] applies one [`EngineConfig`] across all of them.
//!
//! ## Example
//!
//! ```rust
//! use perfstat::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default().with_resamples(1000)).unwrap();
//!
//! let runtimes = vec![10.2, 10.4, 10.1, 10.3, 10.2, 31.0, 10.5, 10.3];
//! let summary = engine.describe(&runtimes).unwrap();
//! assert!(summary.median < 11.0);
//!
//! let fences = engine.fences(&runtimes).unwrap();
//! assert_eq!(fences.flagged, vec![5]);
//! ```
//!
//! ## Logging
//!
//! The crates emit `tracing` events at debug level, plus a warning when a
//! Hodges-Lehmann estimate has to materialize more than ten million pairwise
//! differences. Install any subscriber to see them.

pub mod config;
pub mod engine;

pub use config::EngineConfig;
pub use engine::Engine;

pub use perfstat_anova as anova;
pub use perfstat_confidence as confidence;
pub use perfstat_effect as effect;
pub use perfstat_power as power;
pub use perfstat_quantile as quantile;
pub use perfstat_spread as spread;

pub use perfstat_anova::{
    bonferroni, one_way_anova, ttest_independent, tukey_hsd, welch_t_test, AnovaEngine,
    AnovaResult, BonferroniReport, GroupStats, PairwiseComparison, PostHoc, StudentizedRange,
    TTestResult,
};
pub use perfstat_confidence::{
    bootstrap_ci, bootstrap_ci_quantile, quantile_cis, quantile_difference_ci, Bootstrap,
    BootstrapResult, QuantileCi, DEFAULT_CONFIDENCE, DEFAULT_QUANTILES, DEFAULT_RESAMPLES,
    DEFAULT_SEED, FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES,
};
pub use perfstat_core::{
    utils::validate_finite, Error, NumericBackend, Precision, Result, Tagged, DEFAULT_ALPHA,
};
pub use perfstat_effect::{
    cohens_d, hodges_lehmann, probability_of_improvement, quantile_comparison, ComparisonConfig,
    EffectSizeInterpretation, QuantileComparison, RegressionVerdict,
};
pub use perfstat_power::{
    achieved_power, estimate_effect_from_pilot, min_detectable_effect, required_n,
    PowerCalculator,
};
pub use perfstat_quantile::{ecdf_values, median, quantile, quantiles};
pub use perfstat_spread::{
    coefficient_of_variation, describe, detect_bimodal, tukey_fences, Fences, RobustSummary,
    TailClass,
};
