//! Bootstrap confidence intervals for performance samples
//!
//! This crate provides the percentile bootstrap used throughout perfstat:
//!
//! - [`Bootstrap`] is the configurable driver (resample count, confidence
//!   level, seed) for one- and two-sample statistics
//! - [`bootstrap_ci`], [`bootstrap_ci_quantile`] and [`quantile_cis`] cover the
//!   one-sample cases
//! - [`quantile_difference_ci`] is the two-sample comparator
//!
//! # Determinism
//!
//! Randomness never comes from global state. Each call takes a seed, and each
//! resample derives its own stream from it, so a fixed seed reproduces the
//! same interval whether or not the `parallel` feature is enabled.
//!
//! # Small samples
//!
//! Bootstrapping fewer than two observations is not an error: the result is
//! flagged `degenerate` with zero estimate and bounds, meaning "no CI
//! available". Invalid settings (confidence outside (0, 1), zero resamples,
//! bad quantile levels) are still hard errors.
//!
//! # Example
//!
//! ```rust
//! use perfstat_confidence::quantile_difference_ci;
//!
//! let baseline = vec![10.0, 11.0, 10.5, 10.2, 10.8, 11.1, 10.4, 10.9];
//! let treatment = vec![12.0, 12.4, 11.9, 12.8, 12.1, 12.6, 12.2, 12.3];
//! let r = quantile_difference_ci(&treatment, &baseline, 0.5, 0.95, 2000, 42).unwrap();
//! assert!(r.is_significant());
//! ```

pub mod api;
mod bootstrap;
mod methods;
mod types;

pub use api::{
    bootstrap_ci, bootstrap_ci_quantile, quantile_cis, quantile_difference_ci, QuantileCi,
    DEFAULT_QUANTILES,
};
pub use bootstrap::{
    resample, resample_stream, Bootstrap, DEFAULT_CONFIDENCE, DEFAULT_RESAMPLES, DEFAULT_SEED,
    FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES, MIN_BOOTSTRAP_SAMPLES,
};
pub use methods::{BootstrapMethod, PercentileBootstrap};
pub use types::{BootstrapResult, ConfidenceInterval, ConfidenceLevel};

pub use perfstat_core::{Error, Result};
