//! Quantile estimation for performance samples
//!
//! One interpolation convention (Type 7, linear between order statistics) is
//! used throughout perfstat; this crate is its single home. It also exposes
//! the empirical CDF sampler consumed by plotting collaborators.
//!
//! # Example
//!
//! ```rust
//! use perfstat_quantile::{median, quantile, quantiles};
//!
//! let latencies = vec![12.0, 15.0, 11.0, 14.0, 90.0];
//! assert_eq!(median(&latencies).unwrap(), 14.0);
//! let p = quantiles(&latencies, &[0.25, 0.75]).unwrap();
//! assert_eq!(p, vec![12.0, 15.0]);
//! assert!(quantile(&latencies, 0.99).unwrap() > 80.0);
//! ```

pub mod ecdf;
pub mod traits;
pub mod type7;

pub use ecdf::{ecdf_values, DEFAULT_ECDF_POINTS};
pub use traits::QuantileEstimator;
pub use type7::{
    median, median_sorted, percentile_label, quantile, quantile_sorted, quantiles, Type7,
};

pub use perfstat_core::{Error, Result};
