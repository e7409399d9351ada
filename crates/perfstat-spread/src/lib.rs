//! Robust dispersion, tail metrics and outlier fences
//!
//! Everything in this crate is built on the Type 7 quantile from
//! `perfstat-quantile`:
//!
//! - [`describe`] produces a [`RobustSummary`] (median, IQR, MAD, the p1…p99.9
//!   ladder and the p99/p50 tail ratio)
//! - [`iqr`], [`mad`] and [`mad_normal`] are available standalone and as
//!   [`SpreadEstimator`] strategy objects
//! - [`tukey_fences`] flags (never removes) extreme values by position
//! - [`coefficient_of_variation`] and [`detect_bimodal`] are quick shape screens
//!
//! # Example
//!
//! ```rust
//! use perfstat_spread::{describe, tukey_fences, DEFAULT_FENCE_K};
//!
//! let runtimes = vec![10.2, 10.4, 10.1, 10.3, 10.2, 31.0];
//! let summary = describe(&runtimes).unwrap();
//! assert!(summary.iqr >= 0.0);
//! let fences = tukey_fences(&runtimes, DEFAULT_FENCE_K).unwrap();
//! assert_eq!(fences.flagged, vec![5]);
//! ```

pub mod fences;
pub mod iqr;
pub mod mad;
pub mod shape;
pub mod summary;
pub mod traits;

pub use fences::{tukey_fences, Fences, DEFAULT_FENCE_K, FAR_OUT_FENCE_K, MIN_FENCE_SAMPLES};
pub use iqr::{iqr, Iqr};
pub use mad::{mad, mad_normal, Mad, StandardizedMad, NORMAL_CONSISTENCY};
pub use shape::{
    coefficient_of_variation, detect_bimodal, is_bimodal_sorted, BIMODAL_GAP_RATIO,
    MIN_BIMODAL_SAMPLES,
};
pub use summary::{
    describe, tail_ratio, tail_ratio_sorted, QuantileLadder, RobustSummary, TailClass,
    P99_9_MIN_SAMPLES,
};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};
