//! Group-based inference: one-way ANOVA, post-hoc tests and t tests
//!
//! [`AnovaEngine`] runs the omnibus test and reports eta² and omega²
//! alongside the ANOVA table. Post-hoc procedures in [`PostHoc`] consume the
//! resulting [`AnovaResult`], so they cannot run without one. Every p-value
//! is produced by the configured [`perfstat_core::NumericBackend`] and
//! records carry its [`perfstat_core::Precision`].
//!
//! # Example
//!
//! ```rust
//! use perfstat_anova::{one_way_anova, tukey_hsd};
//!
//! let groups = vec![
//!     ("fifo", vec![12.1, 11.8, 12.4, 12.0, 12.2]),
//!     ("rr", vec![12.3, 12.0, 12.6, 12.1, 12.5]),
//!     ("deadline", vec![15.2, 14.9, 15.6, 15.1, 15.4]),
//! ];
//! let anova = one_way_anova(groups).unwrap();
//! assert!(anova.is_significant(0.05));
//!
//! let pairs = tukey_hsd(&anova, 0.05).unwrap();
//! assert_eq!(pairs.len(), 3);
//! ```

pub mod oneway;
pub mod posthoc;
pub mod ttest;
pub mod types;

pub use oneway::{one_way_anova, AnovaEngine};
pub use posthoc::{all_exact, bonferroni, tukey_hsd, PostHoc, StudentizedRange};
pub use ttest::{ttest_independent, welch_df, welch_t_test, TTestResult};
pub use types::{AnovaResult, BonferroniReport, GroupStats, PairwiseComparison};

pub use perfstat_core::{Error, Result};
