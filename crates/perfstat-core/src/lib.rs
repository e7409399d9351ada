//! Core types for the perfstat inference engine
//!
//! This crate holds what every other perfstat crate shares:
//!
//! - [`Error`] and [`Result`], the unified error type
//! - [`NumericBackend`], the pluggable strategy that evaluates distribution
//!   functions either exactly (via `statrs`) or through documented coarse
//!   fallbacks, plus the [`Precision`] tag attached to every value it returns
//! - [`utils`], read-only slice helpers (sorted copies, mean, variance)
//!
//! # Example
//!
//! ```rust
//! use perfstat_core::{NumericBackend, Precision};
//!
//! let z = NumericBackend::Exact.normal_quantile(0.975).unwrap();
//! assert_eq!(z.precision, Precision::Exact);
//! assert!((z.value - 1.96).abs() < 1e-3);
//!
//! let z = NumericBackend::Approximate.normal_quantile(0.975).unwrap();
//! assert_eq!(z.precision, Precision::Approximate);
//! ```

pub mod backend;
pub mod error;
pub mod math;
pub mod utils;

pub use backend::{NumericBackend, Precision, Tagged};
pub use error::{Error, Result};

/// Default significance level for hypothesis tests
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Check that `p` lies in `[0, 1]`
pub fn check_quantile_level(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    Ok(())
}

/// Check that a probability parameter lies strictly inside `(0, 1)`
pub fn check_open_probability(name: &str, p: f64) -> Result<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid_probability(name, p));
    }
    Ok(())
}
