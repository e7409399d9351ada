//! Pluggable numeric backends
//!
//! Every p-value and z-value in perfstat is produced by a [`NumericBackend`]
//! that the caller picks when constructing an engine. The backend returns
//! [`Tagged`] values so that results always carry the [`Precision`] of the
//! path that produced them; a coarse bucket is never reported as exact.

use crate::math::distributions::{coarse, normal, studentized_range};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};
use std::fmt;
use tracing::trace;

/// Which evaluation path produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Special-function evaluation or a closed form that needs none
    Exact,
    /// Documented coarse fallback
    Approximate,
}

impl Precision {
    /// The less precise of two tags
    pub fn combine(self, other: Precision) -> Precision {
        match (self, other) {
            (Precision::Exact, Precision::Exact) => Precision::Exact,
            _ => Precision::Approximate,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Precision::Exact)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Exact => write!(f, "exact"),
            Precision::Approximate => write!(f, "approximate"),
        }
    }
}

/// A value together with the precision of the path that computed it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tagged<T> {
    pub value: T,
    pub precision: Precision,
}

impl<T> Tagged<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            precision: Precision::Exact,
        }
    }

    pub fn approximate(value: T) -> Self {
        Self {
            value,
            precision: Precision::Approximate,
        }
    }

    /// Transform the value, keeping the tag
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Tagged<U> {
        Tagged {
            value: f(self.value),
            precision: self.precision,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.precision.is_exact()
    }
}

/// Strategy for evaluating distribution functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericBackend {
    /// Special functions from `statrs` plus a numerically integrated
    /// studentized range CDF
    #[default]
    Exact,
    /// Coarse tables and bucketed p-values
    Approximate,
}

impl NumericBackend {
    /// Precision tag attached to values from this backend
    pub fn precision(&self) -> Precision {
        match self {
            NumericBackend::Exact => Precision::Exact,
            NumericBackend::Approximate => Precision::Approximate,
        }
    }

    /// Standard normal CDF
    pub fn normal_cdf(&self, x: f64) -> Result<Tagged<f64>> {
        match self {
            NumericBackend::Exact => Ok(Tagged::exact(standard_normal()?.cdf(x))),
            NumericBackend::Approximate => Ok(Tagged::approximate(normal::cdf(x))),
        }
    }

    /// Standard normal quantile function
    pub fn normal_quantile(&self, p: f64) -> Result<Tagged<f64>> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability("probability", p));
        }
        match self {
            NumericBackend::Exact => Ok(Tagged::exact(standard_normal()?.inverse_cdf(p))),
            NumericBackend::Approximate => Ok(Tagged::approximate(normal::ppf_table(p))),
        }
    }

    /// Two-sided p-value of a t statistic with `df` degrees of freedom
    pub fn t_two_sided_p(&self, t: f64, df: f64) -> Result<Tagged<f64>> {
        if t.is_infinite() {
            return Ok(Tagged::exact(0.0));
        }
        match self {
            NumericBackend::Exact => {
                let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
                    Error::Computation(format!("Failed to create t distribution: {e}"))
                })?;
                let p = 2.0 * (1.0 - dist.cdf(t.abs()));
                Ok(Tagged::exact(p.clamp(0.0, 1.0)))
            }
            NumericBackend::Approximate => Ok(Tagged::approximate(coarse::t_two_sided(t))),
        }
    }

    /// Upper-tail probability of an F statistic
    pub fn f_upper_tail(&self, f: f64, df1: f64, df2: f64) -> Result<Tagged<f64>> {
        if f.is_infinite() && f > 0.0 {
            return Ok(Tagged::exact(0.0));
        }
        match self {
            NumericBackend::Exact => {
                let dist = FisherSnedecor::new(df1, df2).map_err(|e| {
                    Error::Computation(format!("Failed to create F distribution: {e}"))
                })?;
                Ok(Tagged::exact((1.0 - dist.cdf(f.max(0.0))).clamp(0.0, 1.0)))
            }
            NumericBackend::Approximate => Ok(Tagged::approximate(coarse::f_upper_tail(f))),
        }
    }

    /// Upper-tail probability of a studentized range statistic
    pub fn studentized_range_upper_tail(&self, q: f64, k: usize, df: f64) -> Result<Tagged<f64>> {
        if q.is_infinite() && q > 0.0 {
            return Ok(Tagged::exact(0.0));
        }
        match self {
            NumericBackend::Exact => {
                let p = studentized_range::sf(q, k, df);
                if p.is_nan() {
                    return Err(Error::Computation(format!(
                        "studentized range undefined for q={q}, k={k}, df={df}"
                    )));
                }
                Ok(Tagged::exact(p))
            }
            NumericBackend::Approximate => {
                let p = coarse::studentized_range_upper_tail(q);
                trace!(q, k, df, p, "coarse studentized range bucket");
                Ok(Tagged::approximate(p))
            }
        }
    }
}

impl fmt::Display for NumericBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.precision())
    }
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exact_normal() {
        let backend = NumericBackend::Exact;
        let z = backend.normal_quantile(0.975).unwrap();
        assert!(z.is_exact());
        assert_abs_diff_eq!(z.value, 1.959964, epsilon = 1e-5);
        assert_abs_diff_eq!(backend.normal_cdf(z.value).unwrap().value, 0.975, epsilon = 1e-9);
    }

    #[test]
    fn test_approximate_values_are_tagged() {
        let backend = NumericBackend::Approximate;
        assert_eq!(backend.normal_quantile(0.975).unwrap(), Tagged::approximate(1.96));
        assert!(!backend.normal_cdf(0.3).unwrap().is_exact());
        assert!(!backend.t_two_sided_p(2.2, 10.0).unwrap().is_exact());
        assert!(!backend.f_upper_tail(2.5, 2.0, 20.0).unwrap().is_exact());
        assert!(!backend
            .studentized_range_upper_tail(3.1, 3, 12.0)
            .unwrap()
            .is_exact());
    }

    #[test]
    fn test_exact_t_and_f() {
        let backend = NumericBackend::Exact;
        // t(10) two-sided 5% critical value
        let p = backend.t_two_sided_p(2.228, 10.0).unwrap();
        assert_abs_diff_eq!(p.value, 0.05, epsilon = 1e-3);
        // F(2, 12) upper 5% critical value
        let p = backend.f_upper_tail(3.885, 2.0, 12.0).unwrap();
        assert_abs_diff_eq!(p.value, 0.05, epsilon = 1e-3);
    }

    #[test]
    fn test_infinite_statistics_short_circuit() {
        for backend in [NumericBackend::Exact, NumericBackend::Approximate] {
            assert_eq!(backend.f_upper_tail(f64::INFINITY, 1.0, 4.0).unwrap().value, 0.0);
            assert_eq!(backend.t_two_sided_p(f64::NEG_INFINITY, 4.0).unwrap().value, 0.0);
            assert_eq!(
                backend
                    .studentized_range_upper_tail(f64::INFINITY, 3, 4.0)
                    .unwrap()
                    .value,
                0.0
            );
        }
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let backend = NumericBackend::Exact;
        assert!(backend.normal_quantile(0.0).is_err());
        assert!(backend.normal_quantile(1.0).is_err());
        assert!(backend.normal_quantile(f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_degrees_of_freedom() {
        let backend = NumericBackend::Exact;
        assert!(backend.f_upper_tail(1.0, 0.0, 5.0).is_err());
        assert!(backend.t_two_sided_p(1.0, -1.0).is_err());
    }

    #[test]
    fn test_precision_combine() {
        assert_eq!(Precision::Exact.combine(Precision::Exact), Precision::Exact);
        assert_eq!(Precision::Exact.combine(Precision::Approximate), Precision::Approximate);
        assert_eq!(Precision::Approximate.to_string(), "approximate");
    }

    #[test]
    fn test_backend_serde() {
        let json = serde_json::to_string(&NumericBackend::Approximate).unwrap();
        assert_eq!(json, "\"approximate\"");
        let back: NumericBackend = serde_json::from_str("\"exact\"").unwrap();
        assert_eq!(back, NumericBackend::Exact);
    }
}
