//! Robust per-sample summaries
//!
//! [`describe`] reports location by the median, spread by IQR and MAD, the
//! conventional percentile ladder and a tail-heaviness ratio, plus the
//! coefficient of variation and a bimodality gap flag. Nothing here
//! assumes normality. Every call recomputes from a fresh sorted copy.

use crate::mad::Mad;
use crate::shape::{coefficient_of_variation, is_bimodal_sorted};
use crate::traits::SpreadEstimator;
use perfstat_core::{utils::sorted, Error, Result};
use perfstat_quantile::{quantile_sorted, Type7};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum sample size for which p99.9 is reported from its own order statistics
pub const P99_9_MIN_SAMPLES: usize = 1000;

/// Percentile ladder commonly reported for latency distributions
///
/// `p99_9` needs at least [`P99_9_MIN_SAMPLES`] observations to sit above
/// p99 in any meaningful way. Below that it degrades to the p99 value and
/// `p99_9_degraded` is set, rather than extrapolating from the top two order
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantileLadder {
    pub p1: f64,
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub p99_9: f64,
    pub p99_9_degraded: bool,
}

impl QuantileLadder {
    /// Levels in ladder order
    pub const LEVELS: [f64; 10] = [0.01, 0.05, 0.10, 0.25, 0.50, 0.75, 0.90, 0.95, 0.99, 0.999];

    /// Report labels in ladder order
    pub const LABELS: [&'static str; 10] = [
        "p1", "p5", "p10", "p25", "p50", "p75", "p90", "p95", "p99", "p99.9",
    ];

    /// Build the ladder from already sorted data
    pub fn from_sorted(sorted_data: &[f64]) -> Result<Self> {
        let q = |p: f64| quantile_sorted(sorted_data, p);
        let p99 = q(0.99)?;
        let degraded = sorted_data.len() < P99_9_MIN_SAMPLES;
        let p99_9 = if degraded { p99 } else { q(0.999)? };
        Ok(Self {
            p1: q(0.01)?,
            p5: q(0.05)?,
            p10: q(0.10)?,
            p25: q(0.25)?,
            p50: q(0.50)?,
            p75: q(0.75)?,
            p90: q(0.90)?,
            p95: q(0.95)?,
            p99,
            p99_9,
            p99_9_degraded: degraded,
        })
    }

    /// `(label, value)` pairs in ladder order
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        let values = [
            self.p1, self.p5, self.p10, self.p25, self.p50, self.p75, self.p90, self.p95,
            self.p99, self.p99_9,
        ];
        let mut out = [("", 0.0); 10];
        for (slot, (label, value)) in out.iter_mut().zip(Self::LABELS.iter().zip(values)) {
            *slot = (*label, value);
        }
        out
    }
}

/// Coarse classification of the p99/p50 ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TailClass {
    /// Ratio below 1.5: consistent performance
    Light,
    /// Ratio in [1.5, 3.0]
    Moderate,
    /// Ratio above 3.0: a tail-latency problem
    Heavy,
}

impl TailClass {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 1.5 {
            Self::Light
        } else if ratio <= 3.0 {
            Self::Moderate
        } else {
            Self::Heavy
        }
    }
}

impl fmt::Display for TailClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Heavy => write!(f, "heavy"),
        }
    }
}

/// Robust description of one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobustSummary {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub median: f64,
    pub iqr: f64,
    pub mad: f64,
    pub ladder: QuantileLadder,
    /// p99 / p50, or `+inf` when the median is exactly zero
    pub tail_ratio: f64,
    /// Coefficient of variation in percent
    pub cv: f64,
    pub bimodal: bool,
}

impl RobustSummary {
    pub fn tail_class(&self) -> TailClass {
        TailClass::from_ratio(self.tail_ratio)
    }

    /// Flatten into `statistic name -> value`
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::new();
        map.insert("n".to_string(), self.n as f64);
        map.insert("min".to_string(), self.min);
        map.insert("max".to_string(), self.max);
        map.insert("range".to_string(), self.range);
        map.insert("median".to_string(), self.median);
        map.insert("iqr".to_string(), self.iqr);
        map.insert("mad".to_string(), self.mad);
        for (label, value) in self.ladder.entries() {
            map.insert(label.to_string(), value);
        }
        map.insert("tail_ratio".to_string(), self.tail_ratio);
        map.insert("cv".to_string(), self.cv);
        map.insert("bimodal".to_string(), if self.bimodal { 1.0 } else { 0.0 });
        map
    }
}

/// Tail-heaviness ratio from already sorted data
pub fn tail_ratio_sorted(sorted_data: &[f64]) -> Result<f64> {
    let p50 = quantile_sorted(sorted_data, 0.50)?;
    let p99 = quantile_sorted(sorted_data, 0.99)?;
    if p50 == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(p99 / p50)
}

/// Tail-heaviness ratio `p99 / p50`
///
/// Roughly 1.0–1.5 means light tails, 1.5–3.0 is typical and anything above
/// 3.0 points at a tail-latency problem. A zero median yields `+inf`.
pub fn tail_ratio(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("tail ratio"));
    }
    tail_ratio_sorted(&sorted(data))
}

/// Robust summary of a sample
///
/// # Examples
///
/// ```rust
/// use perfstat_spread::describe;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let summary = describe(&data).unwrap();
/// assert_eq!(summary.median, 5.5);
/// assert!(summary.tail_ratio > 2.0);
/// assert!(summary.ladder.p99_9_degraded);
/// ```
pub fn describe(data: &[f64]) -> Result<RobustSummary> {
    if data.is_empty() {
        return Err(Error::empty_input("describe"));
    }
    let sorted_data = sorted(data);
    let n = sorted_data.len();
    let min = sorted_data[0];
    let max = sorted_data[n - 1];

    let ladder = QuantileLadder::from_sorted(&sorted_data)?;
    let iqr = ladder.p75 - ladder.p25;
    let mad = Mad.estimate_sorted(&sorted_data, &Type7)?;
    let tail_ratio = if ladder.p50 == 0.0 {
        f64::INFINITY
    } else {
        ladder.p99 / ladder.p50
    };

    Ok(RobustSummary {
        n,
        min,
        max,
        range: max - min,
        median: ladder.p50,
        iqr,
        mad,
        ladder,
        tail_ratio,
        cv: coefficient_of_variation(&sorted_data),
        bimodal: is_bimodal_sorted(&sorted_data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn heavy_tail_sample() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
    }

    #[test]
    fn test_describe_heavy_tail() {
        let summary = describe(&heavy_tail_sample()).unwrap();
        assert_eq!(summary.n, 10);
        assert!((4.0..=6.0).contains(&summary.median));
        assert!(summary.tail_ratio > 2.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.range, 99.0);
        assert_relative_eq!(summary.mad, 2.5);
        assert_eq!(summary.tail_class(), TailClass::Heavy);
        assert!(summary.bimodal);
        assert!(summary.cv > 100.0);
    }

    #[test]
    fn test_shape_fields() {
        let data: Vec<f64> = (1..=20).map(f64::from).collect();
        let summary = describe(&data).unwrap();
        assert!(!summary.bimodal);
        assert_relative_eq!(summary.cv, coefficient_of_variation(&data));
        assert_eq!(describe(&[3.0]).unwrap().cv, 0.0);
    }

    #[test]
    fn test_ladder_degrades_below_threshold() {
        let data: Vec<f64> = (1..=999).map(f64::from).collect();
        let ladder = describe(&data).unwrap().ladder;
        assert!(ladder.p99_9_degraded);
        assert_eq!(ladder.p99_9, ladder.p99);
    }

    #[test]
    fn test_ladder_full_at_threshold() {
        let data: Vec<f64> = (1..=1000).map(f64::from).collect();
        let ladder = describe(&data).unwrap().ladder;
        assert!(!ladder.p99_9_degraded);
        assert!(ladder.p99_9 > ladder.p99);
        assert_relative_eq!(ladder.p99_9, 999.001, epsilon = 1e-9);
    }

    #[test]
    fn test_ladder_monotone() {
        let data: Vec<f64> = (0..250).map(|i| ((i * 37) % 101) as f64).collect();
        let ladder = describe(&data).unwrap().ladder;
        let values: Vec<f64> = ladder.entries().iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_median_tail_ratio() {
        let data = [-1.0, 0.0, 0.0, 0.0, 5.0];
        assert!(tail_ratio(&data).unwrap().is_infinite());
        assert!(describe(&data).unwrap().tail_ratio.is_infinite());
    }

    #[test]
    fn test_to_map_keys() {
        let map = describe(&heavy_tail_sample()).unwrap().to_map();
        for key in [
            "n", "min", "max", "range", "median", "iqr", "mad", "p1", "p99.9", "tail_ratio", "cv",
            "bimodal",
        ] {
            assert!(map.contains_key(key), "missing {key}");
        }
        assert_eq!(map.len(), 20);
        assert_eq!(map["bimodal"], 1.0);
    }

    #[test]
    fn test_describe_empty() {
        assert!(describe(&[]).is_err());
        assert!(tail_ratio(&[]).is_err());
    }

    #[test]
    fn test_tail_class_boundaries() {
        assert_eq!(TailClass::from_ratio(1.2), TailClass::Light);
        assert_eq!(TailClass::from_ratio(1.5), TailClass::Moderate);
        assert_eq!(TailClass::from_ratio(3.0), TailClass::Moderate);
        assert_eq!(TailClass::from_ratio(3.1), TailClass::Heavy);
        assert_eq!(TailClass::from_ratio(f64::INFINITY), TailClass::Heavy);
    }
}
