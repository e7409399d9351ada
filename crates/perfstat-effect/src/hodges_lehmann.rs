//! Hodges-Lehmann two-sample shift estimator
//!
//! The estimate is the median of every pairwise difference `a_i - b_j`. It
//! materializes all `|a|·|b|` differences, so both time and memory are
//! `O(|a|·|b|)`. Past [`HODGES_LEHMANN_WARN_PAIRS`] a warning is emitted
//! through `tracing`; the computation still runs.

use perfstat_core::utils::sort_in_place;
use perfstat_quantile::median_sorted;
use tracing::warn;

/// Pair count above which the quadratic cost is reported
pub const HODGES_LEHMANN_WARN_PAIRS: usize = 10_000_000;

/// Median of all pairwise differences `a_i - b_j`
///
/// Positive values mean `a` is shifted above `b`. Returns `0.0` when either
/// sample is empty.
///
/// # Examples
///
/// ```rust
/// use perfstat_effect::hodges_lehmann;
///
/// let a: Vec<f64> = (10..20).map(f64::from).collect();
/// let b: Vec<f64> = (8..18).map(f64::from).collect();
/// assert_eq!(hodges_lehmann(&a, &b), 2.0);
/// ```
pub fn hodges_lehmann(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let pairs = a.len().saturating_mul(b.len());
    if pairs > HODGES_LEHMANN_WARN_PAIRS {
        warn!(
            n_a = a.len(),
            n_b = b.len(),
            pairs,
            "Hodges-Lehmann materializes every pairwise difference"
        );
    }

    let mut differences = Vec::with_capacity(pairs);
    for &x in a {
        differences.extend(b.iter().map(|&y| x - y));
    }
    sort_in_place(&mut differences);
    median_sorted(&differences).unwrap_or(0.0)
}
