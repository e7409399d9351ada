//! One-way analysis of variance
//!
//! F = MS_between / MS_within with MS_between = SS_between / (k - 1) and
//! MS_within = SS_within / (N - k). Empty groups are dropped before
//! counting `k`; the p-value comes from the engine's [`NumericBackend`].

use crate::types::{AnovaResult, GroupStats};
use perfstat_core::utils::{mean, sum_of_squares};
use perfstat_core::{Error, NumericBackend, Precision, Result};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Validate and order named groups
///
/// Rejects duplicate names, drops empty groups and sorts by name.
fn collect_groups<I, S, V>(groups: I) -> Result<Vec<(String, V)>>
where
    I: IntoIterator<Item = (S, V)>,
    S: Into<String>,
    V: AsRef<[f64]>,
{
    let mut seen = BTreeSet::new();
    let mut named = Vec::new();
    for (name, data) in groups {
        let name = name.into();
        if !seen.insert(name.clone()) {
            return Err(Error::InvalidInput(format!("duplicate group name '{name}'")));
        }
        if !data.as_ref().is_empty() {
            named.push((name, data));
        }
    }
    named.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(named)
}

/// One-way ANOVA driver bound to a numeric backend
#[derive(Debug, Clone, Copy, Default)]
pub struct AnovaEngine {
    backend: NumericBackend,
}

impl AnovaEngine {
    pub fn new(backend: NumericBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> NumericBackend {
        self.backend
    }

    /// Run a one-way ANOVA over named groups
    ///
    /// Accepts a `BTreeMap<String, Vec<f64>>` (by value or reference) or any
    /// iterator of `(name, sample)` pairs.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for a repeated group name
    /// - [`Error::TooFewGroups`] with fewer than two non-empty groups
    /// - [`Error::InsufficientDegreesOfFreedom`] when `N - k` is zero
    #[instrument(skip(self, groups), fields(backend = %self.backend))]
    pub fn one_way<I, S, V>(&self, groups: I) -> Result<AnovaResult>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: AsRef<[f64]>,
    {
        let groups = collect_groups(groups)?;
        let k = groups.len();
        if k < 2 {
            return Err(Error::TooFewGroups { actual: k });
        }

        let n_total: usize = groups.iter().map(|(_, g)| g.as_ref().len()).sum();
        if n_total <= k {
            return Err(Error::InsufficientDegreesOfFreedom {
                n_total,
                n_groups: k,
            });
        }

        let grand_sum: f64 = groups.iter().flat_map(|(_, g)| g.as_ref().iter()).sum();
        let grand_mean = grand_sum / n_total as f64;

        let mut ss_between = 0.0;
        let mut ss_within = 0.0;
        let mut stats = Vec::with_capacity(k);
        for (name, data) in &groups {
            let data = data.as_ref();
            let group_mean = mean(data);
            ss_between += data.len() as f64 * (group_mean - grand_mean).powi(2);
            ss_within += sum_of_squares(data);
            stats.push(GroupStats::from_sample(name.as_str(), data));
        }

        let df_between = k - 1;
        let df_within = n_total - k;
        let ms_between = ss_between / df_between as f64;
        let ms_within = ss_within / df_within as f64;
        let ss_total = ss_between + ss_within;

        let (f_statistic, p_value, precision) = if ms_within == 0.0 {
            if ms_between == 0.0 {
                (0.0, 1.0, Precision::Exact)
            } else {
                (f64::INFINITY, 0.0, Precision::Exact)
            }
        } else {
            let f = ms_between / ms_within;
            let p = self
                .backend
                .f_upper_tail(f, df_between as f64, df_within as f64)?;
            (f, p.value, p.precision)
        };

        let eta_squared = if ss_total > 0.0 {
            ss_between / ss_total
        } else {
            0.0
        };
        let omega_squared =
            ((ss_between - df_between as f64 * ms_within) / (ss_total + ms_within)).max(0.0);

        debug!(
            f = f_statistic,
            p = p_value,
            df_between,
            df_within,
            eta_squared,
            "one-way ANOVA computed"
        );

        Ok(AnovaResult {
            f_statistic,
            p_value,
            df_between,
            df_within,
            ss_between,
            ss_within,
            ss_total,
            ms_between,
            ms_within,
            eta_squared,
            omega_squared,
            grand_mean,
            n_total,
            n_groups: k,
            groups: stats,
            precision,
        })
    }
}

/// [`AnovaEngine::one_way`] with the exact backend
///
/// # Examples
///
/// ```rust
/// use perfstat_anova::one_way_anova;
/// use std::collections::BTreeMap;
///
/// let mut groups = BTreeMap::new();
/// groups.insert("a".to_string(), vec![5.0, 6.0, 7.0, 5.5, 6.5]);
/// groups.insert("b".to_string(), vec![8.0, 9.0, 8.5, 9.5, 8.0]);
/// groups.insert("c".to_string(), vec![4.0, 3.0, 3.5, 4.5, 4.0]);
/// let r = one_way_anova(&groups).unwrap();
/// assert!(r.p_value < 0.01);
/// ```
pub fn one_way_anova<I, S, V>(groups: I) -> Result<AnovaResult>
where
    I: IntoIterator<Item = (S, V)>,
    S: Into<String>,
    V: AsRef<[f64]>,
{
    AnovaEngine::new(NumericBackend::Exact).one_way(groups)
}
