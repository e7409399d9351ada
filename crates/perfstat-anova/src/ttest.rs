//! Two-sample t tests
//!
//! Both tests use the unpooled standard error `sqrt(s1²/n1 + s2²/n2)`.
//! [`ttest_independent`] pairs it with `n1 + n2 - 2` degrees of freedom;
//! [`welch_t_test`] uses the Welch–Satterthwaite approximation instead.

use perfstat_core::utils::{mean, variance};
use perfstat_core::{NumericBackend, Precision, Result, Tagged, DEFAULT_ALPHA};
use perfstat_effect::cohens_d_from_stats;
use serde::Serialize;

/// Outcome of a two-sample t test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    /// `(mean_baseline - mean_treatment) / se`
    pub t_statistic: f64,
    pub p_value: f64,
    pub df: f64,
    pub baseline_mean: f64,
    pub treatment_mean: f64,
    /// `mean_baseline - mean_treatment`
    pub difference: f64,
    /// `(mean_treatment - mean_baseline) / mean_baseline * 100`, 0 for a zero baseline
    pub percent_change: f64,
    /// Cohen's d of baseline against treatment
    pub effect_size: f64,
    /// `p_value < 0.05`
    pub significant: bool,
    pub precision: Precision,
}

struct Moments {
    n: usize,
    mean: f64,
    variance: f64,
}

impl Moments {
    fn of(data: &[f64]) -> Result<Self> {
        Ok(Self {
            n: data.len(),
            mean: mean(data),
            variance: variance(data)?,
        })
    }

    fn se_term(&self) -> f64 {
        self.variance / self.n as f64
    }
}

/// Welch–Satterthwaite degrees of freedom
///
/// Falls back to `n1 + n2 - 2` when both samples are constant.
pub fn welch_df(a: &[f64], b: &[f64]) -> Result<f64> {
    let a = Moments::of(a)?;
    let b = Moments::of(b)?;
    Ok(satterthwaite(&a, &b))
}

fn satterthwaite(a: &Moments, b: &Moments) -> f64 {
    let (va, vb) = (a.se_term(), b.se_term());
    let denominator = va * va / (a.n - 1) as f64 + vb * vb / (b.n - 1) as f64;
    if denominator == 0.0 {
        return (a.n + b.n - 2) as f64;
    }
    (va + vb).powi(2) / denominator
}

fn run(
    baseline: &[f64],
    treatment: &[f64],
    backend: NumericBackend,
    welch: bool,
) -> Result<TTestResult> {
    let b = Moments::of(baseline)?;
    let t = Moments::of(treatment)?;

    let se = (b.se_term() + t.se_term()).sqrt();
    let difference = b.mean - t.mean;
    let df = if welch {
        satterthwaite(&b, &t)
    } else {
        (b.n + t.n - 2) as f64
    };

    let (t_statistic, p) = if se == 0.0 {
        if difference == 0.0 {
            (0.0, Tagged::exact(1.0))
        } else {
            (difference.signum() * f64::INFINITY, Tagged::exact(0.0))
        }
    } else {
        let stat = difference / se;
        (stat, backend.t_two_sided_p(stat, df)?)
    };

    let percent_change = if b.mean == 0.0 {
        0.0
    } else {
        (t.mean - b.mean) / b.mean * 100.0
    };

    Ok(TTestResult {
        t_statistic,
        p_value: p.value,
        df,
        baseline_mean: b.mean,
        treatment_mean: t.mean,
        difference,
        percent_change,
        effect_size: cohens_d_from_stats(
            b.mean,
            t.mean,
            b.variance.sqrt(),
            t.variance.sqrt(),
            b.n,
            t.n,
        ),
        significant: p.value < DEFAULT_ALPHA,
        precision: p.precision,
    })
}

/// Independent two-sample t test with `n1 + n2 - 2` degrees of freedom
///
/// Each sample needs at least two observations.
///
/// # Examples
///
/// ```rust
/// use perfstat_anova::ttest_independent;
/// use perfstat_core::NumericBackend;
///
/// let baseline = [10.0, 11.0, 10.5, 9.5, 10.2];
/// let treatment = [12.0, 12.5, 11.8, 12.2, 12.9];
/// let r = ttest_independent(&baseline, &treatment, NumericBackend::Exact).unwrap();
/// assert!(r.significant);
/// assert!(r.percent_change > 15.0);
/// ```
pub fn ttest_independent(
    baseline: &[f64],
    treatment: &[f64],
    backend: NumericBackend,
) -> Result<TTestResult> {
    run(baseline, treatment, backend, false)
}

/// Welch's t test with Welch–Satterthwaite degrees of freedom
pub fn welch_t_test(
    baseline: &[f64],
    treatment: &[f64],
    backend: NumericBackend,
) -> Result<TTestResult> {
    run(baseline, treatment, backend, true)
}
