//! Normal-approximation power analysis for a two-sided two-sample t test
//!
//! With `z_a = z(1 - alpha/2)` and `z_b = z(power)`:
//!
//! - required n per group: `ceil(2 · ((z_a + z_b) / d)²)`
//! - minimum detectable effect: `(z_a + z_b) · sqrt(2 / n)`
//! - achieved power: `Φ(d · sqrt(n / 2) - z_a)`
//!
//! The three are inverses of one another up to the rounding of `n`.

use perfstat_core::utils::{mean, std_dev};
use perfstat_core::{check_open_probability, Error, NumericBackend, Result, Tagged};
use perfstat_effect::{cohens_d, interpret_cohens_d, EffectSizeInterpretation};
use serde::Serialize;
use tracing::debug;

/// Smallest per-group sample size the calculator accepts
pub const MIN_POWER_SAMPLES: usize = 3;

/// Conventional target power
pub const DEFAULT_POWER: f64 = 0.8;

fn check_effect_size(d: f64) -> Result<()> {
    if !d.is_finite() || d <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "effect size {d} must be finite and positive"
        )));
    }
    Ok(())
}

fn check_sample_size(n: usize) -> Result<()> {
    if n < MIN_POWER_SAMPLES {
        return Err(Error::InsufficientData {
            expected: MIN_POWER_SAMPLES,
            actual: n,
        });
    }
    Ok(())
}

/// Power calculator bound to a numeric backend
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerCalculator {
    backend: NumericBackend,
}

impl PowerCalculator {
    pub fn new(backend: NumericBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> NumericBackend {
        self.backend
    }

    /// `z(1 - alpha/2) + z(power)`
    fn z_sum(&self, power: f64, alpha: f64) -> Result<Tagged<f64>> {
        check_open_probability("power", power)?;
        check_open_probability("alpha", alpha)?;
        let z_alpha = self.backend.normal_quantile(1.0 - alpha / 2.0)?;
        let z_beta = self.backend.normal_quantile(power)?;
        Ok(Tagged {
            value: z_alpha.value + z_beta.value,
            precision: z_alpha.precision.combine(z_beta.precision),
        })
    }

    /// Per-group sample size needed to detect effect `d`
    pub fn required_n(&self, d: f64, power: f64, alpha: f64) -> Result<Tagged<usize>> {
        check_effect_size(d)?;
        let z = self.z_sum(power, alpha)?;
        let n = (2.0 * (z.value / d).powi(2)).ceil();
        debug!(d, power, alpha, n, "required sample size");
        Ok(z.map(|_| n as usize))
    }

    /// Smallest effect detectable with `n` per group
    pub fn min_detectable_effect(&self, n: usize, power: f64, alpha: f64) -> Result<Tagged<f64>> {
        check_sample_size(n)?;
        let z = self.z_sum(power, alpha)?;
        Ok(z.map(|z| z * (2.0 / n as f64).sqrt()))
    }

    /// Power to detect effect `d` with `n` per group
    pub fn achieved_power(&self, n: usize, d: f64, alpha: f64) -> Result<Tagged<f64>> {
        check_sample_size(n)?;
        check_effect_size(d)?;
        check_open_probability("alpha", alpha)?;
        let z_alpha = self.backend.normal_quantile(1.0 - alpha / 2.0)?;
        let power = self
            .backend
            .normal_cdf(d * (n as f64 / 2.0).sqrt() - z_alpha.value)?;
        Ok(Tagged {
            value: power.value.clamp(0.0, 1.0),
            precision: power.precision.combine(z_alpha.precision),
        })
    }
}

/// [`PowerCalculator::required_n`] with the exact backend
///
/// # Examples
///
/// ```rust
/// use perfstat_power::required_n;
///
/// // medium effect, 80% power, 5% two-sided
/// assert_eq!(required_n(0.5, 0.8, 0.05).unwrap(), 63);
/// ```
pub fn required_n(d: f64, power: f64, alpha: f64) -> Result<usize> {
    PowerCalculator::new(NumericBackend::Exact)
        .required_n(d, power, alpha)
        .map(|t| t.value)
}

/// [`PowerCalculator::min_detectable_effect`] with the exact backend
pub fn min_detectable_effect(n: usize, power: f64, alpha: f64) -> Result<f64> {
    PowerCalculator::new(NumericBackend::Exact)
        .min_detectable_effect(n, power, alpha)
        .map(|t| t.value)
}

/// [`PowerCalculator::achieved_power`] with the exact backend
pub fn achieved_power(n: usize, d: f64, alpha: f64) -> Result<f64> {
    PowerCalculator::new(NumericBackend::Exact)
        .achieved_power(n, d, alpha)
        .map(|t| t.value)
}

/// Size, mean and standard deviation of one pilot group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PilotGroup {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
}

impl PilotGroup {
    fn of(data: &[f64]) -> Result<Self> {
        Ok(Self {
            n: data.len(),
            mean: mean(data),
            std: std_dev(data)?,
        })
    }
}

/// Effect size observed in pilot data, for planning a full experiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PilotEstimate {
    /// `|d|`
    pub effect_size: f64,
    pub interpretation: EffectSizeInterpretation,
    pub group1: PilotGroup,
    pub group2: PilotGroup,
}

/// Estimate `|d|` from two pilot samples of at least two values each
pub fn estimate_effect_from_pilot(a: &[f64], b: &[f64]) -> Result<PilotEstimate> {
    let effect_size = cohens_d(a, b)?.abs();
    Ok(PilotEstimate {
        effect_size,
        interpretation: interpret_cohens_d(effect_size),
        group1: PilotGroup::of(a)?,
        group2: PilotGroup::of(b)?,
    })
}
