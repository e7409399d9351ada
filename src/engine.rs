//! Configured entry point over the component crates

use crate::config::EngineConfig;
use perfstat_anova::{
    AnovaEngine, AnovaResult, BonferroniReport, PairwiseComparison, PostHoc, TTestResult,
};
use perfstat_confidence::{
    bootstrap_ci_quantile, quantile_cis, quantile_difference_ci, BootstrapResult, QuantileCi,
};
use perfstat_core::{Result, Tagged};
use perfstat_effect::{
    hodges_lehmann, probability_of_improvement, quantile_comparison, ComparisonConfig,
    ImprovementProbability, QuantileComparison,
};
use perfstat_power::PowerCalculator;
use perfstat_spread::{describe, tukey_fences, Fences, RobustSummary};
use tracing::debug;

/// Stateless facade applying one [`EngineConfig`] to every operation
///
/// Holds no mutable state; calls with the same inputs return the same
/// results, and an `Engine` can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use perfstat::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig::default().with_resamples(1000)).unwrap();
/// let baseline = vec![10.0, 10.4, 10.1, 10.3, 10.2, 10.6, 10.5, 10.2];
/// let treatment = vec![11.0, 11.4, 11.1, 11.3, 11.2, 11.6, 11.5, 11.2];
/// let report = engine.compare(&baseline, &treatment).unwrap();
/// assert!(report.get("p50").unwrap().significant);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    anova: AnovaEngine,
    posthoc: PostHoc,
    power: PowerCalculator,
}

impl Engine {
    /// Build an engine, validating the configuration first
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        debug!(backend = %config.backend, n_resamples = config.n_resamples, seed = config.seed, "engine configured");
        Ok(Self {
            anova: AnovaEngine::new(config.backend),
            posthoc: PostHoc::new(config.backend).with_studentized_range(config.studentized_range),
            power: PowerCalculator::new(config.backend),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn comparison_config(&self) -> ComparisonConfig {
        ComparisonConfig {
            confidence: self.config.confidence,
            n_resamples: self.config.n_resamples,
            seed: self.config.seed,
        }
    }

    pub fn describe(&self, sample: &[f64]) -> Result<RobustSummary> {
        describe(sample)
    }

    /// Tukey fences with the configured multiplier
    pub fn fences(&self, sample: &[f64]) -> Result<Fences> {
        tukey_fences(sample, self.config.fence_k)
    }

    pub fn bootstrap_quantile(&self, sample: &[f64], q: f64) -> Result<BootstrapResult> {
        bootstrap_ci_quantile(
            sample,
            q,
            self.config.confidence,
            self.config.n_resamples,
            self.config.seed,
        )
    }

    /// CI table over the configured quantiles
    pub fn quantile_cis(&self, sample: &[f64]) -> Result<Vec<QuantileCi>> {
        quantile_cis(
            sample,
            &self.config.quantiles,
            self.config.confidence,
            self.config.n_resamples,
            self.config.seed,
        )
    }

    /// CI for `quantile(a, q) - quantile(b, q)`
    pub fn quantile_difference(&self, a: &[f64], b: &[f64], q: f64) -> Result<BootstrapResult> {
        quantile_difference_ci(
            a,
            b,
            q,
            self.config.confidence,
            self.config.n_resamples,
            self.config.seed,
        )
    }

    pub fn hodges_lehmann(&self, a: &[f64], b: &[f64]) -> f64 {
        hodges_lehmann(a, b)
    }

    /// Quantile comparison over the configured quantiles
    pub fn compare(&self, baseline: &[f64], treatment: &[f64]) -> Result<QuantileComparison> {
        quantile_comparison(
            baseline,
            treatment,
            &self.config.quantiles,
            &self.comparison_config(),
        )
    }

    pub fn probability_of_improvement(
        &self,
        baseline: &[f64],
        treatment: &[f64],
    ) -> Result<ImprovementProbability> {
        probability_of_improvement(baseline, treatment, self.config.backend)
    }

    pub fn ttest(&self, baseline: &[f64], treatment: &[f64]) -> Result<TTestResult> {
        perfstat_anova::ttest_independent(baseline, treatment, self.config.backend)
    }

    pub fn anova<I, S, V>(&self, groups: I) -> Result<AnovaResult>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: AsRef<[f64]>,
    {
        self.anova.one_way(groups)
    }

    pub fn tukey_hsd(&self, anova: &AnovaResult) -> Result<Vec<PairwiseComparison>> {
        self.posthoc.tukey_hsd(anova, self.config.alpha)
    }

    pub fn bonferroni(&self, anova: &AnovaResult) -> Result<BonferroniReport> {
        self.posthoc.bonferroni(anova, self.config.alpha)
    }

    pub fn required_n(&self, d: f64, power: f64) -> Result<Tagged<usize>> {
        self.power.required_n(d, power, self.config.alpha)
    }

    pub fn min_detectable_effect(&self, n: usize, power: f64) -> Result<Tagged<f64>> {
        self.power.min_detectable_effect(n, power, self.config.alpha)
    }

    pub fn achieved_power(&self, n: usize, d: f64) -> Result<Tagged<f64>> {
        self.power.achieved_power(n, d, self.config.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfstat_core::{NumericBackend, Precision};

    fn engine() -> Engine {
        Engine::new(EngineConfig::default().with_resamples(500)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(Engine::new(EngineConfig::default().with_resamples(0)).is_err());
    }

    #[test]
    fn test_backend_flows_through() {
        let engine = Engine::new(EngineConfig::default().with_backend(NumericBackend::Approximate)).unwrap();
        let n = engine.required_n(0.5, 0.8).unwrap();
        assert_eq!(n.precision, Precision::Approximate);
        let anova = engine
            .anova(vec![("a", vec![1.0, 2.0, 3.0]), ("b", vec![4.0, 5.0, 6.0])])
            .unwrap();
        assert_eq!(anova.precision, Precision::Approximate);
    }

    #[test]
    fn test_quantile_cis_follow_config() {
        let data: Vec<f64> = (1..=50).map(f64::from).collect();
        let rows = engine().quantile_cis(&data).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].label, "p99");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
