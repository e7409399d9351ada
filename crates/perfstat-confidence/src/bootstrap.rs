//! Seeded bootstrap driver
//!
//! Resample `i` draws from ChaCha stream `i` of the generator keyed by
//! `seed`, so distinct seeds never share a stream. The random state is local
//! to each call and partitioned deterministically across resamples, so the
//! sequential and `parallel` (rayon) paths produce bit-identical
//! distributions for the same seed and concurrent callers never share a
//! generator.

use crate::methods::{BootstrapMethod, PercentileBootstrap};
use crate::types::BootstrapResult;
use perfstat_core::{check_open_probability, Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Resample count for quick exploratory estimates
pub const FAST_RESAMPLES: usize = 2_000;

/// High-precision number of resamples
pub const HIGH_PRECISION_RESAMPLES: usize = 30_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 42;

/// Minimum sample size for a one-sample bootstrap
pub const MIN_BOOTSTRAP_SAMPLES: usize = 2;

/// Random stream for resample `index` under `seed`
pub fn resample_stream(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Draw `source.len()` values with replacement
pub fn resample<R: Rng>(rng: &mut R, source: &[f64]) -> Vec<f64> {
    let n = source.len();
    (0..n).map(|_| source[rng.gen_range(0..n)]).collect()
}

/// Bootstrap configuration and driver
#[derive(Debug, Clone)]
pub struct Bootstrap<M = PercentileBootstrap> {
    method: M,
    n_resamples: usize,
    confidence_level: f64,
    seed: u64,
}

impl Bootstrap<PercentileBootstrap> {
    /// Percentile bootstrap with default settings
    pub fn percentile() -> Self {
        Self::new(PercentileBootstrap)
    }
}

impl Default for Bootstrap<PercentileBootstrap> {
    fn default() -> Self {
        Self::percentile()
    }
}

impl<M: BootstrapMethod> Bootstrap<M> {
    /// Create a new bootstrap driver
    pub fn new(method: M) -> Self {
        Self {
            method,
            n_resamples: DEFAULT_RESAMPLES,
            confidence_level: DEFAULT_CONFIDENCE,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Reject settings that cannot produce an interval
    pub fn validate(&self) -> Result<()> {
        check_open_probability("Confidence level", self.confidence_level)?;
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Bootstrap a one-sample statistic
    ///
    /// Samples with fewer than [`MIN_BOOTSTRAP_SAMPLES`] values soft-fail with
    /// [`BootstrapResult::degenerate`].
    #[instrument(skip(self, sample, statistic), fields(n = sample.len(), n_resamples = self.n_resamples))]
    pub fn one_sample<S>(&self, sample: &[f64], statistic: S) -> Result<BootstrapResult>
    where
        S: Fn(&[f64]) -> Result<f64> + Sync,
    {
        self.validate()?;
        if sample.len() < MIN_BOOTSTRAP_SAMPLES {
            debug!("sample too small to resample, returning degenerate result");
            return Ok(BootstrapResult::degenerate(self.confidence_level));
        }

        let original = statistic(sample)?;
        let estimates = self.run(|rng| statistic(&resample(rng, sample)))?;
        self.finish(&estimates, original)
    }

    /// Bootstrap a two-sample statistic, resampling each sample independently
    /// at its own size
    ///
    /// An empty sample on either side soft-fails with a degenerate result.
    #[instrument(skip(self, a, b, statistic), fields(n_a = a.len(), n_b = b.len(), n_resamples = self.n_resamples))]
    pub fn two_sample<S>(&self, a: &[f64], b: &[f64], statistic: S) -> Result<BootstrapResult>
    where
        S: Fn(&[f64], &[f64]) -> Result<f64> + Sync,
    {
        self.validate()?;
        if a.is_empty() || b.is_empty() {
            debug!("empty sample, returning degenerate result");
            return Ok(BootstrapResult::degenerate(self.confidence_level));
        }

        let original = statistic(a, b)?;
        let estimates = self.run(|rng| {
            let ra = resample(rng, a);
            let rb = resample(rng, b);
            statistic(&ra, &rb)
        })?;
        self.finish(&estimates, original)
    }

    #[cfg(not(feature = "parallel"))]
    fn run<F>(&self, draw: F) -> Result<Vec<f64>>
    where
        F: Fn(&mut ChaCha8Rng) -> Result<f64> + Sync,
    {
        (0..self.n_resamples)
            .map(|i| draw(&mut resample_stream(self.seed, i)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run<F>(&self, draw: F) -> Result<Vec<f64>>
    where
        F: Fn(&mut ChaCha8Rng) -> Result<f64> + Sync,
    {
        (0..self.n_resamples)
            .into_par_iter()
            .map(|i| draw(&mut resample_stream(self.seed, i)))
            .collect()
    }

    fn finish(&self, estimates: &[f64], original: f64) -> Result<BootstrapResult> {
        let interval = self
            .method
            .calculate_interval(estimates, original, self.confidence_level)?;
        debug!(
            lower = interval.lower,
            upper = interval.upper,
            estimate = original,
            "{} interval computed",
            self.method.name()
        );

        // the reported interval always brackets the point estimate
        let mut interval = interval;
        interval.lower = interval.lower.min(original);
        interval.upper = interval.upper.max(original);
        Ok(BootstrapResult::from_interval(interval, estimates.len()))
    }
}
