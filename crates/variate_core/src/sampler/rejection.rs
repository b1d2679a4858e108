//! Grid-envelope acceptance-rejection sampler.
//!
//! Each trial draws `x ~ U(0, 1)` and `u ~ U(0, p*)`, and keeps `(x, u)`
//! when `u <= f(x)`. The number of accepted pairs is random and bounded by
//! the trial count; the accepted `x` values approximate the target density
//! as the trial count grows.

use super::config::SamplerConfig;
use super::density::Density;
use super::envelope::{estimate_envelope, Envelope};
use crate::rng::UniformSource;
use crate::types::SamplerError;

/// A candidate that passed the acceptance test.
///
/// Always satisfies `u <= density(x)` and `0 <= x <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptedSample {
    /// Proposed domain point.
    pub x: f64,
    /// Auxiliary draw in `[0, p*)` that led to acceptance.
    pub u: f64,
}

/// Output of one sampling run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSet {
    samples: Vec<AcceptedSample>,
    envelope: Envelope,
    trials: usize,
}

impl SampleSet {
    /// Accepted pairs in draw order.
    #[inline]
    pub fn samples(&self) -> &[AcceptedSample] {
        &self.samples
    }

    /// Consumes the set, returning the accepted pairs.
    #[inline]
    pub fn into_samples(self) -> Vec<AcceptedSample> {
        self.samples
    }

    /// The envelope used for this run.
    #[inline]
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Number of trials attempted.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Number of accepted pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no trial was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Accepted fraction of trials.
    ///
    /// For a normalised density on `[0, 1]` this tends to `1 / p*`.
    pub fn acceptance_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.samples.len() as f64 / self.trials as f64
        }
    }

    /// The accepted domain points.
    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }
}

/// Acceptance-rejection sampler over `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::Lcg;
/// use variate_core::sampler::{BetaDensity, RejectionSampler, SamplerConfig};
///
/// let target = BetaDensity::new(2.0, 5.0).unwrap();
/// let sampler = RejectionSampler::new(SamplerConfig::default());
///
/// // One generator advanced twice per trial
/// let mut lcg = Lcg::new(1, 106, 1283, 6075).unwrap();
/// let set = sampler.sample_single(&target, &mut lcg).unwrap();
///
/// assert_eq!(set.trials(), 5_000);
/// assert!(set.len() <= set.trials());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectionSampler {
    config: SamplerConfig,
}

impl RejectionSampler {
    /// Creates a sampler from a validated configuration.
    #[inline]
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Samples using independent proposal and auxiliary sources.
    ///
    /// `proposal` supplies `x`, `auxiliary` supplies the height `u`. Exactly
    /// `trials` draws are taken from each.
    ///
    /// # Errors
    ///
    /// Propagates configuration and envelope errors; see
    /// [`estimate_envelope`].
    pub fn sample<D, P, A>(
        &self,
        density: &D,
        proposal: &mut P,
        auxiliary: &mut A,
    ) -> Result<SampleSet, SamplerError>
    where
        D: Density + ?Sized,
        P: UniformSource + ?Sized,
        A: UniformSource + ?Sized,
    {
        self.config.validate()?;
        let envelope = estimate_envelope(density, self.config.grid_size())?;
        Ok(self.run(density, envelope, || {
            (proposal.next_uniform(), auxiliary.next_uniform())
        }))
    }

    /// Samples from a single source advanced twice per trial.
    ///
    /// The first draw of each trial is `x`, the second scales to `u`.
    ///
    /// # Errors
    ///
    /// Same as [`RejectionSampler::sample`].
    pub fn sample_single<D, S>(&self, density: &D, source: &mut S) -> Result<SampleSet, SamplerError>
    where
        D: Density + ?Sized,
        S: UniformSource + ?Sized,
    {
        self.config.validate()?;
        let envelope = estimate_envelope(density, self.config.grid_size())?;
        Ok(self.run(density, envelope, || {
            let x = source.next_uniform();
            let u = source.next_uniform();
            (x, u)
        }))
    }

    fn run<D, F>(&self, density: &D, envelope: Envelope, mut draw: F) -> SampleSet
    where
        D: Density + ?Sized,
        F: FnMut() -> (f64, f64),
    {
        let trials = self.config.trials();
        let mut samples = Vec::new();

        for _ in 0..trials {
            let (x, v) = draw();
            let u = envelope.peak * v;
            if u <= density.density(x) {
                samples.push(AcceptedSample { x, u });
            }
        }

        tracing::debug!(
            trials,
            accepted = samples.len(),
            peak = envelope.peak,
            "Acceptance-rejection run complete"
        );

        SampleSet {
            samples,
            envelope,
            trials,
        }
    }
}
