//! Acceptance-rejection sampler configuration.
//!
//! This module provides configuration types and builders for the
//! acceptance-rejection sampler.

use crate::types::SamplerError;

/// Maximum number of trials allowed per sampling run.
pub const MAX_TRIALS: usize = 100_000_000;

/// Maximum number of grid points for envelope estimation.
pub const MAX_GRID_SIZE: usize = 10_000_000;

/// Default number of trials.
pub const DEFAULT_TRIALS: usize = 5_000;

/// Default envelope grid resolution.
pub const DEFAULT_GRID_SIZE: usize = 1_000;

/// Acceptance-rejection sampler configuration.
///
/// Immutable once built. Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Grid Resolution Trade-off
///
/// `grid_size` density evaluations are spent once per run to estimate the
/// envelope. A coarse grid is cheap but may understate the supremum of a
/// peaked density; see [`estimate_envelope`](super::estimate_envelope).
///
/// # Examples
///
/// ```rust
/// use variate_core::sampler::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .trials(10_000)
///     .grid_size(2_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.trials(), 10_000);
/// assert_eq!(config.grid_size(), 2_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of candidate draws.
    trials: usize,
    /// Number of grid points for the envelope estimate.
    grid_size: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the number of candidate draws.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the envelope grid resolution.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError` if:
    /// - `trials` is 0 or greater than 100,000,000
    /// - `grid_size` is below 2 or greater than 10,000,000
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(SamplerError::InvalidTrialCount {
                count: self.trials,
                max: MAX_TRIALS,
            });
        }
        if self.grid_size < 2 || self.grid_size > MAX_GRID_SIZE {
            return Err(SamplerError::InvalidGridSize {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset fields fall back to 5,000 trials and a 1,000-point grid.
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    trials: Option<usize>,
    grid_size: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Sets the number of candidate draws.
    ///
    /// # Arguments
    ///
    /// * `trials` - Number of trials in [1, 100_000_000]
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the envelope grid resolution.
    ///
    /// # Arguments
    ///
    /// * `grid_size` - Number of grid points in [2, 10_000_000]
    #[inline]
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = Some(grid_size);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError` if validation fails.
    pub fn build(self) -> Result<SamplerConfig, SamplerError> {
        let config = SamplerConfig {
            trials: self.trials.unwrap_or(DEFAULT_TRIALS),
            grid_size: self.grid_size.unwrap_or(DEFAULT_GRID_SIZE),
        };
        config.validate()?;
        Ok(config)
    }
}
