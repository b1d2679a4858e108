//! # Acceptance-Rejection Sampling
//!
//! Draws from an arbitrary bounded density on `[0, 1]` by proposing
//! uniform candidates under a flat envelope.
//!
//! ## Module Structure
//!
//! - [`density`]: The [`Density`] trait and the [`BetaDensity`] target
//! - [`envelope`]: Grid estimate of the density's supremum `p*`
//! - [`config`]: Trial count and grid resolution
//! - [`rejection`]: The sampler and its output types
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::SeededRng;
//! use variate_core::sampler::{BetaDensity, RejectionSampler, SamplerConfig};
//!
//! let target = BetaDensity::new(2.0, 5.0).unwrap();
//! let config = SamplerConfig::builder().trials(5_000).grid_size(1_000).build().unwrap();
//!
//! let mut proposal = SeededRng::from_seed(1);
//! let mut auxiliary = SeededRng::from_seed(2);
//! let set = RejectionSampler::new(config)
//!     .sample(&target, &mut proposal, &mut auxiliary)
//!     .unwrap();
//!
//! assert!(set.samples().iter().all(|s| s.u <= target.density(s.x)));
//! # use variate_core::sampler::Density;
//! ```

pub mod config;
pub mod density;
pub mod envelope;
pub mod rejection;

pub use config::{SamplerConfig, SamplerConfigBuilder, MAX_GRID_SIZE, MAX_TRIALS};
pub use density::{BetaDensity, Density};
pub use envelope::{estimate_envelope, Envelope};
pub use rejection::{AcceptedSample, RejectionSampler, SampleSet};
