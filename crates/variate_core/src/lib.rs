//! # variate_core: Random Variates and Streaming Statistics
//!
//! A small numerical toolkit for reproducible Monte Carlo work:
//! - Linear congruential and seeded uniform sources (`rng`)
//! - Box-Muller transform to standard normals (`transform`)
//! - Grid-envelope acceptance-rejection sampling (`sampler`)
//! - Sliding-window mean, variance and covariance (`stats`)
//! - Gamma/Beta functions, integer powers and grids (`math`)
//! - Error types: `RngError`, `TransformError`, `SamplerError`, `StatsError` (`types`)
//!
//! ## Data Flow
//!
//! ```text
//! rng ──► transform   (two uniform streams → two normal streams)
//! rng ──► sampler     (proposal + auxiliary uniforms → accepted pairs)
//! any scalar stream ──► stats
//! ```
//!
//! Every component is synchronous and single-owner. Nothing here spawns
//! threads or holds background resources.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::rng::Lcg;
//! use variate_core::stats::WindowedEstimator;
//! use variate_core::transform::box_muller;
//!
//! let mut radial = Lcg::new(1, 43, 0, 2048).unwrap();
//! let mut angular = Lcg::new(13, 43, 0, 2048).unwrap();
//! let normals = box_muller(&radial.generate(500), &angular.generate(500)).unwrap();
//!
//! let mut stats = WindowedEstimator::<f64>::new(100).unwrap();
//! stats.extend(normals.z1.iter().copied());
//! assert_eq!(stats.len(), 100);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: `transform::box_muller_par` via rayon
//! - `serde`: Serialisation for normal pairs, samples and envelopes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod sampler;
pub mod stats;
pub mod transform;
pub mod types;
