//! # Uniform Random Number Generation
//!
//! This module provides the uniform sources that feed the Box-Muller
//! transform and the acceptance-rejection sampler.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator is seeded; identical parameters give
//!   bit-identical sequences
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: Consumers take `impl UniformSource`, never
//!   `Box<dyn UniformSource>`
//!
//! ## Module Structure
//!
//! - [`lcg`]: Linear congruential generator with validated parameters
//! - [`seeded`]: `StdRng` wrapper for entropy or fixed-seed streams
//! - [`source`]: The [`UniformSource`] trait shared by both
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::{Lcg, UniformSource};
//!
//! let mut lcg = Lcg::new(1, 43, 0, 2048).expect("valid parameters");
//! let values = lcg.generate(3);
//! assert_eq!(values, vec![0.00048828125, 0.02099609375, 0.90283203125]);
//! ```
//!
//! ## Thread Safety
//!
//! Generators are plain mutable state with a single owner. Sharing one
//! across threads needs an external lock, or one generator per thread.

mod lcg;
mod seeded;
mod source;

// Public re-exports
pub use lcg::{Lcg, MAX_MODULUS};
pub use seeded::SeededRng;
pub use source::UniformSource;
