//! Seeded `StdRng` wrapper.
//!
//! This module provides [`SeededRng`], a uniform source backed by
//! `rand::rngs::StdRng`. Demonstration callers seed it from platform
//! entropy; tests seed it with a fixed value.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::UniformSource;

/// Seeded uniform random number generator.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::{SeededRng, UniformSource};
///
/// let mut rng1 = SeededRng::from_seed(12345);
/// let mut rng2 = SeededRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_uniform(), rng2.next_uniform());
///
/// // Open-interval draws never hit either end point
/// let u = rng1.next_open01();
/// assert!(u > 0.0 && u < 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SeededRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG seeded from platform entropy.
    ///
    /// The drawn seed is kept so the run can be replayed with
    /// [`SeededRng::from_seed`].
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        tracing::debug!(seed, "Seeded uniform source from entropy");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a value in the open interval `(0, 1)`.
    ///
    /// Suitable as the radial input of the Box-Muller transform, which is
    /// undefined at zero.
    #[inline]
    pub fn next_open01(&mut self) -> f64 {
        self.inner.sample(Open01)
    }

    /// Fills the buffer with values in `(0, 1)`.
    #[inline]
    pub fn fill_open01(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.sample(Open01);
        }
    }
}

impl UniformSource for SeededRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen()
    }
}
