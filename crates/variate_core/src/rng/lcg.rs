//! Linear congruential generator.
//!
//! Produces `x' = (a·x + b) mod m` and reports `x / m`. The recurrence is
//! evaluated in 128-bit arithmetic, so the product `a·x` cannot overflow.

use super::source::UniformSource;
use crate::types::{GeneratorParameter, RngError};

/// Largest accepted modulus, 2^53.
///
/// Every state below it is exact as `f64`, so `state / modulus` is
/// strictly below 1.0.
pub const MAX_MODULUS: u64 = 1 << 53;

/// Linear congruential generator with validated parameters.
///
/// # Output convention
///
/// The first draw of a fresh generator emits `seed / modulus` unchanged,
/// before any recurrence step. Every later draw advances the state and
/// then emits `state / modulus`.
///
/// [`Lcg::generate`] always starts over from the seed, so repeated calls
/// return the same vector. The [`UniformSource`] draws and [`Lcg::fill`]
/// continue from the current state instead.
///
/// # Degenerate states
///
/// If the recurrence reaches state 0 with a zero increment, every later
/// output is 0. Consumers that take a logarithm (Box-Muller) will reject
/// such values; choosing parameters that avoid zero is the caller's job.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::Lcg;
///
/// let mut a = Lcg::new(1, 43, 0, 2048).unwrap();
/// let mut b = Lcg::new(1, 43, 0, 2048).unwrap();
/// assert_eq!(a.generate(100), b.generate(100));
/// assert_eq!(a.generate(3), a.generate(3));
///
/// assert!(Lcg::new(2048, 43, 0, 2048).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    modulus: u64,
    seed: u64,
    multiplier: u64,
    increment: u64,
    /// Current recurrence state, always in `[0, modulus)`.
    state: u64,
    /// Whether the seed has been emitted yet.
    started: bool,
}

impl Lcg {
    /// Creates a generator after checking every bound.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidGeneratorParameters`] naming the first
    /// violated bound, checked in this order:
    /// - `0 < modulus <= MAX_MODULUS`
    /// - `seed < modulus`
    /// - `multiplier < modulus`
    /// - `increment < modulus`
    pub fn new(seed: u64, multiplier: u64, increment: u64, modulus: u64) -> Result<Self, RngError> {
        if modulus == 0 || modulus > MAX_MODULUS {
            return Err(RngError::InvalidGeneratorParameters {
                parameter: GeneratorParameter::Modulus,
                value: modulus,
                modulus,
            });
        }
        let bounded = [
            (GeneratorParameter::Seed, seed),
            (GeneratorParameter::Multiplier, multiplier),
            (GeneratorParameter::Increment, increment),
        ];
        if let Some(&(parameter, value)) = bounded.iter().find(|(_, value)| *value >= modulus) {
            return Err(RngError::InvalidGeneratorParameters {
                parameter,
                value,
                modulus,
            });
        }

        tracing::trace!(seed, multiplier, increment, modulus, "LCG initialised");

        Ok(Self {
            modulus,
            seed,
            multiplier,
            increment,
            state: seed,
            started: false,
        })
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the multiplier `a`.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the increment `b`.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Returns the modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the current integer state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Rewinds the generator so the next draw emits the seed again.
    pub fn reset(&mut self) {
        self.state = self.seed;
        self.started = false;
    }

    /// Advances the state and returns the next raw integer.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        if self.started {
            let next = (u128::from(self.multiplier) * u128::from(self.state)
                + u128::from(self.increment))
                % u128::from(self.modulus);
            // next < modulus <= MAX_MODULUS
            self.state = next as u64;
        } else {
            self.started = true;
        }
        self.state
    }

    /// Returns the first `n` values of the sequence.
    ///
    /// `generate(0)` is empty. Otherwise the first value is
    /// `seed / modulus`, whatever was drawn before. The state is left after
    /// the last returned value, so streaming draws continue from there.
    pub fn generate(&mut self, n: usize) -> Vec<f64> {
        self.reset();
        self.take_uniform(n)
    }

    /// Fills the buffer with consecutive draws without allocating.
    #[inline]
    pub fn fill(&mut self, buffer: &mut [f64]) {
        self.fill_uniform(buffer);
    }
}

impl UniformSource for Lcg {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.next_state() as f64 / self.modulus as f64
    }
}
