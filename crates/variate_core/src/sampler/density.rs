//! Target densities for the acceptance-rejection sampler.

use crate::math::ln_beta;
use crate::types::SamplerError;

/// A non-negative weight function over `[0, 1]`.
///
/// Implementations must be pure: the sampler evaluates the density once per
/// trial and relies on repeated calls returning the same value.
///
/// Closures implement the trait directly:
///
/// ```rust
/// use variate_core::sampler::Density;
///
/// let triangle = |x: f64| 2.0 * x;
/// assert_eq!(triangle.density(0.5), 1.0);
/// ```
pub trait Density {
    /// Evaluates the density at `x`.
    fn density(&self, x: f64) -> f64;
}

impl<F> Density for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn density(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Beta(α, β) density on `[0, 1]`.
///
/// `f(x) = x^(α−1) (1−x)^(β−1) / B(α, β)`, with the normalisation constant
/// computed once at construction. The density is zero outside `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use variate_core::sampler::{BetaDensity, Density};
///
/// let beta = BetaDensity::new(2.0, 5.0).unwrap();
/// assert!((beta.normalisation() - 30.0).abs() < 1e-8);
/// assert!((beta.density(0.2) - 30.0 * 0.2 * 0.8_f64.powi(4)).abs() < 1e-8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaDensity {
    alpha: f64,
    beta: f64,
    /// `1 / B(alpha, beta)`.
    normalisation: f64,
}

impl BetaDensity {
    /// Creates a Beta density.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidShape`] if either shape parameter is
    /// not finite and strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, SamplerError> {
        for (name, value) in [("alpha", alpha), ("beta", beta)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SamplerError::InvalidShape { name, value });
            }
        }
        Ok(Self {
            alpha,
            beta,
            normalisation: (-ln_beta(alpha, beta)).exp(),
        })
    }

    /// First shape parameter α.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The constant `1 / B(α, β)`.
    #[inline]
    pub fn normalisation(&self) -> f64 {
        self.normalisation
    }

    /// Distribution mean `α / (α + β)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Distribution variance `αβ / ((α + β)² (α + β + 1))`.
    pub fn variance(&self) -> f64 {
        let total = self.alpha + self.beta;
        self.alpha * self.beta / (total * total * (total + 1.0))
    }

    /// Interior mode `(α − 1) / (α + β − 2)`, defined when both shapes exceed 1.
    pub fn mode(&self) -> Option<f64> {
        if self.alpha > 1.0 && self.beta > 1.0 {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        } else {
            None
        }
    }
}

impl Density for BetaDensity {
    fn density(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        x.powf(self.alpha - 1.0) * (1.0 - x).powf(self.beta - 1.0) * self.normalisation
    }
}
