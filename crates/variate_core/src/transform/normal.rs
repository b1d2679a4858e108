//! Cartesian Box-Muller transform.
//!
//! For each index `i`:
//!
//! ```text
//! r     = sqrt(-2 ln u1[i])
//! z1[i] = r cos(2π u2[i])
//! z2[i] = r sin(2π u2[i])
//! ```
//!
//! Given independent uniform(0, 1) inputs the outputs are independent
//! standard normals.

use std::f64::consts::TAU;

use crate::types::TransformError;

/// Two equal-length sequences of standard normal variates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalPair {
    /// Cosine branch.
    pub z1: Vec<f64>,
    /// Sine branch.
    pub z2: Vec<f64>,
}

impl NormalPair {
    /// Number of variates in each branch.
    #[inline]
    pub fn len(&self) -> usize {
        self.z1.len()
    }

    /// Returns `true` when both branches are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z1.is_empty()
    }

    /// Splits into `(z1, z2)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.z1, self.z2)
    }

    /// Iterates over `(z1[i], z2[i])` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.z1.iter().copied().zip(self.z2.iter().copied())
    }
}

/// Checks lengths and domains before any output is produced.
fn validate(u1: &[f64], u2: &[f64]) -> Result<(), TransformError> {
    if u1.is_empty() || u2.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    if u1.len() != u2.len() {
        return Err(TransformError::MismatchedLengths {
            left: u1.len(),
            right: u2.len(),
        });
    }
    if let Some((index, &value)) = u1
        .iter()
        .enumerate()
        .find(|&(_, &u)| !(u > 0.0 && u <= 1.0))
    {
        return Err(TransformError::DomainViolation { index, value });
    }
    if let Some((index, &value)) = u2.iter().enumerate().find(|(_, u)| !u.is_finite()) {
        return Err(TransformError::NonFiniteInput { index, value });
    }
    Ok(())
}

#[inline]
fn transform_one(u1: f64, u2: f64) -> (f64, f64) {
    let radius = (-2.0 * u1.ln()).sqrt();
    let (sin, cos) = (TAU * u2).sin_cos();
    (radius * cos, radius * sin)
}

/// Transforms two uniform sequences into two standard normal sequences.
///
/// # Errors
///
/// - [`TransformError::EmptyInput`] if either sequence is empty
/// - [`TransformError::MismatchedLengths`] if the lengths differ
/// - [`TransformError::DomainViolation`] if some `u1[i]` is outside `(0, 1]`
/// - [`TransformError::NonFiniteInput`] if some `u2[i]` is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use variate_core::transform::box_muller;
/// use variate_core::types::TransformError;
///
/// let pair = box_muller(&[0.5, 0.25], &[0.0, 0.25]).unwrap();
/// assert!((pair.z1[0] - (2.0_f64 * 2.0_f64.ln()).sqrt()).abs() < 1e-12);
///
/// assert_eq!(
///     box_muller(&[0.5], &[0.1, 0.2]),
///     Err(TransformError::MismatchedLengths { left: 1, right: 2 })
/// );
/// ```
pub fn box_muller(u1: &[f64], u2: &[f64]) -> Result<NormalPair, TransformError> {
    validate(u1, u2)?;

    let (z1, z2) = u1
        .iter()
        .zip(u2)
        .map(|(&a, &b)| transform_one(a, b))
        .unzip();

    tracing::trace!(len = u1.len(), "Box-Muller transform complete");
    Ok(NormalPair { z1, z2 })
}

/// Parallel variant of [`box_muller`] using rayon.
///
/// Produces exactly the same values, in the same order.
#[cfg(feature = "parallel")]
pub fn box_muller_par(u1: &[f64], u2: &[f64]) -> Result<NormalPair, TransformError> {
    use rayon::prelude::*;

    validate(u1, u2)?;

    let (z1, z2) = u1
        .par_iter()
        .zip(u2.par_iter())
        .map(|(&a, &b)| transform_one(a, b))
        .unzip();

    Ok(NormalPair { z1, z2 })
}
