//! Grid estimate of a density's supremum.
//!
//! The rejection sampler needs a constant `p*` with `p* >= f(x)` on
//! `[0, 1]`. It is estimated as the maximum of `f` over an equally spaced
//! grid.
//!
//! ## Accuracy
//!
//! The grid maximum never exceeds the true supremum and can fall short of
//! it when the peak lies between grid points. Sharply peaked or oscillating
//! densities suffer most. When `p*` understates the supremum, candidates
//! near the peak whose auxiliary draw lands in `(p*, f(x)]` are never
//! proposed, so the accepted sample is slightly flattened there. A finer
//! grid shrinks the gap at linear cost in density evaluations.

use super::config::MAX_GRID_SIZE;
use super::density::Density;
use crate::math::linspace;
use crate::types::SamplerError;

/// The estimated envelope height and where it was observed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    /// Estimated supremum `p*`.
    pub peak: f64,
    /// Grid point attaining `peak`.
    pub argmax: f64,
    /// Number of grid points evaluated.
    pub grid_size: usize,
}

/// Estimates `p*` as the maximum of `density` over `linspace(0, 1, grid_size)`.
///
/// Ties keep the first (leftmost) grid point.
///
/// # Errors
///
/// - [`SamplerError::InvalidGridSize`] if `grid_size` is outside `[2, MAX_GRID_SIZE]`
/// - [`SamplerError::UnboundedDensity`] if the density is infinite or NaN at a grid point
/// - [`SamplerError::DegenerateEnvelope`] if the maximum is not strictly positive
///
/// # Examples
///
/// ```rust
/// use variate_core::sampler::{estimate_envelope, BetaDensity};
///
/// let beta = BetaDensity::new(2.0, 5.0).unwrap();
/// let envelope = estimate_envelope(&beta, 1000).unwrap();
///
/// // True mode is x = 0.2 with f(0.2) ≈ 2.4576
/// assert!((envelope.argmax - 0.2).abs() < 1e-3);
/// assert!(envelope.peak <= 2.4576 + 1e-9);
/// ```
pub fn estimate_envelope<D>(density: &D, grid_size: usize) -> Result<Envelope, SamplerError>
where
    D: Density + ?Sized,
{
    if !(2..=MAX_GRID_SIZE).contains(&grid_size) {
        return Err(SamplerError::InvalidGridSize {
            size: grid_size,
            max: MAX_GRID_SIZE,
        });
    }

    let mut peak = f64::NEG_INFINITY;
    let mut argmax = 0.0;
    for x in linspace(0.0, 1.0, grid_size) {
        let value = density.density(x);
        if !value.is_finite() {
            return Err(SamplerError::UnboundedDensity { x, value });
        }
        if value > peak {
            peak = value;
            argmax = x;
        }
    }

    if peak <= 0.0 {
        return Err(SamplerError::DegenerateEnvelope { peak });
    }

    tracing::debug!(peak, argmax, grid_size, "Estimated rejection envelope");
    Ok(Envelope {
        peak,
        argmax,
        grid_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::BetaDensity;
    use approx::assert_relative_eq;

    #[test]
    fn test_beta_envelope_near_true_mode() {
        let beta = BetaDensity::new(2.0, 5.0).unwrap();
        let envelope = estimate_envelope(&beta, 1000).unwrap();

        let true_peak = beta.density(0.2);
        assert!(envelope.peak <= true_peak);
        assert_relative_eq!(envelope.peak, true_peak, max_relative = 1e-4);
        assert_eq!(envelope.grid_size, 1000);
    }

    #[test]
    fn test_coarse_grid_understates_peak() {
        // Narrow spike at 0.5 falls between the points of a 4-point grid
        let spike = |x: f64| 1.0 + 100.0 * (-((x - 0.5) * 100.0).powi(2)).exp();
        let coarse = estimate_envelope(&spike, 4).unwrap();
        let fine = estimate_envelope(&spike, 1001).unwrap();

        assert!(coarse.peak < 1.01);
        assert_relative_eq!(fine.peak, 101.0, max_relative = 1e-9);
        assert_relative_eq!(fine.argmax, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_monotone_density_peaks_at_end_point() {
        let ramp = |x: f64| 3.0 * x * x;
        let envelope = estimate_envelope(&ramp, 11).unwrap();
        assert_eq!(envelope.argmax, 1.0);
        assert_eq!(envelope.peak, 3.0);
    }

    #[test]
    fn test_invalid_grid_sizes() {
        let flat = |_: f64| 1.0;
        assert!(matches!(
            estimate_envelope(&flat, 0),
            Err(SamplerError::InvalidGridSize { size: 0, .. })
        ));
        assert!(matches!(
            estimate_envelope(&flat, 1),
            Err(SamplerError::InvalidGridSize { size: 1, .. })
        ));
        assert!(estimate_envelope(&flat, MAX_GRID_SIZE + 1).is_err());
    }

    #[test]
    fn test_unbounded_density() {
        // Beta(0.5, 0.5) diverges at both end points
        let arcsine = BetaDensity::new(0.5, 0.5).unwrap();
        assert!(matches!(
            estimate_envelope(&arcsine, 100),
            Err(SamplerError::UnboundedDensity { x, .. }) if x == 0.0
        ));
    }

    #[test]
    fn test_degenerate_envelope() {
        let zero = |_: f64| 0.0;
        assert_eq!(
            estimate_envelope(&zero, 10),
            Err(SamplerError::DegenerateEnvelope { peak: 0.0 })
        );
    }
}
