//! End-to-end tests chaining generators, transforms, sampler and estimators.

use approx::assert_relative_eq;
use variate_core::rng::{Lcg, SeededRng, UniformSource};
use variate_core::sampler::{BetaDensity, Density, RejectionSampler, SamplerConfig};
use variate_core::stats::{PairedWindowedEstimator, WindowedEstimator};
use variate_core::transform::box_muller;
use variate_core::types::{GeneratorParameter, TransformError};

/// Two LCGs with offset seeds feed Box-Muller without domain errors.
#[test]
fn test_lcg_pair_through_box_muller() {
    let n = 100_000;
    let mut radial = Lcg::new(1, 43, 0, 2048).unwrap();
    let mut angular = Lcg::new(13, 43, 0, 2048).unwrap();

    let normals = box_muller(&radial.generate(n), &angular.generate(n)).unwrap();
    assert_eq!(normals.len(), n);
    assert!(normals.rows().all(|(a, b)| a.is_finite() && b.is_finite()));
}

/// Invalid generator parameters surface as typed errors rather than a
/// silently substituted generator.
#[test]
fn test_invalid_generator_is_an_error() {
    let err = Lcg::new(1, 43, 0, 0).unwrap_err();
    assert_eq!(err.parameter(), GeneratorParameter::Modulus);
}

/// Bad transform input is distinguishable from an empty result.
#[test]
fn test_transform_failures_are_typed() {
    let mut lcg = Lcg::new(1, 43, 0, 2048).unwrap();
    let u = lcg.generate(4);
    assert_eq!(
        box_muller(&u, &u[..3]),
        Err(TransformError::MismatchedLengths { left: 4, right: 3 })
    );
}

/// Normal variates streamed through the windowed estimator settle near the
/// standard normal moments.
#[test]
fn test_normals_into_windowed_estimator() {
    let n = 100_000;
    let mut rng = SeededRng::from_seed(99);
    let mut u1 = vec![0.0; n];
    let mut u2 = vec![0.0; n];
    rng.fill_open01(&mut u1);
    rng.fill_open01(&mut u2);
    let normals = box_muller(&u1, &u2).unwrap();

    let mut stats = WindowedEstimator::<f64>::new(n).unwrap();
    stats.extend(normals.z1.iter().copied());
    assert!(stats.is_full());
    assert!(stats.mean().abs() < 0.05);
    assert!((stats.variance() - 1.0).abs() < 0.1);

    // Independent branches are uncorrelated
    let mut paired = PairedWindowedEstimator::<f64>::new(n).unwrap();
    paired.extend(normals.rows());
    assert!(paired.covariance().abs() < 0.02);
}

/// Accepted Beta(2, 5) samples reproduce the target's mean and variance.
#[test]
fn test_beta_samples_match_target_moments() {
    let target = BetaDensity::new(2.0, 5.0).unwrap();
    let config = SamplerConfig::builder().trials(300_000).build().unwrap();
    let mut proposal = SeededRng::from_seed(5);
    let mut auxiliary = SeededRng::from_seed(6);

    let set = RejectionSampler::new(config)
        .sample(&target, &mut proposal, &mut auxiliary)
        .unwrap();

    let mut stats = WindowedEstimator::<f64>::new(set.len()).unwrap();
    stats.extend(set.xs());
    assert_relative_eq!(stats.mean(), target.mean(), epsilon = 0.01);
    assert_relative_eq!(stats.variance(), target.variance(), epsilon = 0.002);

    for s in set.samples() {
        assert!(s.u <= target.density(s.x));
    }
}

/// A noisy sine fed through a short window tracks the local level.
#[test]
fn test_window_follows_drifting_signal() {
    let period = 200.0;
    let amplitude = 10.0;
    let mut noise = SeededRng::from_seed(3);
    let mut stats = WindowedEstimator::<f64>::new(20).unwrap();

    for step in 0..1_000 {
        let t = step as f64;
        let y = noise.next_uniform() + amplitude * (std::f64::consts::TAU * t / period).sin();
        stats.update(y);
    }

    // Window covers t in [980, 999]: sin is near its zero crossing at t = 1000
    let window_centre = 989.5;
    let expected = 0.5 + amplitude * (std::f64::consts::TAU * window_centre / period).sin();
    assert!((stats.mean() - expected).abs() < 0.5);
}
