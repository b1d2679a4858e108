//! Error types for structured error handling.
//!
//! This module provides:
//! - `RngError`: Errors from generator construction
//! - `TransformError`: Errors from the Box-Muller transform
//! - `SamplerError`: Errors from densities, envelopes and rejection sampling
//! - `StatsError`: Errors from windowed estimator construction
//!
//! Every variant is a local precondition violation. None of them is
//! transient, so callers correct their inputs rather than retry.

use std::fmt;
use thiserror::Error;

/// Names a linear congruential generator parameter in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorParameter {
    /// Initial state.
    Seed,
    /// Multiplier `a` in `x' = (a·x + b) mod m`.
    Multiplier,
    /// Increment `b` in `x' = (a·x + b) mod m`.
    Increment,
    /// Modulus `m` in `x' = (a·x + b) mod m`.
    Modulus,
}

impl fmt::Display for GeneratorParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeneratorParameter::Seed => "seed",
            GeneratorParameter::Multiplier => "multiplier",
            GeneratorParameter::Increment => "increment",
            GeneratorParameter::Modulus => "modulus",
        };
        f.write_str(name)
    }
}

/// Generator construction errors.
///
/// # Examples
/// ```
/// use variate_core::types::{GeneratorParameter, RngError};
///
/// let err = RngError::InvalidGeneratorParameters {
///     parameter: GeneratorParameter::Seed,
///     value: 4096,
///     modulus: 2048,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid generator parameters: seed = 4096 must lie in [0, 2048)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    /// A parameter violated its bound.
    ///
    /// For `Modulus` the bound is `1 <= modulus <= 2^53`; every other parameter
    /// must lie in `[0, modulus)`.
    #[error("{}", describe_generator_bound(.parameter, .value, .modulus))]
    InvalidGeneratorParameters {
        /// The first parameter found out of bounds
        parameter: GeneratorParameter,
        /// The rejected value
        value: u64,
        /// The modulus the value was checked against
        modulus: u64,
    },
}

fn describe_generator_bound(parameter: &GeneratorParameter, value: &u64, modulus: &u64) -> String {
    match parameter {
        GeneratorParameter::Modulus => format!(
            "Invalid generator parameters: modulus = {} must lie in [1, 2^53]",
            value
        ),
        other => format!(
            "Invalid generator parameters: {} = {} must lie in [0, {})",
            other, value, modulus
        ),
    }
}

impl RngError {
    /// Returns the parameter that violated its bound.
    pub fn parameter(&self) -> GeneratorParameter {
        match self {
            RngError::InvalidGeneratorParameters { parameter, .. } => *parameter,
        }
    }
}

/// Box-Muller transform errors.
///
/// # Examples
/// ```
/// use variate_core::types::TransformError;
///
/// let err = TransformError::MismatchedLengths { left: 3, right: 4 };
/// assert_eq!(format!("{}", err), "Mismatched sequence lengths: 3 != 4");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// One or both input sequences are empty.
    #[error("Empty input: both uniform sequences must be non-empty")]
    EmptyInput,

    /// The two input sequences differ in length.
    #[error("Mismatched sequence lengths: {left} != {right}")]
    MismatchedLengths {
        /// Length of the first (radial) sequence
        left: usize,
        /// Length of the second (angular) sequence
        right: usize,
    },

    /// A radial uniform lies outside (0, 1], so its logarithm is undefined
    /// or the square root argument is negative.
    #[error("Domain violation at index {index}: u1 = {value} must lie in (0, 1]")]
    DomainViolation {
        /// Position of the offending value
        index: usize,
        /// The offending value
        value: f64,
    },

    /// An angular uniform is NaN or infinite.
    #[error("Non-finite angular input at index {index}: u2 = {value}")]
    NonFiniteInput {
        /// Position of the offending value
        index: usize,
        /// The offending value
        value: f64,
    },
}

/// Density and acceptance-rejection sampler errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// A Beta shape parameter is not finite and positive.
    #[error("Invalid shape parameter '{name}': {value} must be finite and positive")]
    InvalidShape {
        /// Parameter name (`alpha` or `beta`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Trial count outside [1, max].
    #[error("Invalid trial count {count}: must be in range [1, {max}]")]
    InvalidTrialCount {
        /// Requested trial count
        count: usize,
        /// Largest accepted trial count
        max: usize,
    },

    /// Envelope grid size outside [2, max].
    #[error("Invalid grid size {size}: must be in range [2, {max}]")]
    InvalidGridSize {
        /// Requested grid size
        size: usize,
        /// Largest accepted grid size
        max: usize,
    },

    /// The density evaluated to an infinite or NaN value on the grid.
    #[error("Unbounded density at x = {x}: value {value} is not finite")]
    UnboundedDensity {
        /// Grid point where the density is not finite
        x: f64,
        /// The non-finite density value
        value: f64,
    },

    /// The grid maximum is not strictly positive, so no point can be accepted.
    #[error("Degenerate envelope: grid maximum {peak} must be positive")]
    DegenerateEnvelope {
        /// The observed grid maximum
        peak: f64,
    },
}

/// Windowed estimator errors.
///
/// # Examples
/// ```
/// use variate_core::types::StatsError;
///
/// let err = StatsError::InvalidWindowCapacity(0);
/// assert_eq!(format!("{}", err), "Invalid window capacity 0: must be positive");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Window capacity must be at least one observation.
    #[error("Invalid window capacity {0}: must be positive")]
    InvalidWindowCapacity(usize),
}
