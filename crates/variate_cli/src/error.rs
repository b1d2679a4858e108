//! CLI error types.

use thiserror::Error;
use variate_core::types::{RngError, SamplerError, StatsError, TransformError};

use crate::config::ConfigError;

/// Errors surfaced by the `variate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator parameters were rejected.
    #[error("Generator error: {0}")]
    Rng(#[from] RngError),

    /// The Box-Muller transform rejected its input.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Density or sampler setup failed.
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Estimator construction failed.
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Writing CSV output failed.
    #[error("Output error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure on the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
