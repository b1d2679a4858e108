//! Shared types for the variate toolkit.
//!
//! This module provides:
//! - Error types: `RngError`, `TransformError`, `SamplerError`, `StatsError`

pub mod error;

pub use error::{GeneratorParameter, RngError, SamplerError, StatsError, TransformError};
