//! Numeric helpers shared by the generators, sampler and estimators.
//!
//! - [`power`]: Integer exponentiation by squaring
//! - [`special`]: Gamma and Beta functions (Lanczos approximation)
//! - [`grid`]: Equally spaced evaluation grids

pub mod grid;
pub mod power;
pub mod special;

pub use grid::linspace;
pub use power::powi;
pub use special::{beta, gamma, ln_beta, ln_gamma};
