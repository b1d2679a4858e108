//! # Distribution Transforms
//!
//! Maps uniform variates onto other distributions.
//!
//! - [`box_muller()`]: Cartesian Box-Muller transform to standard normals
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::Lcg;
//! use variate_core::transform::box_muller;
//!
//! let mut radial = Lcg::new(1, 43, 0, 2048).unwrap();
//! let mut angular = Lcg::new(13, 43, 0, 2048).unwrap();
//!
//! let normals = box_muller(&radial.generate(1000), &angular.generate(1000)).unwrap();
//! assert_eq!(normals.len(), 1000);
//! ```

mod normal;

pub use normal::{box_muller, NormalPair};

#[cfg(feature = "parallel")]
pub use normal::box_muller_par;
