//! # Windowed Streaming Statistics
//!
//! Running moments over the most recent `W` observations of a stream.
//!
//! - [`window`]: Single-stream mean and variance ([`WindowedEstimator`])
//! - [`paired`]: Two-stream covariance and correlation ([`PairedWindowedEstimator`])
//!
//! Both estimators keep running sums updated in O(1) per observation and
//! store the raw window so evicted values can be subtracted. Variances are
//! population (biased) variances over the current window.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::stats::WindowedEstimator;
//!
//! let mut stats = WindowedEstimator::<f64>::new(3).unwrap();
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     stats.update(value);
//! }
//!
//! // Window holds {2, 3, 4}
//! assert!((stats.mean() - 3.0).abs() < 1e-12);
//! assert!((stats.variance() - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod paired;
pub mod window;

pub use paired::PairedWindowedEstimator;
pub use window::WindowedEstimator;

use num_traits::Float;

/// Converts an observation count into the estimator's float type.
#[inline]
pub(crate) fn count_as<T: Float>(count: usize) -> T {
    T::from(count).unwrap_or_else(T::nan)
}
