//! Fixed-capacity sliding-window mean and variance.

use std::collections::VecDeque;

use num_traits::Float;

use super::count_as;
use crate::math::powi;
use crate::types::StatsError;

/// Running mean and variance over the last `capacity` observations.
///
/// While filling (`len() < capacity`) every update appends. Once full, each
/// update evicts the oldest value before appending, so the window size
/// stays at `capacity`.
///
/// # Complexity
///
/// O(1) amortised per update and O(capacity) space. The running sums are
/// rebuilt from the buffer once every `capacity` evictions, which bounds the
/// rounding drift from repeated subtraction.
///
/// # Examples
///
/// ```rust
/// use variate_core::stats::WindowedEstimator;
///
/// let mut stats: WindowedEstimator = WindowedEstimator::new(100).unwrap();
/// assert_eq!(stats.mean(), 0.0);
/// assert_eq!(stats.variance(), 0.0);
///
/// stats.extend([1.0, 3.0]);
/// assert_eq!(stats.mean(), 2.0);
/// assert_eq!(stats.variance(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct WindowedEstimator<T: Float = f64> {
    capacity: usize,
    window: VecDeque<T>,
    sum: T,
    sum_sq: T,
    evictions_since_rebuild: usize,
}

impl<T: Float> WindowedEstimator<T> {
    /// Creates an empty estimator holding at most `capacity` observations.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidWindowCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, StatsError> {
        if capacity == 0 {
            return Err(StatsError::InvalidWindowCapacity(capacity));
        }
        Ok(Self {
            capacity,
            window: VecDeque::with_capacity(capacity),
            sum: T::zero(),
            sum_sq: T::zero(),
            evictions_since_rebuild: 0,
        })
    }

    /// Adds an observation, evicting the oldest one when the window is full.
    pub fn update(&mut self, value: T) {
        if self.window.len() == self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                self.sum = self.sum - oldest;
                self.sum_sq = self.sum_sq - powi(oldest, 2);
                self.evictions_since_rebuild += 1;
            }
        }

        self.window.push_back(value);
        self.sum = self.sum + value;
        self.sum_sq = self.sum_sq + powi(value, 2);

        if self.evictions_since_rebuild >= self.capacity {
            self.rebuild_sums();
        }
    }

    fn rebuild_sums(&mut self) {
        let (sum, sum_sq) = self
            .window
            .iter()
            .fold((T::zero(), T::zero()), |(s, s2), &v| (s + v, s2 + powi(v, 2)));
        self.sum = sum;
        self.sum_sq = sum_sq;
        self.evictions_since_rebuild = 0;
        tracing::trace!(capacity = self.capacity, "Rebuilt window sums");
    }

    /// Mean of the current window, or zero when empty.
    pub fn mean(&self) -> T {
        if self.window.is_empty() {
            return T::zero();
        }
        self.sum / count_as(self.window.len())
    }

    /// Population variance `E[x²] − E[x]²` of the current window, or zero
    /// when empty.
    ///
    /// Clamped at zero, since cancellation can leave a tiny negative value
    /// for a constant window.
    pub fn variance(&self) -> T {
        if self.window.is_empty() {
            return T::zero();
        }
        let n: T = count_as(self.window.len());
        let mean = self.sum / n;
        (self.sum_sq / n - powi(mean, 2)).max(T::zero())
    }

    /// Square root of [`WindowedEstimator::variance`].
    pub fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    /// Number of observations currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` before the first update.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns `true` once the window holds `capacity` observations.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }

    /// Maximum number of observations kept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Observations in the window, oldest first.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.window.iter().copied()
    }

    /// Discards every observation, keeping the capacity.
    pub fn clear(&mut self) {
        self.window.clear();
        self.sum = T::zero();
        self.sum_sq = T::zero();
        self.evictions_since_rebuild = 0;
    }
}

impl<T: Float> Extend<T> for WindowedEstimator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}
