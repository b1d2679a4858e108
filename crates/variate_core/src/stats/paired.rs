//! Fixed-capacity sliding-window covariance for two aligned streams.

use std::collections::VecDeque;

use num_traits::Float;

use super::count_as;
use crate::math::powi;
use crate::types::StatsError;

/// Running sums over one shared window of `(x, y)` observations.
#[derive(Clone, Copy, Debug)]
struct Sums<T> {
    x: T,
    y: T,
    xx: T,
    yy: T,
    xy: T,
}

impl<T: Float> Sums<T> {
    fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            xx: T::zero(),
            yy: T::zero(),
            xy: T::zero(),
        }
    }

    fn add(&mut self, x: T, y: T) {
        self.x = self.x + x;
        self.y = self.y + y;
        self.xx = self.xx + powi(x, 2);
        self.yy = self.yy + powi(y, 2);
        self.xy = self.xy + x * y;
    }

    fn remove(&mut self, x: T, y: T) {
        self.x = self.x - x;
        self.y = self.y - y;
        self.xx = self.xx - powi(x, 2);
        self.yy = self.yy - powi(y, 2);
        self.xy = self.xy - x * y;
    }
}

/// Windowed means, variances and covariance of two paired streams.
///
/// Each update takes one observation from each stream; both share a single
/// window of `capacity` pairs, and eviction drops the oldest pair.
///
/// # Examples
///
/// ```rust
/// use variate_core::stats::PairedWindowedEstimator;
///
/// let mut paired = PairedWindowedEstimator::<f64>::new(4).unwrap();
/// assert_eq!(paired.covariance(), 0.0);
///
/// for (x, y) in [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)] {
///     paired.update(x, y);
/// }
/// assert!((paired.covariance() - 4.0 / 3.0).abs() < 1e-12);
/// assert!((paired.correlation().unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct PairedWindowedEstimator<T: Float = f64> {
    capacity: usize,
    window: VecDeque<(T, T)>,
    sums: Sums<T>,
    evictions_since_rebuild: usize,
}

impl<T: Float> PairedWindowedEstimator<T> {
    /// Creates an empty estimator holding at most `capacity` pairs.
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
            sums: Sums::zero(),
            evictions_since_rebuild: 0,
        })
    }

    /// Adds one pair, evicting the oldest pair when the window is full.
    pub fn update(&mut self, x: T, y: T) {
        if self.window.len() == self.capacity {
            if let Some((old_x, old_y)) = self.window.pop_front() {
                self.sums.remove(old_x, old_y);
                self.evictions_since_rebuild += 1;
            }
        }

        self.window.push_back((x, y));
        self.sums.add(x, y);

        if self.evictions_since_rebuild >= self.capacity {
            let mut sums = Sums::zero();
            for &(x, y) in &self.window {
                sums.add(x, y);
            }
            self.sums = sums;
            self.evictions_since_rebuild = 0;
        }
    }

    fn moment(&self, sum: T) -> T {
        if self.window.is_empty() {
            return T::zero();
        }
        sum / count_as(self.window.len())
    }

    /// Mean of the `x` stream over the window.
    pub fn mean_x(&self) -> T {
        self.moment(self.sums.x)
    }

    /// Mean of the `y` stream over the window.
    pub fn mean_y(&self) -> T {
        self.moment(self.sums.y)
    }

    /// Population variance of the `x` stream, clamped at zero.
    pub fn variance_x(&self) -> T {
        (self.moment(self.sums.xx) - powi(self.mean_x(), 2)).max(T::zero())
    }

    /// Population variance of the `y` stream, clamped at zero.
    pub fn variance_y(&self) -> T {
        (self.moment(self.sums.yy) - powi(self.mean_y(), 2)).max(T::zero())
    }

    /// Population covariance `E[xy] − E[x]E[y]` over the window.
    ///
    /// Zero before the first update.
    pub fn covariance(&self) -> T {
        self.moment(self.sums.xy) - self.mean_x() * self.mean_y()
    }

    /// Pearson correlation, or `None` when either variance is zero.
    pub fn correlation(&self) -> Option<T> {
        let denominator = (self.variance_x() * self.variance_y()).sqrt();
        if denominator > T::zero() {
            let rho = self.covariance() / denominator;
            Some(rho.max(-T::one()).min(T::one()))
        } else {
            None
        }
    }

    /// Number of pairs currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` before the first update.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns `true` once the window holds `capacity` pairs.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }

    /// Maximum number of pairs kept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards every pair, keeping the capacity.
    pub fn clear(&mut self) {
        self.window.clear();
        self.sums = Sums::zero();
        self.evictions_since_rebuild = 0;
    }
}

impl<T: Float> Extend<(T, T)> for PairedWindowedEstimator<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.update(x, y);
        }
    }
}
