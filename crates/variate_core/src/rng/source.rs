//! The uniform source abstraction.

/// A stream of uniform variates.
///
/// Implemented by [`Lcg`](super::Lcg) and [`SeededRng`](super::SeededRng).
/// The transform and sampler only rely on this output contract, so any
/// caller-provided uniform stream can drive them.
pub trait UniformSource {
    /// Draws the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Fills the buffer with consecutive draws.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }

    /// Collects the next `n` draws into a new vector.
    fn take_uniform(&mut self, n: usize) -> Vec<f64> {
        let mut values = vec![0.0; n];
        self.fill_uniform(&mut values);
        values
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
