//! The source of randomness consumed by the generators.

use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Every [`Rng`] is a `Draw`. Tests may implement this trait directly to
/// replay a fixed sequence of draws.
pub trait Draw {
    /// Returns an integer uniformly distributed in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> Draw for R {
    #[inline]
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}
