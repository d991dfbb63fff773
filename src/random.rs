//! This module contains the [RandomSource] abstraction over which all random
//! decisions of the cage generation are made.
//!
//! Every random number generator of the [rand] crate is a random source, so
//! production code simply hands in `rand::thread_rng()`, while tests use a
//! seeded generator (or a scripted source) to make the generated cages
//! reproducible.

use rand::Rng;

/// A provider of uniformly distributed random indices. The cage generation
/// never consults a global random facility, only the random source it is
/// given.
///
/// This trait is blanket-implemented for all types implementing
/// [Rng](rand::Rng).
pub trait RandomSource {

    /// Draws a uniformly distributed index from the range `[0, bound[`.
    /// `bound` must be greater than 0.
    fn below(&mut self, bound: usize) -> usize;

    /// Draws a uniformly distributed number from the range `[min, max]`
    /// (inclusive). `min` must not be greater than `max`.
    fn between(&mut self, min: usize, max: usize) -> usize {
        min + self.below(max - min + 1)
    }

    /// Shuffles the given slice in place into a uniformly random permutation
    /// using the Fisher-Yates algorithm. The slice is processed from its end,
    /// drawing one index per position.
    fn shuffle<T>(&mut self, values: &mut [T]) {
        for i in (1..values.len()).rev() {
            let j = self.below(i + 1);
            values.swap(i, j);
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
