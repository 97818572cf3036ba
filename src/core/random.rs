//! The engine's only source of randomness.
//!
//! Fleet generation and the automated combatant draw every random number
//! through [`UniformSource`], so hosts pick the generator and tests can script
//! exact sequences.

use rand::Rng;

/// Provider of uniformly distributed integers.
pub trait UniformSource {
    /// Return an integer in `0..upper`. `upper` is never 0.
    fn below(&mut self, upper: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}
