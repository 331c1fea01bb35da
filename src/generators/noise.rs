//! White noise generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Module;

/// A white noise generator.
///
/// Each tick produces a uniformly distributed random value in [-1.0, 1.0].
/// There is no other internal state, so noise needs no frequency input.
///
/// The generator is generic over its RNG. The default uses [`StdRng`] seeded
/// from OS entropy (rather than a thread-local RNG) so the module stays
/// `Send` and can live behind a shared graph handle.
pub struct WhiteNoise<R: Rng = StdRng> {
    rng: R,
}

impl WhiteNoise<StdRng> {
    /// Creates a white noise generator seeded from OS entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use patchbay::{Module, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for WhiteNoise<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise generator with a caller-supplied RNG.
    ///
    /// Useful for deterministic output in tests.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Module for WhiteNoise<R> {
    fn next_sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
