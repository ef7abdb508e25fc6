//! # Random Sources
//!
//! Every variance term in the emitter draws one value uniform in `[-1, 1]`.
//! The source is injected so runs can be replayed exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the signed unit samples used for variance.
pub trait RandomSource {
    /// Returns a value uniform in `[-1, 1]`.
    fn signed_unit(&mut self) -> f32;
}

/// Seeded ChaCha8 source. Same seed = same particles, ALWAYS.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for ChaChaSource {
    #[inline]
    fn signed_unit(&mut self) -> f32 {
        self.rng.gen_range(-1.0f32..=1.0)
    }
}

/// Replays a fixed list of samples, wrapping at the end.
///
/// An empty list yields `0.0`, which turns every variance off.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    values: Vec<f32>,
    cursor: usize,
}

impl ReplaySource {
    /// Creates a source replaying `values` in order.
    #[must_use]
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn signed_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
