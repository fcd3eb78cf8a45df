//! Seeded draw source for deterministic races.

use racing_env::RandomDraw;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

/// Draw source backed by a seeded ChaCha8 RNG.
///
/// Two sources built from the same seed produce the same draws in the
/// same order, so a race can be replayed from its seed alone.
#[derive(Debug, Clone)]
pub struct SimDraw {
    /// Master seed for this race
    seed: u64,

    /// Deterministic RNG
    rng: ChaCha8Rng,
}

impl SimDraw {
    /// Creates a new SimDraw with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomDraw for SimDraw {
    fn draw(&mut self, max: u32) -> u32 {
        Uniform::new_inclusive(0, max).sample(&mut self.rng)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
