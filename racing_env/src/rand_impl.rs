//! Production implementation of RandomDraw using the thread-local RNG.

use crate::RandomDraw;
use rand::Rng;

/// Production draw source backed by OS entropy.
///
/// Every call samples `rand::thread_rng()`, so there is no seed to
/// report and no way to replay a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngDraw;

impl ThreadRngDraw {
    /// Creates a new ThreadRngDraw.
    pub fn new() -> Self {
        Self
    }
}

impl RandomDraw for ThreadRngDraw {
    fn draw(&mut self, max: u32) -> u32 {
        rand::thread_rng().gen_range(0..=max)
    }

    fn seed(&self) -> u64 {
        // Production is not seeded
        0
    }
}
