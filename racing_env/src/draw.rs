//! Core random-draw trait consumed by the race domain.

/// The single capability the race domain needs from its environment.
///
/// # Implementations
///
/// - **Production**: `ThreadRngDraw` - OS-seeded thread-local RNG
/// - **Simulation**: `SimDraw` - `ChaCha8Rng(seed)` in `racing_sim`
/// - **Testing**: `ScriptedDraw` - fixed values, in order
///
/// # Determinism
///
/// Callers make no assumption about seeding. A source that is seeded
/// reports it through [`RandomDraw::seed`] so runs can be replayed.
pub trait RandomDraw: Send {
    /// Returns one value uniformly distributed in `[0, max]` (inclusive).
    fn draw(&mut self, max: u32) -> u32;

    /// Returns the seed behind this source (for logging/replay).
    ///
    /// Unseeded sources return 0.
    fn seed(&self) -> u64;
}

impl<D: RandomDraw + ?Sized> RandomDraw for &mut D {
    fn draw(&mut self, max: u32) -> u32 {
        (**self).draw(max)
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }
}
