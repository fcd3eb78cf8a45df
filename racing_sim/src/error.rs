//! Error types for the simulation harness.

use racing_core::RaceError;
use thiserror::Error;

/// Errors surfaced by the `racing-sim` binary.
#[derive(Debug, Error)]
pub enum SimError {
    /// The roster could not be built
    #[error(transparent)]
    Race(#[from] RaceError),

    /// More rounds requested than a race may run
    #[error("Too many rounds: {rounds} (max {max})")]
    TooManyRounds { rounds: u32, max: u32 },

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
