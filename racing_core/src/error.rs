//! Error types for roster construction.

use thiserror::Error;

/// Errors raised while building a roster.
///
/// Only construction can fail. Once a `Roster` exists, advancing rounds
/// and querying results are infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    /// Two or more supplied names are textually identical
    #[error("Duplicate racer name: {0}")]
    DuplicateName(String),

    /// Supplied name count falls outside the allowed range
    #[error("Invalid roster size: {count} (expected {min}..={max})")]
    InvalidRosterSize {
        count: usize,
        min: usize,
        max: usize,
    },

    /// A racer name was empty or whitespace only
    #[error("Racer name must not be empty")]
    EmptyName,
}
