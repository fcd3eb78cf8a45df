//! Racer - a named participant with a monotonic position.

use crate::config::ADVANCE_THRESHOLD;
use crate::error::RaceError;
use std::cmp::Ordering;
use std::fmt;

/// A single racer.
///
/// Position starts at 0 and only ever moves forward, by exactly one step
/// per advancing draw.
///
/// Ordering is exposed through [`Racer::compare_position`] rather than
/// `Ord`: two racers compare by position alone and the name plays no part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Racer {
    /// Display name (immutable after creation)
    name: String,

    /// Cumulative position
    position: i64,
}

impl Racer {
    /// Creates a racer at the starting line.
    ///
    /// # Errors
    /// Returns `RaceError::EmptyName` if `name` is empty or whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, RaceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RaceError::EmptyName);
        }

        Ok(Self { name, position: 0 })
    }

    /// Applies one drawn value: moves forward by 1 iff `drawn >= ADVANCE_THRESHOLD`.
    pub fn advance(&mut self, drawn: u32) {
        if drawn >= ADVANCE_THRESHOLD {
            self.position += 1;
        }
    }

    /// Total order on position alone.
    pub fn compare_position(&self, other: &Racer) -> Ordering {
        self.position.cmp(&other.position)
    }

    /// True iff both racers sit at the same position, whoever they are.
    pub fn same_position(&self, other: &Racer) -> bool {
        self.position == other.position
    }

    /// Renders `"name : position"`.
    pub fn formatted_result(&self) -> String {
        format!("{} : {}", self.name, self.position)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> i64 {
        self.position
    }
}

impl fmt::Display for Racer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_result())
    }
}
