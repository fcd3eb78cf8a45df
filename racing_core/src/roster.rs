//! Roster - the validated, fixed-membership field of racers.
//!
//! # Lifecycle
//!
//! ```text
//! names ──► Racer::new (each) ──► unique? ──► size in range? ──► Roster
//!                                    │              │
//!                               DuplicateName  InvalidRosterSize
//! ```
//!
//! After construction the membership never changes; only positions move,
//! one [`Roster::advance_round`] at a time.

use crate::config::{MAX_RACERS, MAX_RANDOM_NUMBER, MIN_RACERS};
use crate::error::RaceError;
use crate::racer::Racer;
use racing_env::RandomDraw;
use std::collections::HashSet;

/// An ordered, fixed set of uniquely named racers.
///
/// Insertion order is authoritative for every report the roster produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    racers: Box<[Racer]>,
}

impl Roster {
    /// Builds a roster from racer names, all starting at position 0.
    ///
    /// # Errors
    /// - `RaceError::EmptyName` if a name is blank
    /// - `RaceError::DuplicateName` if two names coincide (checked first)
    /// - `RaceError::InvalidRosterSize` if the count is outside `[MIN_RACERS, MAX_RACERS]`
    pub fn new<I, S>(names: I) -> Result<Self, RaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let racers = names
            .into_iter()
            .map(Racer::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_racers(racers)
    }

    /// Builds a roster from already-constructed racers, keeping their positions.
    ///
    /// Same validation as [`Roster::new`], uniqueness before size.
    pub fn from_racers(racers: Vec<Racer>) -> Result<Self, RaceError> {
        validate_unique(&racers)?;
        validate_size(&racers)?;

        Ok(Self {
            racers: racers.into_boxed_slice(),
        })
    }

    /// Runs one round: every racer takes exactly one fresh draw, in roster order.
    pub fn advance_round<D: RandomDraw + ?Sized>(&mut self, draw: &mut D) {
        for racer in self.racers.iter_mut() {
            racer.advance(draw.draw(MAX_RANDOM_NUMBER));
        }
    }

    /// Each racer's `"name : position"`, in roster order.
    pub fn results(&self) -> Vec<String> {
        self.racers.iter().map(Racer::formatted_result).collect()
    }

    /// Names of every racer tied at the leading position, in roster order.
    pub fn winners(&self) -> Vec<&str> {
        let Some(leader) = self
            .racers
            .iter()
            .max_by(|a, b| a.compare_position(b))
        else {
            return Vec::new();
        };

        self.racers
            .iter()
            .filter(|racer| leader.same_position(racer))
            .map(Racer::name)
            .collect()
    }

    /// Read-only view of the racers, in roster order.
    pub fn racers(&self) -> &[Racer] {
        &self.racers
    }

    pub fn len(&self) -> usize {
        self.racers.len()
    }

    /// True iff the roster holds no racers; never true once construction succeeded.
    pub fn is_empty(&self) -> bool {
        self.racers.is_empty()
    }
}

fn validate_unique(racers: &[Racer]) -> Result<(), RaceError> {
    let mut seen = HashSet::with_capacity(racers.len());
    for racer in racers {
        if !seen.insert(racer.name()) {
            return Err(RaceError::DuplicateName(racer.name().to_string()));
        }
    }
    Ok(())
}

fn validate_size(racers: &[Racer]) -> Result<(), RaceError> {
    let count = racers.len();
    if !(MIN_RACERS..=MAX_RACERS).contains(&count) {
        return Err(RaceError::InvalidRosterSize {
            count,
            min: MIN_RACERS,
            max: MAX_RACERS,
        });
    }
    Ok(())
}
