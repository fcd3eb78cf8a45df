//! JSON exporter for finished races.
//!
//! Produces the machine-readable form of a race for `racing-sim --json`.

use crate::runner::RaceOutcome;
use racing_core::Racer;
use serde::{Deserialize, Serialize};

/// Position of a racer at a point in the race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacerStanding {
    pub name: String,
    pub position: i64,
}

impl From<&Racer> for RacerStanding {
    fn from(racer: &Racer) -> Self {
        Self {
            name: racer.name().to_string(),
            position: racer.position(),
        }
    }
}

/// One round of the race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFrame {
    pub round: u32,
    pub standings: Vec<RacerStanding>,
}

/// Complete race export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceExport {
    /// Seed used (0 = unseeded)
    pub seed: u64,

    /// All rounds, in order
    pub rounds: Vec<RoundFrame>,

    /// Names tied at the lead
    pub winners: Vec<String>,
}

impl RaceExport {
    /// Renders pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&RaceOutcome> for RaceExport {
    fn from(outcome: &RaceOutcome) -> Self {
        Self {
            seed: outcome.seed,
            rounds: outcome
                .rounds
                .iter()
                .map(|snapshot| RoundFrame {
                    round: snapshot.round,
                    standings: snapshot.standings.clone(),
                })
                .collect(),
            winners: outcome.winners.clone(),
        }
    }
}
