//! Race runner - builds a roster and drives it through a fixed number of rounds.

use crate::error::SimError;
use crate::exporter::RacerStanding;

use racing_core::Roster;
use racing_env::RandomDraw;
use std::fmt::Write;
use tracing::{debug, info};

/// Default number of rounds per race.
const DEFAULT_ROUNDS: u32 = 5;

/// Most rounds a single race may run; every round is kept in the outcome.
pub const MAX_ROUNDS: u32 = 10_000;

/// State of the field right after one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// 1-based round number
    pub round: u32,

    /// `"name : position"` lines, in roster order
    pub results: Vec<String>,

    /// Structured positions, in roster order
    pub standings: Vec<RacerStanding>,
}

/// Everything a finished race produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOutcome {
    /// Seed of the draw source (0 = unseeded)
    pub seed: u64,

    /// One snapshot per round, in order
    pub rounds: Vec<RoundSnapshot>,

    /// Names tied at the lead, in roster order
    pub winners: Vec<String>,
}

impl RaceOutcome {
    /// Renders the console transcript: each round's results, then the winners.
    pub fn render(&self) -> String {
        let mut out = String::from("Race results\n");

        for snapshot in &self.rounds {
            for line in &snapshot.results {
                let _ = writeln!(out, "{}", line);
            }
            out.push('\n');
        }

        let _ = write!(out, "Winners: {}", self.winners.join(", "));
        out
    }
}

/// Runs races against a draw source.
pub struct RaceRunner<D: RandomDraw> {
    /// Source of every draw in the race
    draw: D,

    /// Rounds per race
    rounds: u32,
}

impl<D: RandomDraw> RaceRunner<D> {
    /// Creates a new race runner.
    pub fn new(draw: D) -> Self {
        Self {
            draw,
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Builds a roster from `names` and races it.
    ///
    /// Repeated calls keep consuming the same draw source, so two races from
    /// one runner are not identical even when seeded.
    ///
    /// # Errors
    /// - `SimError::TooManyRounds` if more than `MAX_ROUNDS` rounds are configured
    /// - `SimError::Race` for any roster construction failure
    pub fn run<I, S>(&mut self, names: I) -> Result<RaceOutcome, SimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.rounds > MAX_ROUNDS {
            return Err(SimError::TooManyRounds {
                rounds: self.rounds,
                max: MAX_ROUNDS,
            });
        }

        let mut roster = Roster::new(names)?;
        let seed = self.draw.seed();

        info!(
            "Starting race: {} racers, {} rounds (seed={})",
            roster.len(),
            self.rounds,
            seed
        );

        let mut rounds = Vec::with_capacity(self.rounds as usize);
        for round in 1..=self.rounds {
            roster.advance_round(&mut self.draw);

            debug!("  round {} | leaders={:?}", round, roster.winners());

            rounds.push(RoundSnapshot {
                round,
                results: roster.results(),
                standings: roster.racers().iter().map(RacerStanding::from).collect(),
            });
        }

        let winners: Vec<String> = roster.winners().into_iter().map(str::to_string).collect();
        info!("Race finished: winners={}", winners.join(", "));

        Ok(RaceOutcome {
            seed,
            rounds,
            winners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SimDraw;
    use racing_core::RaceError;
    use racing_env::ScriptedDraw;

    #[test]
    fn test_runner_default_rounds() {
        let mut runner = RaceRunner::new(ScriptedDraw::default());
        let outcome = runner.run(["a", "b"]).unwrap();
        assert_eq!(outcome.rounds.len(), DEFAULT_ROUNDS as usize);
    }

    #[test]
    fn test_runner_rejects_too_many_rounds() {
        let mut runner = RaceRunner::new(ScriptedDraw::constant(0)).with_rounds(u32::MAX);

        let err = runner.run(["a", "b"]).unwrap_err();

        assert!(matches!(
            err,
            SimError::TooManyRounds { rounds: u32::MAX, max: MAX_ROUNDS }
        ));
        assert_eq!(runner.draw.draws_taken(), 0);
    }

    #[test]
    fn test_runner_accepts_max_rounds() {
        let mut runner = RaceRunner::new(ScriptedDraw::constant(0)).with_rounds(MAX_ROUNDS);

        let outcome = runner.run(["a", "b"]).unwrap();

        assert_eq!(outcome.rounds.len(), MAX_ROUNDS as usize);
    }

    #[test]
    fn test_runner_scripted_race() {
        let mut runner = RaceRunner::new(ScriptedDraw::new(vec![4, 4, 1])).with_rounds(2);

        let outcome = runner.run(["car1", "car2", "car3"]).unwrap();

        assert_eq!(outcome.seed, 0);
        assert_eq!(outcome.rounds.len(), 2);
        assert_eq!(outcome.rounds[0].results, vec!["car1 : 1", "car2 : 1", "car3 : 0"]);
        assert_eq!(outcome.rounds[1].results, vec!["car1 : 2", "car2 : 2", "car3 : 0"]);
        assert_eq!(outcome.winners, vec!["car1", "car2"]);
    }

    #[test]
    fn test_runner_snapshot_standings_match_results() {
        let mut runner = RaceRunner::new(ScriptedDraw::new(vec![9, 0])).with_rounds(3);

        let outcome = runner.run(["a", "b"]).unwrap();
        let last = outcome.rounds.last().unwrap();

        assert_eq!(last.round, 3);
        assert_eq!(last.standings[0].name, "a");
        assert_eq!(last.standings[0].position, 3);
        assert_eq!(last.standings[1].position, 0);
    }

    #[test]
    fn test_runner_zero_rounds() {
        let mut runner = RaceRunner::new(ScriptedDraw::constant(9)).with_rounds(0);

        let outcome = runner.run(["a", "b"]).unwrap();

        assert!(outcome.rounds.is_empty());
        assert_eq!(outcome.winners, vec!["a", "b"]);
    }

    #[test]
    fn test_runner_rejects_bad_roster() {
        let mut runner = RaceRunner::new(ScriptedDraw::default());

        assert!(matches!(
            runner.run(["x", "x"]).unwrap_err(),
            SimError::Race(RaceError::DuplicateName(name)) if name == "x"
        ));
        assert!(matches!(
            runner.run(["a"]).unwrap_err(),
            SimError::Race(RaceError::InvalidRosterSize { count: 1, .. })
        ));
    }

    #[test]
    fn test_runner_seeded_determinism() {
        let names = ["pobi", "woni", "jun", "crong"];

        let a = RaceRunner::new(SimDraw::new(42)).with_rounds(10).run(names).unwrap();
        let b = RaceRunner::new(SimDraw::new(42)).with_rounds(10).run(names).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_render_transcript() {
        let mut runner = RaceRunner::new(ScriptedDraw::new(vec![4, 1])).with_rounds(2);

        let outcome = runner.run(["car1", "car2"]).unwrap();

        assert_eq!(
            outcome.render(),
            "Race results\n\
             car1 : 1\ncar2 : 0\n\n\
             car1 : 2\ncar2 : 0\n\n\
             Winners: car1"
        );
    }

    #[test]
    fn test_render_tied_winners() {
        let mut runner = RaceRunner::new(ScriptedDraw::constant(0)).with_rounds(1);

        let outcome = runner.run(["a", "b", "c"]).unwrap();

        assert!(outcome.render().ends_with("Winners: a, b, c"));
    }
}
