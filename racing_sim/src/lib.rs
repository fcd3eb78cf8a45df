//! Racing Deterministic Simulation Harness
//!
//! Runs a race end to end through an injected draw source:
//! - **Seeded**: `SimDraw` derives all draws from one 64-bit seed
//! - **Unseeded**: `racing_env::ThreadRngDraw` for a real, unrepeatable race
//!
//! # Usage
//!
//! ```
//! use racing_sim::{RaceRunner, SimDraw};
//!
//! let outcome = RaceRunner::new(SimDraw::new(42))
//!     .with_rounds(5)
//!     .run(["pobi", "woni", "jun"])
//!     .unwrap();
//!
//! assert_eq!(outcome.rounds.len(), 5);
//! assert!(!outcome.winners.is_empty());
//! ```

mod draw;
mod error;
mod exporter;
mod runner;

pub use draw::SimDraw;
pub use error::SimError;
pub use exporter::{RaceExport, RacerStanding, RoundFrame};
pub use runner::{RaceOutcome, RaceRunner, RoundSnapshot, MAX_ROUNDS};
