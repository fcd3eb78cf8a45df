//! Racing Core - Racer and Roster domain model
//!
//! A fixed roster of named racers advances round by round on random draws;
//! the roster then resolves which racer(s) ended furthest ahead.
//!
//! 1. **Racer**: a name plus a monotonic position
//! 2. **Roster**: validated, fixed membership; drives rounds; resolves ties
//!
//! All randomness comes through [`racing_env::RandomDraw`], so a scripted
//! source makes any race reproducible.

pub mod config;
pub mod error;
pub mod racer;
pub mod roster;

// Re-export key types for convenience
pub use config::{ADVANCE_THRESHOLD, MAX_RACERS, MAX_RANDOM_NUMBER, MIN_RACERS};
pub use error::RaceError;
pub use racer::Racer;
pub use roster::Roster;
