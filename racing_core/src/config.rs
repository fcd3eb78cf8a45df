//! Fixed rules of the race.
//!
//! These are system constants, not per-race parameters.

/// Fewest racers a roster may hold (inclusive).
pub const MIN_RACERS: usize = 2;

/// Most racers a roster may hold (inclusive).
pub const MAX_RACERS: usize = 10;

/// Inclusive upper bound of a single draw; draws fall in `[0, MAX_RANDOM_NUMBER]`.
pub const MAX_RANDOM_NUMBER: u32 = 9;

/// Minimum drawn value that moves a racer forward.
pub const ADVANCE_THRESHOLD: u32 = 4;

// Compile-time sanity checks on the rule set.
const _: () = assert!(MIN_RACERS >= 1);
const _: () = assert!(MIN_RACERS <= MAX_RACERS);
const _: () = assert!(ADVANCE_THRESHOLD <= MAX_RANDOM_NUMBER);
