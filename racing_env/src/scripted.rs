//! Fixed-sequence draw source for tests.

use crate::RandomDraw;

/// Replays a scripted sequence of draws.
///
/// Values come back in order and the script cycles once exhausted.
/// Each value is clamped to the `max` the caller asks for, so a script
/// can never produce a draw outside the declared range. An empty script
/// always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    values: Vec<u32>,
    cursor: usize,
    taken: usize,
}

impl ScriptedDraw {
    /// Creates a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
            taken: 0,
        }
    }

    /// Creates a source that always yields `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.taken
    }
}

impl RandomDraw for ScriptedDraw {
    fn draw(&mut self, max: u32) -> u32 {
        self.taken += 1;

        if self.values.is_empty() {
            return 0;
        }

        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value.min(max)
    }

    fn seed(&self) -> u64 {
        0
    }
}
