//! Fixed-timestep accumulator
//!
//! Wall-clock time accumulates into a lag counter and whole ticks are
//! drained from it, so gameplay speed never depends on how fast the
//! caller renders or polls.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Longest slice of wall-clock time accepted per advance; anything more
/// (a dropped frame, a suspended process) is discarded rather than
/// replayed
const MAX_FRAME_MS: f32 = 250.0;

/// Converts elapsed wall-clock time into whole simulation ticks
#[derive(Debug, Default)]
pub struct FixedTimestep {
    lag_ms: f32,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self { lag_ms: 0.0 }
    }

    /// Feed elapsed milliseconds and run the ticks they cover
    ///
    /// Catch-up is capped at `MAX_SUBSTEPS` ticks per call; residual lag
    /// carries over to the next call. One-shot inputs are consumed by
    /// the first tick. Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, elapsed_ms: f32) -> u32 {
        self.lag_ms += elapsed_ms.min(MAX_FRAME_MS);

        let mut input = *input;
        let mut steps = 0;
        while self.lag_ms >= TICK_MS && steps < MAX_SUBSTEPS {
            tick(state, &input);
            self.lag_ms -= TICK_MS;
            steps += 1;
            input.restart = false;
        }
        steps
    }

    /// Discard accumulated lag (after a pause or a snapshot load)
    pub fn reset(&mut self) {
        self.lag_ms = 0.0;
    }
}
