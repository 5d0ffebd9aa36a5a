//! Passive-time simulation.
//!
//! Blocking input means no time passes while the player is typing, so every
//! command is followed by a short fixed burst of ticks instead.

use std::time::Duration;

use crate::game_state::GameState;
use crate::types::{TICKS_PER_COMMAND, TICK_MS};

/// Fixed timestep used to approximate continuous passive income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    tick_ms: u32,
    ticks_per_burst: u32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_MS, TICKS_PER_COMMAND)
    }
}

impl TickClock {
    pub fn new(tick_ms: u32, ticks_per_burst: u32) -> Self {
        Self {
            tick_ms,
            ticks_per_burst,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn ticks_per_burst(&self) -> u32 {
        self.ticks_per_burst
    }

    /// Length of one tick as wall-clock time.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    /// Length of one tick in simulated seconds.
    pub fn dt_secs(&self) -> f64 {
        f64::from(self.tick_ms) / 1000.0
    }

    /// Apply a single tick of passive income.
    pub fn advance(&self, state: &mut GameState) {
        state.tick(self.dt_secs());
    }

    /// Apply one full burst, calling `pace` after each tick.
    ///
    /// `pace` only controls presentation (e.g. sleeping between ticks); the
    /// yarn gained does not depend on it.
    pub fn burst(&self, state: &mut GameState, mut pace: impl FnMut(Duration)) {
        let step = self.tick_duration();
        for _ in 0..self.ticks_per_burst {
            self.advance(state);
            pace(step);
        }
    }
}
