//! Front-end configuration.

use std::path::PathBuf;
use std::time::Duration;

use kitten_idle_core::TickClock;

use crate::types::{DEFAULT_SAVE_PATH, TICKS_PER_COMMAND, TICK_MS};

/// Settings shared by the line and live front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_path: PathBuf,
    pub clock: TickClock,
    /// Sleep between passive ticks in line mode. Presentation only.
    pub pacing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            clock: TickClock::new(TICK_MS, TICKS_PER_COMMAND),
            pacing: true,
        }
    }
}

impl Config {
    /// Create from environment variables.
    ///
    /// - `KITTEN_IDLE_SAVE_PATH`: save slot location (default `save.dat`)
    /// - `KITTEN_IDLE_PACING`: `0`/`false` disables the delay between ticks
    pub fn from_env() -> Self {
        use std::env;

        let save_path = env::var("KITTEN_IDLE_SAVE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));

        let pacing = env::var("KITTEN_IDLE_PACING")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(true);

        Self {
            save_path,
            pacing,
            ..Self::default()
        }
    }

    /// Line-mode config for tests: no sleeping between ticks.
    pub fn unpaced(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
            pacing: false,
            ..Self::default()
        }
    }

    /// Delay between passive ticks, if pacing is on.
    pub fn pace_delay(&self) -> Option<Duration> {
        self.pacing.then(|| self.clock.tick_duration())
    }
}
