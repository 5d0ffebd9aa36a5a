//! Status screen: maps a `GameState` into lines of text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use kitten_idle_core::GameState;

pub const TITLE: &str = "=== Kitten Idle (MVP) ===";

/// Text layout of the status screen and command menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusView {
    /// Use single-key wording for the live front end.
    live: bool,
}

impl StatusView {
    pub fn live() -> Self {
        Self { live: true }
    }

    /// Render the status block and menu, one entry per line.
    pub fn lines(&self, state: &GameState) -> Vec<String> {
        let mut lines = vec![
            TITLE.to_string(),
            format!("Yarn: {:.2}", state.yarn()),
            format!("Kittens: {} | Bowls: {}", state.kittens(), state.bowls()),
            format!("Passive rate: {:.2} yarn/s", state.passive_rate()),
            String::new(),
            if self.live {
                "Keys:".to_string()
            } else {
                "Commands:".to_string()
            },
            "  g = gather yarn (+1)".to_string(),
            format!("  b = buy kitten (cost {:.2})", state.kitten_cost()),
            format!("  u = buy bowl upgrade (cost {:.2})", state.bowl_cost()),
            "  s = save | l = load | q = quit".to_string(),
        ];
        if self.live {
            lines.push(String::new());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_screen() {
        let lines = StatusView::default().lines(&GameState::new());
        assert_eq!(lines[0], "=== Kitten Idle (MVP) ===");
        assert_eq!(lines[1], "Yarn: 0.00");
        assert_eq!(lines[2], "Kittens: 0 | Bowls: 0");
        assert_eq!(lines[3], "Passive rate: 0.00 yarn/s");
        assert_eq!(lines[5], "Commands:");
        assert_eq!(lines[7], "  b = buy kitten (cost 10.00)");
        assert_eq!(lines[8], "  u = buy bowl upgrade (cost 25.00)");
    }

    #[test]
    fn test_screen_tracks_upgrades() {
        let state = GameState::from_parts(3.456, 2, 1, 0.5);
        let lines = StatusView::default().lines(&state);
        assert_eq!(lines[1], "Yarn: 3.46");
        assert_eq!(lines[2], "Kittens: 2 | Bowls: 1");
        assert_eq!(lines[3], "Passive rate: 1.25 yarn/s");
        assert_eq!(lines[7], "  b = buy kitten (cost 14.00)");
        assert_eq!(lines[8], "  u = buy bowl upgrade (cost 35.00)");
    }
}
