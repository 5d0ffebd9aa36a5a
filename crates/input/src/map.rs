//! Mapping from typed lines and terminal key events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one line of typed input to a game action.
///
/// Only the first character matters. An empty line, a bare newline, or an
/// unbound first character all map to `None`.
pub fn parse_line(line: &str) -> Option<GameAction> {
    line.chars().next().and_then(GameAction::from_char)
}

/// Map a key press to a game action (live mode).
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => GameAction::from_char(c),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
