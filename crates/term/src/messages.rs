//! User-facing text for command results.

use kitten_idle_core::{GameError, Outcome, PersistOp};

pub const UNKNOWN_COMMAND: &str = "Unknown command.";
pub const FAREWELL: &str = "Goodbye.";

/// One line describing what a command did.
pub fn describe(result: &Result<Outcome, GameError>) -> String {
    match result {
        Ok(Outcome::Gathered) => "You gathered yarn. +1".to_string(),
        Ok(Outcome::KittenBought(n)) => format!("A kitten joins! Kittens: {n}"),
        Ok(Outcome::BowlBought(n)) => format!("Bought a food bowl. Bowls: {n}"),
        Ok(Outcome::Saved(path)) => format!("Saved to {}", path.display()),
        Ok(Outcome::Loaded(path)) => format!("Loaded from {}", path.display()),
        // Front ends stop before describing a quit; kept so the match stays total.
        Ok(Outcome::Quit) => FAREWELL.to_string(),
        Err(GameError::InsufficientFunds { .. }) => "Not enough yarn.".to_string(),
        Err(GameError::CountLimit { .. }) => "You can't own any more of those.".to_string(),
        Err(GameError::Persistence {
            op: PersistOp::Save,
            ..
        }) => "Save failed.".to_string(),
        Err(GameError::Persistence {
            op: PersistOp::Load,
            ..
        }) => "Load failed (no save yet?).".to_string(),
    }
}
