//! Session - command dispatch over an owned game state.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::GameError;
use crate::game_state::GameState;
use crate::save;
use crate::sim::TickClock;
use crate::types::GameAction;

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Gathered,
    /// New kitten count.
    KittenBought(u32),
    /// New bowl count.
    BowlBought(u32),
    Saved(PathBuf),
    Loaded(PathBuf),
    Quit,
}

/// A running game: the state, its save slot, and the passive clock.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    save_path: PathBuf,
    clock: TickClock,
}

impl Session {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self::with_state(GameState::new(), save_path)
    }

    pub fn with_state(state: GameState, save_path: impl Into<PathBuf>) -> Self {
        Self {
            state,
            save_path: save_path.into(),
            clock: TickClock::default(),
        }
    }

    pub fn with_clock(mut self, clock: TickClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn clock(&self) -> TickClock {
        self.clock
    }

    /// Dispatch one command.
    ///
    /// On error the state is exactly what it was before the call.
    pub fn handle(&mut self, action: GameAction) -> Result<Outcome, GameError> {
        debug!(action = action.as_str(), yarn = self.state.yarn, "dispatch");
        let result = match action {
            GameAction::Gather => {
                self.state.gather();
                Ok(Outcome::Gathered)
            }
            GameAction::BuyKitten => self.state.buy_kitten().map(Outcome::KittenBought),
            GameAction::BuyBowl => self.state.buy_bowl().map(Outcome::BowlBought),
            GameAction::Save => save::save(&self.state, &self.save_path)
                .map(|()| Outcome::Saved(self.save_path.clone())),
            GameAction::Load => save::load(&self.save_path).map(|loaded| {
                self.state = loaded;
                Outcome::Loaded(self.save_path.clone())
            }),
            GameAction::Quit => Ok(Outcome::Quit),
        };

        match &result {
            Ok(Outcome::Saved(path)) => info!(path = %path.display(), "game saved"),
            Ok(Outcome::Loaded(path)) => info!(
                path = %path.display(),
                yarn = self.state.yarn,
                kittens = self.state.kittens,
                bowls = self.state.bowls,
                "game loaded"
            ),
            Err(err @ GameError::Persistence { .. }) => warn!(error = %err, "save slot unavailable"),
            Err(err) => debug!(error = %err, "command rejected"),
            Ok(_) => {}
        }
        result
    }

    /// Apply a single passive tick.
    pub fn tick(&mut self) {
        self.clock.advance(&mut self.state);
    }

    /// Apply the post-command burst of passive ticks.
    pub fn simulate_burst(&mut self, pace: impl FnMut(std::time::Duration)) {
        self.clock.burst(&mut self.state, pace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_then_buy() {
        let mut session = Session::with_state(GameState::from_parts(9.0, 0, 0, 0.5), "unused.dat");
        assert_eq!(session.handle(GameAction::Gather).unwrap(), Outcome::Gathered);
        assert_eq!(
            session.handle(GameAction::BuyKitten).unwrap(),
            Outcome::KittenBought(1)
        );
        assert_eq!(session.state().yarn(), 0.0);
    }

    #[test]
    fn test_failed_purchase_leaves_state() {
        let before = GameState::from_parts(20.0, 6, 0, 0.5);
        let mut session = Session::with_state(before, "unused.dat");
        assert!(matches!(
            session.handle(GameAction::BuyKitten),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert!(matches!(
            session.handle(GameAction::BuyBowl),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_save_mutate_load_round_trip() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("save.dat");
        let saved = GameState::from_parts(57.3, 3, 1, 0.5);
        let mut session = Session::with_state(saved, &path);

        assert_eq!(
            session.handle(GameAction::Save).unwrap(),
            Outcome::Saved(path.clone())
        );
        session.handle(GameAction::Gather).unwrap();
        session.handle(GameAction::BuyBowl).unwrap();
        assert_ne!(*session.state(), saved);

        assert_eq!(
            session.handle(GameAction::Load).unwrap(),
            Outcome::Loaded(path.clone())
        );
        assert_eq!(*session.state(), saved);
    }

    #[test]
    fn test_load_without_save_keeps_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let before = GameState::from_parts(3.0, 1, 0, 0.5);
        let mut session = Session::with_state(before, temp.path().join("missing.dat"));
        assert!(matches!(
            session.handle(GameAction::Load),
            Err(GameError::Persistence { .. })
        ));
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_quit_does_not_touch_state() {
        let mut session = Session::new("unused.dat");
        assert_eq!(session.handle(GameAction::Quit).unwrap(), Outcome::Quit);
        assert_eq!(*session.state(), GameState::new());
    }

    #[test]
    fn test_burst_uses_session_clock() {
        let mut session = Session::with_state(GameState::from_parts(0.0, 2, 1, 0.5), "unused.dat")
            .with_clock(TickClock::new(100, 1));
        session.simulate_burst(|_| {});
        assert!((session.state().yarn() - 0.125).abs() < 1e-9);
    }
}
