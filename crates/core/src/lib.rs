//! Core game logic module - pure economy, state, and persistence
//!
//! This crate contains the rules of the idle game and nothing else. It has no
//! dependency on terminals or input handling, which keeps it:
//!
//! - **Deterministic**: closed-form prices and rates, no randomness
//! - **Testable**: every rule is a plain function or method on [`GameState`]
//! - **Portable**: drives both the line-based and the live terminal front ends
//!
//! # Module Structure
//!
//! - [`economy`]: cost curves and production formulas
//! - [`game_state`]: the game record plus gather/purchase/tick operations
//! - [`sim`]: fixed-timestep passive income
//! - [`save`]: fixed-layout binary save slot
//! - [`session`]: command dispatch over an owned state
//! - [`error`]: recoverable error kinds
//!
//! # Example
//!
//! ```
//! use kitten_idle_core::{Outcome, Session};
//! use kitten_idle_types::GameAction;
//!
//! let mut session = Session::new("save.dat");
//! for _ in 0..10 {
//!     session.handle(GameAction::Gather).unwrap();
//! }
//! assert_eq!(session.handle(GameAction::BuyKitten).unwrap(), Outcome::KittenBought(1));
//! assert_eq!(session.state().kittens(), 1);
//!
//! // Half a second of passive income at 0.5 yarn/s
//! session.simulate_burst(|_| {});
//! assert!((session.state().yarn() - 0.25).abs() < 1e-9);
//! ```

pub mod economy;
pub mod error;
pub mod game_state;
pub mod save;
pub mod session;
pub mod sim;

pub use kitten_idle_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, PersistOp};
pub use game_state::GameState;
pub use save::SAVE_RECORD_LEN;
pub use session::{Outcome, Session};
pub use sim::TickClock;
