//! Core types module - shared constants and the command enum
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the economy core, the input mapping, and the terminal front ends.
//!
//! # Economy Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `KITTEN_BASE_RATE` | 0.5 | Yarn per second produced by one kitten with no bowls |
//! | `KITTEN_BASE_COST` | 10.0 | Price of the first kitten |
//! | `KITTEN_COST_GROWTH` | 0.2 | Fractional price increase per kitten owned |
//! | `BOWL_BASE_COST` | 25.0 | Price of the first food bowl |
//! | `BOWL_COST_STEP` | 10.0 | Flat price increase per bowl owned |
//! | `BOWL_RATE_BONUS` | 0.25 | Kitten output bonus per bowl (+25%) |
//! | `GATHER_AMOUNT` | 1.0 | Yarn gained by a manual gather |
//!
//! # Timing Constants
//!
//! Passive income is simulated in fixed ticks after every command:
//!
//! - `TICK_MS`: 100ms per tick
//! - `TICKS_PER_COMMAND`: 5 ticks (0.5s of simulated time per command)
//!
//! # Examples
//!
//! ```
//! use kitten_idle_types::{GameAction, TICK_MS, TICKS_PER_COMMAND};
//!
//! // Commands are selected by a single character (case-insensitive)
//! assert_eq!(GameAction::from_char('g'), Some(GameAction::Gather));
//! assert_eq!(GameAction::from_char('B'), Some(GameAction::BuyKitten));
//! assert_eq!(GameAction::from_char('x'), None);
//!
//! // Half a second of passive time per command
//! assert_eq!(TICK_MS * TICKS_PER_COMMAND, 500);
//! ```

/// Yarn per second produced by a single kitten before bowl bonuses
pub const KITTEN_BASE_RATE: f64 = 0.5;

/// Price of the first kitten
pub const KITTEN_BASE_COST: f64 = 10.0;

/// Kitten price grows by 20% of the base price per kitten already owned
pub const KITTEN_COST_GROWTH: f64 = 0.2;

/// Price of the first food bowl
pub const BOWL_BASE_COST: f64 = 25.0;

/// Bowl price grows by a flat 10 yarn per bowl already owned
pub const BOWL_COST_STEP: f64 = 10.0;

/// Each bowl adds +25% to every kitten's output
pub const BOWL_RATE_BONUS: f64 = 0.25;

/// Yarn gained by one manual gather
pub const GATHER_AMOUNT: f64 = 1.0;

/// Passive simulation tick length in milliseconds (0.1s)
pub const TICK_MS: u32 = 100;

/// Number of passive ticks simulated after every non-quit command
pub const TICKS_PER_COMMAND: u32 = 5;

/// Save slot used when no override is configured
pub const DEFAULT_SAVE_PATH: &str = "save.dat";

/// Player commands accepted by the game loop
///
/// Each command is bound to a single letter; matching is case-insensitive.
///
/// | Key | Action |
/// |-----|--------|
/// | `g` | gather one yarn |
/// | `b` | buy a kitten |
/// | `u` | buy a food bowl upgrade |
/// | `s` | save to the save slot |
/// | `l` | load from the save slot |
/// | `q` | quit |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Add one yarn by hand
    Gather,
    /// Buy a kitten if the balance covers its price
    BuyKitten,
    /// Buy a food bowl if the balance covers its price
    BuyBowl,
    /// Write the current state to the save slot
    Save,
    /// Replace the current state with the save slot contents
    Load,
    /// Leave the game loop
    Quit,
}

impl GameAction {
    /// Every action, in menu order
    pub const ALL: [GameAction; 6] = [
        GameAction::Gather,
        GameAction::BuyKitten,
        GameAction::BuyBowl,
        GameAction::Save,
        GameAction::Load,
        GameAction::Quit,
    ];

    /// Select an action from its key character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kitten_idle_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_char('u'), Some(GameAction::BuyBowl));
    /// assert_eq!(GameAction::from_char('Q'), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_char('\n'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(GameAction::Gather),
            'b' => Some(GameAction::BuyKitten),
            'u' => Some(GameAction::BuyBowl),
            's' => Some(GameAction::Save),
            'l' => Some(GameAction::Load),
            'q' => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Lower-case key bound to this action
    pub fn key(&self) -> char {
        match self {
            GameAction::Gather => 'g',
            GameAction::BuyKitten => 'b',
            GameAction::BuyBowl => 'u',
            GameAction::Save => 's',
            GameAction::Load => 'l',
            GameAction::Quit => 'q',
        }
    }

    /// Stable name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Gather => "gather",
            GameAction::BuyKitten => "buy-kitten",
            GameAction::BuyBowl => "buy-bowl",
            GameAction::Save => "save",
            GameAction::Load => "load",
            GameAction::Quit => "quit",
        }
    }
}
