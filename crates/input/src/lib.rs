//! Input module.
//!
//! Maps a typed line (line mode) or a `crossterm` key event (live mode) into a
//! [`crate::types::GameAction`]. Both paths share the same single-letter
//! bindings, so commands behave identically in either front end.

pub mod map;

pub use kitten_idle_types as types;

pub use map::{handle_key_event, parse_line, should_quit};
