//! Terminal front-end module.
//!
//! Everything that turns the game core into text on a terminal:
//!
//! - [`status`]: the status screen and command menu (pure)
//! - [`messages`]: the one-line result of each command (pure)
//! - [`line_loop`]: the blocking, line-at-a-time game loop
//! - [`renderer`]: raw-mode full-screen redraws for the live front end
//! - [`config`]: save slot and pacing settings

pub mod config;
pub mod line_loop;
pub mod messages;
pub mod renderer;
pub mod status;

pub use kitten_idle_core as core;
pub use kitten_idle_types as types;

pub use config::Config;
pub use line_loop::LineLoop;
pub use messages::{describe, FAREWELL, UNKNOWN_COMMAND};
pub use renderer::{encode_lines_into, TerminalRenderer};
pub use status::{StatusView, TITLE};
