//! Kitten Idle (workspace facade crate).
//!
//! Re-exports the member crates under `kitten_idle::{core,input,term,types}` so
//! binaries, integration tests, and benches depend on a single package.

pub mod logging;

pub use kitten_idle_core as core;
pub use kitten_idle_input as input;
pub use kitten_idle_term as term;
pub use kitten_idle_types as types;
