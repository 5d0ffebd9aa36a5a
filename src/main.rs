//! Kitten Idle runner (default binary).
//!
//! Line-at-a-time play: each command is typed and confirmed with Enter, then
//! half a second of passive income is simulated before the next prompt.

use std::io;

use anyhow::Result;
use tracing::info;

use kitten_idle::logging;
use kitten_idle::term::{Config, LineLoop};

fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();
    info!(save_path = %config.save_path.display(), pacing = config.pacing, "starting line mode");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    LineLoop::new(config).run(stdin.lock(), &mut stdout)
}
