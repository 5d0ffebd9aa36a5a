//! Live Kitten Idle runner.
//!
//! Keys act immediately (no Enter) and passive income ticks continuously in
//! the background of the input poll, rather than in bursts after each command.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

use kitten_idle::core::Session;
use kitten_idle::input::{handle_key_event, should_quit};
use kitten_idle::logging;
use kitten_idle::term::{
    describe, Config, StatusView, TerminalRenderer, FAREWELL, UNKNOWN_COMMAND,
};

fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();
    info!(save_path = %config.save_path.display(), "starting live mode");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    println!("{FAREWELL}");
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(config.save_path.clone()).with_clock(config.clock);
    let view = StatusView::live();
    let mut last_message = String::new();

    let tick_duration = config.clock.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let mut lines = view.lines(session.state());
        lines.push(last_message.clone());
        term.draw_lines(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(action) => last_message = describe(&session.handle(action)),
                        None if matches!(key.code, KeyCode::Char(_)) => {
                            last_message = UNKNOWN_COMMAND.to_string();
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
