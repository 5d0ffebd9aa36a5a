//! Line-mode game loop.
//!
//! Show the status screen, block for one line of input, dispatch it, then let
//! a short burst of passive time pass. Generic over the reader and writer so
//! whole sessions can be scripted in tests.

use std::io::{BufRead, Write};
use std::thread;

use anyhow::Result;
use tracing::{debug, warn};

use kitten_idle_core::{Outcome, Session};
use kitten_idle_input::parse_line;

use crate::config::Config;
use crate::messages::{describe, FAREWELL, UNKNOWN_COMMAND};
use crate::status::StatusView;

pub struct LineLoop {
    session: Session,
    config: Config,
    view: StatusView,
}

impl LineLoop {
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.save_path.clone()).with_clock(config.clock);
        Self::with_session(session, config)
    }

    pub fn with_session(session: Session, config: Config) -> Self {
        Self {
            session,
            config,
            view: StatusView::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until quit, end of input, or an input error.
    ///
    /// Only failures writing to `out` are returned as errors.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut raw = Vec::with_capacity(64);

        loop {
            self.draw(out)?;

            raw.clear();
            match input.read_until(b'\n', &mut raw) {
                Ok(0) => {
                    debug!("input closed");
                    break;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "failed to read input");
                    break;
                }
            }

            let line = String::from_utf8_lossy(&raw);
            match parse_line(&line) {
                Some(action) => {
                    let result = self.session.handle(action);
                    if matches!(result, Ok(Outcome::Quit)) {
                        break;
                    }
                    writeln!(out, "{}", describe(&result))?;
                }
                None => writeln!(out, "{UNKNOWN_COMMAND}")?,
            }

            self.pass_time();
        }

        writeln!(out)?;
        writeln!(out, "{FAREWELL}")?;
        out.flush()?;
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        for line in self.view.lines(self.session.state()) {
            writeln!(out, "{line}")?;
        }
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }

    fn pass_time(&mut self) {
        let delay = self.config.pace_delay();
        self.session.simulate_burst(|_| {
            if let Some(delay) = delay {
                thread::sleep(delay);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitten_idle_core::GameState;
    use std::io::Cursor;

    fn run_script(script: &str) -> (LineLoop, String) {
        let mut game = LineLoop::new(Config::unpaced("unused.dat"));
        let mut out = Vec::new();
        game.run(Cursor::new(script.as_bytes().to_vec()), &mut out)
            .expect("run");
        (game, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_gather_message_and_farewell() {
        let (game, out) = run_script("g\nq\n");
        assert_eq!(game.session().state().yarn(), 1.0);
        assert!(out.contains("You gathered yarn. +1"));
        assert!(out.ends_with("\nGoodbye.\n"));
    }

    #[test]
    fn test_quit_skips_passive_time() {
        let config = Config::unpaced("unused.dat");
        let state = GameState::from_parts(0.0, 2, 1, 0.5);
        let session = Session::with_state(state, "unused.dat").with_clock(config.clock);
        let mut game = LineLoop::with_session(session, config);
        let mut out = Vec::new();
        game.run(Cursor::new(b"g\nq\n".to_vec()), &mut out).expect("run");

        // One burst after the gather (5 x 0.125), none after quit.
        assert!((game.session().state().yarn() - 1.625).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_command_reported() {
        let (game, out) = run_script("x\n\nq\n");
        assert_eq!(out.matches(UNKNOWN_COMMAND).count(), 2);
        assert_eq!(game.session().state().yarn(), 0.0);
    }

    #[test]
    fn test_eof_ends_loop_gracefully() {
        let (_, out) = run_script("g\n");
        assert!(out.ends_with("\nGoodbye.\n"));
        assert_eq!(out.matches(crate::status::TITLE).count(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_unknown() {
        let mut game = LineLoop::new(Config::unpaced("unused.dat"));
        let mut out = Vec::new();
        game.run(Cursor::new(vec![0xff, b'\n', b'q', b'\n']), &mut out)
            .expect("run");
        assert!(String::from_utf8_lossy(&out).contains(UNKNOWN_COMMAND));
    }
}
