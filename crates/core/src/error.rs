//! Error types for the game core.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the save slot failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOp {
    Save,
    Load,
}

impl fmt::Display for PersistOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistOp::Save => f.write_str("save"),
            PersistOp::Load => f.write_str("load"),
        }
    }
}

/// Recoverable game errors. Neither variant leaves the state half-modified.
#[derive(Debug, Error)]
pub enum GameError {
    /// A purchase was attempted without enough yarn.
    #[error("not enough yarn: cost {cost:.2}, have {yarn:.2}")]
    InsufficientFunds { cost: f64, yarn: f64 },
    /// The count is already at its maximum (only reachable from a crafted save).
    #[error("count limit reached: {count}")]
    CountLimit { count: u32 },
    /// The save file could not be opened, written, or fully read.
    #[error("{op} failed for {}", .path.display())]
    Persistence {
        op: PersistOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    pub(crate) fn persistence(op: PersistOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Persistence {
            op,
            path: path.into(),
            source,
        }
    }
}
