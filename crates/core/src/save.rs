//! Save slot persistence.
//!
//! The save file is one fixed-size record with no header or version:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 8 | `yarn` (f64) |
//! | 8 | 4 | `kittens` (32-bit integer) |
//! | 12 | 4 | `bowls` (32-bit integer) |
//! | 16 | 8 | `kitten_base_rate` (f64) |
//!
//! Fields use native byte order, so a save is only portable between machines
//! of the same endianness. A file of the right length is trusted as-is.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{GameError, PersistOp};
use crate::game_state::GameState;

/// Size of one save record in bytes.
pub const SAVE_RECORD_LEN: usize = 24;

/// Encode a state into its fixed-layout record.
pub fn encode(state: &GameState) -> [u8; SAVE_RECORD_LEN] {
    let mut buf = [0u8; SAVE_RECORD_LEN];
    buf[0..8].copy_from_slice(&state.yarn.to_ne_bytes());
    buf[8..12].copy_from_slice(&state.kittens.to_ne_bytes());
    buf[12..16].copy_from_slice(&state.bowls.to_ne_bytes());
    buf[16..24].copy_from_slice(&state.kitten_base_rate.to_ne_bytes());
    buf
}

/// Decode a fixed-layout record. Every bit pattern decodes to some state.
pub fn decode(buf: &[u8; SAVE_RECORD_LEN]) -> GameState {
    let mut f64_at = [0u8; 8];
    let mut u32_at = [0u8; 4];

    f64_at.copy_from_slice(&buf[0..8]);
    let yarn = f64::from_ne_bytes(f64_at);
    u32_at.copy_from_slice(&buf[8..12]);
    let kittens = u32::from_ne_bytes(u32_at);
    u32_at.copy_from_slice(&buf[12..16]);
    let bowls = u32::from_ne_bytes(u32_at);
    f64_at.copy_from_slice(&buf[16..24]);
    let kitten_base_rate = f64::from_ne_bytes(f64_at);

    GameState::from_parts(yarn, kittens, bowls, kitten_base_rate)
}

/// Write `state` to `path`, replacing any previous save.
pub fn save(state: &GameState, path: &Path) -> Result<(), GameError> {
    debug!(path = %path.display(), "writing save record");
    let record = encode(state);
    let mut file =
        File::create(path).map_err(|e| GameError::persistence(PersistOp::Save, path, e))?;
    file.write_all(&record)
        .and_then(|()| file.flush())
        .map_err(|e| GameError::persistence(PersistOp::Save, path, e))?;
    Ok(())
}

/// Read one record from `path`.
///
/// Fails if the file is missing or shorter than a full record. Bytes past the
/// first record are ignored.
pub fn load(path: &Path) -> Result<GameState, GameError> {
    debug!(path = %path.display(), "reading save record");
    let mut file =
        File::open(path).map_err(|e| GameError::persistence(PersistOp::Load, path, e))?;
    let mut record = [0u8; SAVE_RECORD_LEN];
    file.read_exact(&mut record)
        .map_err(|e| GameError::persistence(PersistOp::Load, path, e))?;
    Ok(decode(&record))
}
