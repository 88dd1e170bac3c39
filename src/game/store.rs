//! Persisted game slot
//!
//! One well-known slot holds the active puzzle as JSON:
//!
//! ```json
//! { "version": 1, "date": "2024-05-01", "attempts": ["bold", "cake"],
//!   "gameOver": true, "won": true }
//! ```
//!
//! Reading fails open: a missing, unreadable, corrupt or foreign-version
//! record is treated as "no saved game".

use crate::config::STATE_SCHEMA_VERSION;
use crate::daily::DayKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// The persisted shape of a game
///
/// Only guesses are stored; evaluations are always recomputed on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    #[serde(default)]
    pub version: u32,
    pub date: DayKey,
    pub attempts: Vec<String>,
    pub game_over: bool,
    pub won: bool,
}

/// Failure to write the slot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write saved game")]
    Io(#[from] io::Error),
    #[error("failed to encode saved game")]
    Encode(#[from] serde_json::Error),
}

/// A single-slot store for the active puzzle
pub trait StateStore {
    /// Read the slot, or `None` if there is nothing usable in it
    fn load(&self) -> Option<SavedGame>;

    /// Replace the slot
    ///
    /// # Errors
    /// Returns `StoreError` if the record cannot be encoded or written.
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError>;
}

/// Decode a slot's text, discarding anything unusable
#[must_use]
pub fn decode(text: &str) -> Option<SavedGame> {
    let saved: SavedGame = match serde_json::from_str(text) {
        Ok(saved) => saved,
        Err(err) => {
            warn!(error = %err, "discarding unreadable saved game");
            return None;
        }
    };

    if saved.version != STATE_SCHEMA_VERSION {
        warn!(
            found = saved.version,
            expected = STATE_SCHEMA_VERSION,
            "discarding saved game with unknown schema version"
        );
        return None;
    }

    Some(saved)
}

/// Encode a record for the slot
///
/// # Errors
/// Returns `serde_json::Error` if encoding fails.
pub fn encode(game: &SavedGame) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(game)
}

/// Slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Option<SavedGame> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved game");
                None
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cannot read saved game");
                None
            }
        }
    }

    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        let text = encode(game)?;
        // write then rename so the slot never holds a partial record
        let temp = self.temp_path();
        fs::write(&temp, text)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), date = %game.date, "saved game");
        Ok(())
    }
}

/// Slot held in memory, encoded exactly as the file store encodes it
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, well-formed or not
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<SavedGame> {
        self.contents.as_deref().and_then(decode)
    }

    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.contents = Some(encode(game)?);
        Ok(())
    }
}
