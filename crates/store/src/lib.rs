//! JSON file persistence for the leaderboard.
//!
//! The file holds one array of `{"name", "score", "ts"}` objects, by default
//! at `~/.canvas-arcade/leaderboard.json`. The I/O helpers return
//! `io::Result`; the [`ScoreStore`] impl turns them into best-effort
//! operations (missing or malformed file reads as empty, failed writes are
//! dropped).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arcade_core::{ScoreRecord, ScoreStore};

/// Directory under the home directory that holds save files.
pub const DATA_DIR: &str = ".canvas-arcade";

/// Leaderboard file name inside [`DATA_DIR`].
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Get the ~/.canvas-arcade/ directory path.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR))
}

/// Default leaderboard path (~/.canvas-arcade/leaderboard.json).
pub fn default_leaderboard_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LEADERBOARD_FILE))
}

/// Read a score list, failing on I/O or parse errors.
pub fn read_records(path: &Path) -> io::Result<Vec<ScoreRecord>> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a score list, creating the parent directory if needed.
pub fn write_records(path: &Path, records: &[ScoreRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Leaderboard stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    last_error: Option<String>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Message of the most recent failed write, cleared by a successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Vec<ScoreRecord> {
        read_records(&self.path).unwrap_or_default()
    }

    fn save(&mut self, records: &[ScoreRecord]) {
        self.last_error = write_records(&self.path, records)
            .err()
            .map(|e| e.to_string());
    }
}
