//! High-score persistence backed by a small JSON file.
//!
//! The record is a flat object with two integer fields:
//!
//! ```json
//! {
//!   "high_level": 3,
//!   "high_lines": 27
//! }
//! ```
//!
//! Missing fields read as 0 and unknown fields are ignored, so older and newer
//! files stay readable. A missing file is not an error; an unreadable or
//! malformed one is reported and the engine falls back to zeroes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use falling_blocks_core as core;

use crate::core::{HighScoreStore, HighScores, StoreError};

/// File name used under the platform data directory.
pub const STATS_FILE_NAME: &str = "stats.json";

/// Directory created under the platform data directory.
pub const APP_DIR_NAME: &str = "falling-blocks";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StatsRecord {
    #[serde(default)]
    high_level: u32,
    #[serde(default)]
    high_lines: u32,
}

impl From<HighScores> for StatsRecord {
    fn from(value: HighScores) -> Self {
        Self {
            high_level: value.high_level,
            high_lines: value.high_lines,
        }
    }
}

impl From<StatsRecord> for HighScores {
    fn from(value: StatsRecord) -> Self {
        HighScores::new(value.high_level, value.high_lines)
    }
}

/// High-score store that reads and writes one JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/falling-blocks/stats.json`, or `./stats.json` when the platform
    /// has no data directory.
    pub fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(mut path) => {
                path.push(APP_DIR_NAME);
                path.push(STATS_FILE_NAME);
                path
            }
            None => PathBuf::from(STATS_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<HighScores, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::default()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice::<StatsRecord>(&bytes)
            .map(HighScores::from)
            .map_err(|e| StoreError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let text = serde_json::to_string_pretty(&StatsRecord::from(*scores)).map_err(|e| {
            StoreError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }
}
