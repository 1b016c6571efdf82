//! High-score record and the storage contract the engine saves it through.
//!
//! The engine never touches the filesystem. It loads once at construction and
//! saves only at checkpoints (a lock or game over that beats a record, or an
//! explicit flush). Storage failures never change game state.

use std::path::PathBuf;

use thiserror::Error;

/// Best level and line count reached across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighScores {
    pub high_level: u32,
    pub high_lines: u32,
}

impl HighScores {
    pub fn new(high_level: u32, high_lines: u32) -> Self {
        Self {
            high_level,
            high_lines,
        }
    }

    /// Raise whichever fields `level` / `lines` beat. Returns true if anything changed.
    pub fn absorb(&mut self, level: u32, lines: u32) -> bool {
        let mut changed = false;
        if lines > self.high_lines {
            self.high_lines = lines;
            changed = true;
        }
        if level > self.high_level {
            self.high_level = level;
            changed = true;
        }
        changed
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed high-score record in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Persistence gateway for [`HighScores`]
pub trait HighScoreStore {
    /// Load the stored record. A store with no record yet returns the default.
    fn load(&mut self) -> Result<HighScores, StoreError>;

    /// Durably write the record (best effort).
    fn save(&mut self, scores: &HighScores) -> Result<(), StoreError>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&mut self) -> Result<HighScores, StoreError> {
        (**self).load()
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), StoreError> {
        (**self).save(scores)
    }
}

/// In-memory store, used for tests and when persistence is disabled
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<HighScores>,
    save_count: usize,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with `scores` already recorded
    pub fn with_record(scores: HighScores) -> Self {
        Self {
            record: Some(scores),
            ..Self::default()
        }
    }

    /// Store whose every load and save fails with an I/O error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Last successfully saved (or seeded) record
    pub fn saved(&self) -> Option<HighScores> {
        self.record
    }

    /// Number of save attempts, failed ones included
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    fn failure(&self) -> StoreError {
        StoreError::Io {
            path: PathBuf::from("<memory>"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "store unavailable"),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<HighScores, StoreError> {
        if self.fail {
            return Err(self.failure());
        }
        Ok(self.record.unwrap_or_default())
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), StoreError> {
        self.save_count += 1;
        if self.fail {
            return Err(self.failure());
        }
        self.record = Some(*scores);
        Ok(())
    }
}
