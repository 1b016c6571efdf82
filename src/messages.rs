//! Buffered diagnostics for the terminal runner.
//!
//! While the terminal is in raw mode / alternate screen, writing to stderr
//! garbles the display. Messages are collected here instead, the latest one is
//! shown in the HUD, and everything is printed once the terminal is restored.
//! Only the most recent entries are kept so a long session stays bounded.

use std::fmt;

/// Default number of entries retained by [`MessageLog::new`].
pub const MAX_ENTRIES: usize = 200;

#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: Vec<String>,
    limit: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_limit(MAX_ENTRIES)
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that keeps at most `limit` entries (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record `message` under a component tag, e.g. `[Store] save failed`.
    ///
    /// The oldest entries are dropped once the limit is reached.
    pub fn push(&mut self, tag: &str, message: impl fmt::Display) {
        self.entries.push(format!("[{}] {}", tag, message));
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
    }

    /// Record a multi-line block (one entry per line).
    pub fn push_lines(&mut self, tag: &str, text: &str) {
        for line in text.lines() {
            self.push(tag, line);
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Print everything to stderr and empty the log.
    pub fn flush_to_stderr(&mut self) {
        for entry in self.entries.drain(..) {
            eprintln!("{}", entry);
        }
    }
}
