//! Runtime configuration for the terminal runner.
//!
//! Everything is read from environment variables:
//!
//! | Variable                | Meaning                                   | Default                 |
//! |-------------------------|-------------------------------------------|-------------------------|
//! | `TETRIS_COLS`           | board width                               | 10                      |
//! | `TETRIS_VISIBLE_ROWS`   | visible rows                              | 20                      |
//! | `TETRIS_HIDDEN_ROWS`    | hidden spawn rows above the visible area  | 4                       |
//! | `TETRIS_STATS_PATH`     | high-score file                           | platform data directory |
//! | `TETRIS_SEED`           | seed for the piece randomizer             | clock-derived           |
//! | `TETRIS_STATS_DISABLED` | `1`/`true` keeps high scores in memory    | off                     |
//!
//! Unparseable numbers fall back to the default. Combinations that make no
//! sense (zero width, oversized boards) are rejected later by
//! [`BoardConfig::validate`].

use std::path::PathBuf;

use crate::core::BoardConfig;
use crate::store::JsonFileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub stats_path: PathBuf,
    pub seed: Option<u32>,
    pub stats_disabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            stats_path: JsonFileStore::default_path(),
            seed: None,
            stats_disabled: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = BoardConfig::default();
        let number = |key: &str, default: u8| -> u8 {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let board = BoardConfig::new(
            number("TETRIS_COLS", defaults.width),
            number("TETRIS_VISIBLE_ROWS", defaults.visible_rows),
            number("TETRIS_HIDDEN_ROWS", defaults.hidden_rows),
        );

        let stats_path = lookup("TETRIS_STATS_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or_else(JsonFileStore::default_path);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let stats_disabled = lookup("TETRIS_STATS_DISABLED")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Self {
            board,
            stats_path,
            seed,
            stats_disabled,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}
