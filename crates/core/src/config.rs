//! Board configuration and its validation.

use thiserror::Error;

use crate::types::{BOARD_WIDTH, HIDDEN_ROWS, MAX_SHAPE_SIZE, VISIBLE_ROWS};

/// Playfield dimensions, fixed for the lifetime of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    pub width: u8,
    pub visible_rows: u8,
    pub hidden_rows: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            visible_rows: VISIBLE_ROWS,
            hidden_rows: HIDDEN_ROWS,
        }
    }
}

/// Configuration the engine refuses to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be positive")]
    ZeroWidth,
    #[error("board must have at least one visible row")]
    ZeroVisibleRows,
    #[error("board width {width} is narrower than the widest piece ({min})")]
    TooNarrow { width: u8, min: u8 },
    #[error("board height {total} exceeds {max} rows")]
    TooTall { total: u16, max: u16 },
}

impl BoardConfig {
    pub fn new(width: u8, visible_rows: u8, hidden_rows: u8) -> Self {
        Self {
            width,
            visible_rows,
            hidden_rows,
        }
    }

    /// Stored rows (hidden + visible).
    pub fn total_rows(&self) -> u16 {
        self.hidden_rows as u16 + self.visible_rows as u16
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.visible_rows == 0 {
            return Err(ConfigError::ZeroVisibleRows);
        }
        if (self.width as usize) < MAX_SHAPE_SIZE {
            return Err(ConfigError::TooNarrow {
                width: self.width,
                min: MAX_SHAPE_SIZE as u8,
            });
        }
        let max = u8::MAX as u16;
        if self.total_rows() > max {
            return Err(ConfigError::TooTall {
                total: self.total_rows(),
                max,
            });
        }
        Ok(())
    }
}
