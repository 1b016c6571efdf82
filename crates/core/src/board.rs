//! Board module - manages the game grid
//!
//! The board is a `width x (hidden_rows + visible_rows)` grid where each cell can be
//! empty or filled with a piece kind. Row 0 is the topmost hidden row; the visible
//! viewport starts at row `hidden_rows`.
//! Uses a flat row-major vector sized once at construction.
//!
//! Collision rules:
//! - a cell left of column 0, right of the last column, or below the last row collides
//! - a cell above row 0 (negative y) never collides by occupancy, so a spawning
//!   piece may poke out of the top of the grid

use std::fmt::Write as _;

use crate::config::{BoardConfig, ConfigError};
use crate::pieces::Shape;
use crate::types::{cell_value, Cell};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    width: u8,
    hidden_rows: u8,
    visible_rows: u8,
}

impl Board {
    /// Create a new empty board with the default 10x(4+20) dimensions
    pub fn new() -> Self {
        Self::empty(BoardConfig::default())
    }

    /// Create an empty board after validating the dimensions
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: BoardConfig) -> Self {
        let len = config.width as usize * config.total_rows() as usize;
        Self {
            cells: vec![None; len],
            width: config.width,
            hidden_rows: config.hidden_rows,
            visible_rows: config.visible_rows,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height() as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Stored rows, hidden included
    pub fn height(&self) -> u16 {
        self.hidden_rows as u16 + self.visible_rows as u16
    }

    pub fn hidden_rows(&self) -> u8 {
        self.hidden_rows
    }

    pub fn visible_rows(&self) -> u8 {
        self.visible_rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// A single stored row, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height() as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// All stored rows from the top hidden row down
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Would `shape` with its origin at `(x, y)` hit a wall, the floor, or a settled block?
    pub fn collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        let width = self.width as i16;
        let height = self.height() as i16;

        shape.minos().any(|(dx, dy, _)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= width {
                return true;
            }
            if by >= height {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Write every non-empty cell of `shape` into the grid
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i16, y: i16) {
        for (dx, dy, kind) in shape.minos() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Remove every full row at once and return how many were removed
    ///
    /// Remaining rows keep their relative order and sink to the bottom; the same
    /// number of empty rows appear at the top. Uses a two-pointer compaction in place.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height() as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Blank the rows vacated at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write numeric cell values (0-7) into `out`, row-major, reusing its allocation
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| cell_value(cell)));
    }

    /// Text dump of the grid, one line per row
    ///
    /// Each line is `H` (hidden) or `V` (visible), the two-digit row index, a space,
    /// then the cell values.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize * 5);
        for (y, row) in self.rows().enumerate() {
            let prefix = if y < self.hidden_rows as usize { 'H' } else { 'V' };
            let _ = write!(out, "{}{:02} ", prefix, y);
            for &cell in row {
                let _ = write!(out, "{}", cell_value(cell));
            }
            out.push('\n');
        }
        out
    }

    /// Create from rows of cell values for testing (0 = empty, 1-7 = kind)
    ///
    /// The rows fill the board bottom-aligned; missing rows above are empty and
    /// rows beyond the board height are dropped from the top.
    pub fn from_rows(config: BoardConfig, rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let mut board = Self::with_config(config)?;
        let height = board.height() as usize;
        let rows = &rows[rows.len().saturating_sub(height)..];
        let offset = height - rows.len();
        for (i, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().take(board.width as usize).enumerate() {
                let kind = crate::types::PieceKind::from_cell_value(value);
                board.set(x as i16, (offset + i) as i16, kind);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
