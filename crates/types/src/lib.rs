//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 24 stored rows:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Hidden rows**: 4 rows above the viewport where pieces spawn (rows 0-3)
//! - **Visible rows**: 20 rows shown to the player (rows 4-23)
//!
//! # Fall Speed
//!
//! The gravity interval shrinks by 60ms per level from 1000ms, with a 100ms floor:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 940ms |
//! | 5 | 760ms |
//! | 10 | 460ms |
//! | 16+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{cell_value, PieceKind, BOARD_WIDTH, TOTAL_ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.cell_value(), 6);
//! assert_eq!(PieceKind::from_cell_value(6), Some(PieceKind::T));
//! assert_eq!(cell_value(None), 0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(TOTAL_ROWS, 24);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Rows shown to the player (20 rows)
pub const VISIBLE_ROWS: u8 = 20;

/// Spawn buffer rows stored above the visible area (4 rows)
pub const HIDDEN_ROWS: u8 = 4;

/// Total stored rows (hidden + visible)
pub const TOTAL_ROWS: u8 = VISIBLE_ROWS + HIDDEN_ROWS;

/// Largest side of any piece matrix (the I piece is 4x4)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity speed-up per level
pub const FALL_STEP_MS: u32 = 60;

/// Fastest gravity interval
pub const MIN_FALL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level the clear happened at
pub const LINE_CLEAR_POINTS: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each kind owns one cell value (and color) on the board:
/// - **I** (1): Cyan, horizontal bar
/// - **J** (2): Blue, J-shaped
/// - **L** (3): Orange, L-shaped (mirror of J)
/// - **O** (4): Yellow, 2x2 square
/// - **S** (5): Green, S-shaped
/// - **T** (6): Purple, T-shaped
/// - **Z** (7): Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in cell-value order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric cell value (1-7) stored for this kind.
    pub fn cell_value(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_value`]. Returns `None` for 0 and anything above 7.
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (value 0)
/// - `Some(PieceKind)`: Settled block colored by the piece that left it
pub type Cell = Option<PieceKind>;

/// Numeric value of a cell as exported in snapshots and board dumps.
pub fn cell_value(cell: Cell) -> u8 {
    cell.map(|kind| kind.cell_value()).unwrap_or(0)
}

/// Discrete commands accepted by the engine
///
/// Each key press or button maps to exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece one cell down, locking it if blocked
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Clear the board and counters, keeping high scores
    Reset,
}

/// Lifecycle of a game session
///
/// `Running ⇄ Paused`, either may become `GameOver`. Only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Result of a single soft-drop or gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    StillFalling,
    /// The piece was blocked and has been locked into the board
    Locked,
}
