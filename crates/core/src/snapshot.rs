//! Snapshot module - a detached copy of the engine state for one frame
//!
//! Renderers read a `GameSnapshot` instead of borrowing the engine, so drawing
//! never holds the game state. The grid is exported as raw cell values.

use crate::engine::{ActivePiece, Engine};
use crate::persist::{HighScoreStore, HighScores};
use crate::pieces::Shape;
use crate::rng::PieceSource;
use crate::types::{GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub hidden_rows: u8,
    pub visible_rows: u8,
    /// Full grid (hidden rows first), row-major cell values 0-7.
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high: HighScores,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn height(&self) -> u16 {
        self.hidden_rows as u16 + self.visible_rows as u16
    }

    /// Cell value at stored row `y`; 0 outside the grid.
    pub fn cell(&self, x: u16, y: u16) -> u8 {
        if x >= self.width as u16 || y >= self.height() {
            return 0;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Cell value at visible row `vy` (0 = top of the viewport).
    pub fn visible_cell(&self, x: u16, vy: u16) -> u8 {
        self.cell(x, vy.saturating_add(self.hidden_rows as u16))
    }

    pub fn set_cell(&mut self, x: u16, y: u16, value: u8) {
        if x >= self.width as u16 || y >= self.height() {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if let Some(cell) = self.board.get_mut(idx) {
            *cell = value;
        }
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let config = crate::config::BoardConfig::default();
        Self {
            width: config.width,
            hidden_rows: config.hidden_rows,
            visible_rows: config.visible_rows,
            board: vec![0; config.width as usize * config.total_rows() as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            high: HighScores::default(),
            status: GameStatus::Running,
        }
    }
}

impl<S: HighScoreStore, R: PieceSource> Engine<S, R> {
    /// Copy the current state into `out`, reusing its grid allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.board();
        out.width = board.width();
        out.hidden_rows = board.hidden_rows();
        out.visible_rows = board.visible_rows();
        board.write_u8_grid(&mut out.board);
        out.active = self.active().map(ActiveSnapshot::from);
        out.next = self.next_kind();
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.high = self.high_scores();
        out.status = self.status();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
