//! Engine module - owns the board, the active/next piece and progression
//!
//! Lifecycle: spawn → move/rotate/fall → lock → clear → spawn. Every command runs
//! to completion; blocked moves and rotations are normal outcomes reported as
//! `false`/`None`, never as errors.
//!
//! Status rules:
//! - `Running` accepts every command.
//! - `Paused` accepts only resume.
//! - `GameOver` accepts only reset.

use crate::board::Board;
use crate::config::{BoardConfig, ConfigError};
use crate::persist::{HighScoreStore, HighScores, StoreError};
use crate::pieces::{rotate, shape_of, Shape};
use crate::rng::PieceSource;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_points};
use crate::types::{DropOutcome, GameAction, GameStatus, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation (post-rotation matrix)
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Board cells covered by this piece
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, PieceKind)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy, kind)| (self.x + dx, self.y + dy, kind))
    }
}

/// Emitted after every lock (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level_before: u32,
    pub level_after: u32,
    /// A high-score field was beaten by this lock
    pub new_high: bool,
}

impl LockEvent {
    pub fn level_changed(&self) -> bool {
        self.level_before != self.level_after
    }
}

/// Column probe order for spawning a piece of `shape_width` on a board of `board_width`
///
/// Starts at the centered column and alternates outward: `c, c-1, c+1, c-2, c+2, ...`,
/// skipping columns where the piece would not fit horizontally.
pub fn spawn_columns(board_width: u8, shape_width: u8) -> impl Iterator<Item = i16> {
    let max_x = board_width as i16 - shape_width as i16;
    let center = if max_x >= 0 { max_x / 2 } else { -1 };

    let first = (max_x >= 0).then_some(center);
    let rest = (1..board_width as i16).flat_map(move |i| {
        let left = center - i;
        let right = center + i;
        [left, right]
    });

    first
        .into_iter()
        .chain(rest)
        .filter(move |&x| x >= 0 && x <= max_x)
}

/// Complete game state
#[derive(Debug)]
pub struct Engine<S, R> {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    score: u32,
    level: u32,
    lines: u32,
    high: HighScores,
    status: GameStatus,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Most recent storage failure not yet reported to the caller.
    store_error: Option<StoreError>,
    store: S,
    source: R,
}

impl<S: HighScoreStore, R: PieceSource> Engine<S, R> {
    /// Create a running game
    ///
    /// Fails only on invalid board dimensions. A store that cannot be read yields
    /// zeroed high scores; the error is kept for [`Engine::take_store_error`].
    pub fn new(config: BoardConfig, mut store: S, mut source: R) -> Result<Self, ConfigError> {
        let board = Board::with_config(config)?;

        let (high, store_error) = match store.load() {
            Ok(high) => (high, None),
            Err(e) => (HighScores::default(), Some(e)),
        };
        let next = source.next_kind();

        let mut engine = Self {
            board,
            active: None,
            next,
            score: 0,
            level: 1,
            lines: 0,
            high,
            status: GameStatus::Running,
            piece_id: 0,
            last_event: None,
            store_error,
            store,
            source,
        };
        engine.spawn();
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_scores(&self) -> HighScores {
        self.high
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Gravity interval the caller should use at the current level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Take and clear the last storage failure.
    pub fn take_store_error(&mut self) -> Option<StoreError> {
        self.store_error.take()
    }

    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Make the next piece active and draw a new lookahead
    ///
    /// The piece's bottom row lines up with the last hidden row. Columns are tried
    /// center-first (see [`spawn_columns`]). If none is free the game is over, and
    /// any beaten high score is saved. Returns whether a piece was placed.
    pub fn spawn(&mut self) -> bool {
        let kind = self.next;
        let shape = shape_of(kind);
        self.next = self.source.next_kind();

        let spawn_y = (self.board.hidden_rows() as i16 - shape.height() as i16).max(0);
        let spawn_x = spawn_columns(self.board.width(), shape.width())
            .find(|&x| !self.board.collides(&shape, x, spawn_y));

        match spawn_x {
            Some(x) => {
                self.active = Some(ActivePiece {
                    kind,
                    shape,
                    x,
                    y: spawn_y,
                });
                self.piece_id = self.piece_id.wrapping_add(1);
                true
            }
            None => {
                self.active = None;
                self.status = GameStatus::GameOver;
                if self.high.absorb(self.level, self.lines) {
                    self.save_high_scores();
                }
                false
            }
        }
    }

    fn fits(&self, shape: &Shape, x: i16, y: i16) -> bool {
        !self.board.collides(shape, x, y)
    }

    /// Shift the active piece horizontally by `dx` if nothing is in the way
    pub fn try_move(&mut self, dx: i16) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.fits(&active.shape, active.x + dx, active.y) {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                ..active
            });
            return true;
        }

        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    /// Rotate the active piece clockwise in place; rejected if the result collides
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = rotate(&active.shape);
        if self.fits(&rotated, active.x, active.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..active
            });
            return true;
        }

        false
    }

    /// Move the active piece down one row, locking it if it cannot move
    ///
    /// Returns `None` when the game is not running.
    pub fn soft_drop_tick(&mut self) -> Option<DropOutcome> {
        if !self.is_running() {
            return None;
        }
        let active = self.active?;

        if self.fits(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            Some(DropOutcome::StillFalling)
        } else {
            self.lock_piece();
            Some(DropOutcome::Locked)
        }
    }

    /// Timer-driven gravity step; a no-op unless running
    pub fn gravity_tick(&mut self) -> Option<DropOutcome> {
        self.soft_drop_tick()
    }

    /// Drop the active piece as far as it goes and lock it
    ///
    /// Returns the number of rows fallen, or `None` when the game is not running.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let active = self.active?;

        let mut drop_distance: i16 = 0;
        while self.fits(&active.shape, active.x, active.y + drop_distance + 1) {
            drop_distance += 1;
        }

        self.active = Some(ActivePiece {
            y: active.y + drop_distance,
            ..active
        });
        self.lock_piece();

        Some(drop_distance as u32)
    }

    /// Row the active piece would land on if hard-dropped
    pub fn landing_y(&self) -> Option<i16> {
        let active = self.active?;
        let mut y = active.y;
        while self.fits(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Merge the active piece, clear rows, update progression and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.x, active.y);
        let cleared = self.board.clear_full_rows() as u32;

        let level_before = self.level;
        let mut points = 0;
        let mut new_high = false;

        if cleared > 0 {
            points = line_clear_points(cleared, level_before);
            self.lines = self.lines.saturating_add(cleared);
            self.score = self.score.saturating_add(points);
            self.level = level_for_lines(self.lines);

            if self.high.absorb(self.level, self.lines) {
                new_high = true;
                self.save_high_scores();
            }
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared,
            points,
            level_before,
            level_after: self.level,
            new_high,
        });

        self.spawn();
    }

    fn save_high_scores(&mut self) {
        if let Err(e) = self.store.save(&self.high) {
            self.store_error = Some(e);
        }
    }

    /// Write the high-score record now, regardless of whether it changed
    pub fn flush_high_scores(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.high)
    }

    /// Running → Paused
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    /// Paused → Running
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::GameOver => false,
        }
    }

    /// Start over on an empty board; high scores are kept
    ///
    /// Refused while paused: a paused game only resumes.
    pub fn reset(&mut self) -> bool {
        if self.status == GameStatus::Paused {
            return false;
        }
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.last_event = None;
        self.spawn();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop_tick().is_some(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        }
    }
}
