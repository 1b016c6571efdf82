//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, files, or clocks, making it:
//!
//! - **Deterministic**: the next-piece source is injected, so a fixed sequence replays exactly
//! - **Testable**: storage is a trait with an in-memory implementation
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: grid with hidden spawn rows, collision detection, merging and line clearing
//! - [`config`]: board dimensions and their validation
//! - [`engine`]: the game state machine (spawn, move, rotate, drop, lock, pause, reset)
//! - [`persist`]: high-score record and the storage trait
//! - [`pieces`]: tetromino matrices and generic clockwise rotation
//! - [`rng`]: next-piece sources (uniform random, fixed sequence)
//! - [`scoring`]: points, level curve and gravity interval
//! - [`snapshot`]: detached per-frame view of the engine for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every next piece is drawn independently; repeats are allowed
//! - **Hidden rows**: pieces spawn above the visible area with their bottom on the boundary
//! - **Spawn search**: centered column first, then alternating left/right
//! - **No wall kicks**: a rotation that collides is discarded
//! - **Immediate lock**: a piece that cannot fall locks on that gravity step
//! - **Scoring**: 100 x lines x level, level = 1 + lines / 10
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{BoardConfig, Engine, MemoryStore, SequenceSource};
//! use falling_blocks_types::{GameAction, PieceKind};
//!
//! let mut game = Engine::new(
//!     BoardConfig::default(),
//!     MemoryStore::new(),
//!     SequenceSource::new(vec![PieceKind::T, PieceKind::I]),
//! )
//! .unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.active().unwrap().kind, PieceKind::I);
//! assert_eq!(game.level(), 1);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod persist;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use engine::{spawn_columns, ActivePiece, Engine, LockEvent};
pub use persist::{HighScoreStore, HighScores, MemoryStore, StoreError};
pub use pieces::{rotate, shape_of, Shape};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
