//! Terminal presentation for the engine.
//!
//! A small, game-oriented rendering layer: the engine is snapshotted, the
//! snapshot is drawn into a framebuffer by [`GameView`], and the framebuffer is
//! flushed to the terminal by [`TerminalRenderer`] as a diff against the
//! previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so it can be asserted on in tests
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
