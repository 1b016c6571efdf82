//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events 1:1 into [`crate::types::GameAction`] for the engine,
//! and into [`AppCommand`] for the few keys the runner handles itself.
//! There is no auto-repeat handling: one press is one command.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_app_key, handle_key_event, should_quit, AppCommand};
