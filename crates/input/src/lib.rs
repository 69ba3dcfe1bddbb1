//! Terminal input module (puzzle-facing).
//!
//! This module is intentionally independent of any UI framework and of the
//! puzzle logic. It maps `crossterm` key, mouse and focus events into
//! [`crate::types::PuzzleInput`] values.

pub mod handler;
pub mod map;

pub use word_wheel_types as types;

pub use handler::PointerHandler;
pub use map::{is_restart, map_key_event, should_quit};
