//! Terminal puzzle renderer module.
//!
//! This is a small rendering layer for terminal play. It avoids widget
//! libraries and instead renders into a simple framebuffer that can be flushed
//! to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of rendering concerns
//! - Share one picker projection between drawing and mouse hit-testing
//! - Redraw only what changed between frames

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use word_wheel_core as core;
pub use word_wheel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{Feedback, FeedbackKind, PuzzleView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
