//! Word Wheel (workspace facade crate).
//!
//! Re-exports the puzzle crates under `word_wheel::{core,input,term,types}`
//! and hosts the runtime configuration used by the terminal binary.

pub mod config;

pub use word_wheel_core as core;
pub use word_wheel_input as input;
pub use word_wheel_term as term;
pub use word_wheel_types as types;

pub use config::{init_tracing, GameConfig};
