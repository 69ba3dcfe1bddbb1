//! Error types for puzzle loading and controller misuse.
//!
//! Player mistakes (unknown words, re-traced words) are not errors; they are
//! [`WordOutcome`](crate::types::WordOutcome) values.

use thiserror::Error;

use crate::types::LetterId;

/// Malformed puzzle content, detected once at load time.
///
/// A puzzle that fails validation must not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid of {rows}x{cols} cells exceeds the addressable 255x255")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("puzzle defines no words")]
    NoWords,

    #[error("word {0:?} must be non-empty uppercase ASCII")]
    InvalidWordText(String),

    #[error("word {0:?} is placed more than once")]
    DuplicateWord(String),

    #[error("word {word:?} runs off the grid at ({row}, {col})")]
    WordOutOfBounds { word: String, row: u8, col: u8 },

    #[error("word {word:?} covers blocked cell ({row}, {col})")]
    WordOnBlockedCell { word: String, row: u8, col: u8 },

    #[error("cell ({row}, {col}) holds {existing:?} but a crossing word needs {incoming:?}")]
    ConflictingLetters {
        row: u8,
        col: u8,
        existing: char,
        incoming: char,
    },

    #[error("letter pool holds invalid letter {0:?}")]
    InvalidPoolLetter(char),

    #[error("letter pool has {len} letters, at most {max} fit the picker")]
    PoolTooLarge { len: usize, max: usize },

    #[error("letter pool cannot spell {word:?}: not enough {letter:?}")]
    MissingLetters { word: String, letter: char },
}

/// Contract misuse by a caller or collaborator.
///
/// These indicate a bug in the input layer, not a player action, and are
/// reported rather than silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("a selection gesture is already active")]
    AlreadySelecting,

    #[error("no selection gesture is active")]
    NotSelecting,

    #[error("cannot shuffle while a selection gesture is active")]
    ShuffleWhileSelecting,

    #[error("no letter with id {0}")]
    UnknownLetter(LetterId),
}
