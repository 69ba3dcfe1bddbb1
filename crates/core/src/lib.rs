//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and gesture
//! handling. It has **no dependencies** on rendering or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Testable**: Drive it with [`PuzzleInput`](types::PuzzleInput) values and an [`EventLog`]
//! - **Portable**: Can run behind any renderer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`definition`]: validated puzzle definitions (grid, placed words, letter pool)
//! - [`grid`]: active/blocked cell mask
//! - [`words`]: placed words and their solved flags
//! - [`pool`]: picker letters and the shuffle manager
//! - [`selection`]: the letter chain of one drag gesture
//! - [`validator`]: turns a finished chain into a [`WordOutcome`](types::WordOutcome)
//! - [`progress`]: solved counts and completion
//! - [`layout`]: circular picker geometry and hit-testing
//! - [`controller`]: the state machine tying everything together
//! - [`observer`]: notifications for presentation code
//!
//! # Puzzle Rules
//!
//! - A gesture starts on a letter and chains every further letter the pointer
//!   passes over; a letter is used at most once per gesture
//! - Releasing the pointer (anywhere) submits the chain
//! - Matching is exact and order-sensitive; there is no dictionary
//! - Solving a word reveals its cells; the puzzle completes when every placed
//!   word is solved
//!
//! # Example
//!
//! ```
//! use word_wheel_core::{EventLog, PuzzleController, PuzzleDefinition};
//! use word_wheel_core::types::{LetterId, WordOutcome};
//!
//! let definition = PuzzleDefinition::reference().unwrap();
//! let mut puzzle = PuzzleController::new(definition, 12345, EventLog::new());
//!
//! // Trace D, O, G across the picker
//! puzzle.pointer_down(LetterId(2)).unwrap();
//! for id in [LetterId(1), LetterId(0)] {
//!     let center = puzzle.layout().center(id).unwrap();
//!     puzzle.pointer_move(center);
//! }
//!
//! let outcome = puzzle.pointer_up().unwrap();
//! assert!(matches!(outcome, WordOutcome::NewlySolved { ref text, .. } if text == "DOG"));
//! assert_eq!(puzzle.progress().solved, 1);
//! ```

pub mod controller;
pub mod definition;
pub mod error;
pub mod grid;
pub mod layout;
pub mod observer;
pub mod pool;
pub mod progress;
pub mod rng;
pub mod selection;
pub mod snapshot;
pub mod state;
pub mod validator;
pub mod words;

pub use word_wheel_types as types;

// Re-export commonly used types for convenience
pub use controller::PuzzleController;
pub use definition::{PuzzleDefinition, WordPlacement};
pub use error::{ContractViolation, PuzzleError};
pub use grid::Grid;
pub use layout::{HitRegion, PickerLayout};
pub use observer::{EventLog, PoolSlot, PuzzleNotification, PuzzleObserver};
pub use pool::{LetterPool, LetterPoolManager};
pub use progress::Progress;
pub use rng::SimpleRng;
pub use selection::{SelectionChain, SelectionTracker};
pub use snapshot::{CellView, PuzzleSnapshot, WordStatus};
pub use state::PuzzleState;
pub use words::{WordBook, WordEntry};
