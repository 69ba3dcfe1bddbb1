//! Puzzle state - the aggregate owned by the controller

use crate::definition::PuzzleDefinition;
use crate::grid::Grid;
use crate::pool::LetterPool;
use crate::progress;
use crate::selection::SelectionTracker;
use crate::words::WordBook;

/// Grid, words, picker letters and the active selection of one puzzle.
///
/// Built fresh from a definition when a puzzle starts; components receive
/// references to its parts rather than keeping copies.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    pub(crate) grid: Grid,
    pub(crate) words: WordBook,
    pub(crate) pool: LetterPool,
    pub(crate) selection: SelectionTracker,
}

impl PuzzleState {
    pub fn new(definition: &PuzzleDefinition) -> Self {
        Self {
            grid: definition.grid().clone(),
            words: WordBook::from_placements(definition.words()),
            pool: definition.letter_pool().clone(),
            selection: SelectionTracker::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordBook {
        &self.words
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Derived on every call, never cached.
    pub fn is_complete(&self) -> bool {
        progress::is_complete(&self.words)
    }
}
