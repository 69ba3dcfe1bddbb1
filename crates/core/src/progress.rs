//! Progress tracker - solved counts and win detection

use crate::words::WordBook;

/// Solved vs total words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub solved: usize,
    pub total: usize,
}

impl Progress {
    pub fn remaining(&self) -> usize {
        self.total - self.solved
    }
}

pub fn progress(words: &WordBook) -> Progress {
    Progress {
        solved: words.solved_count(),
        total: words.len(),
    }
}

/// True iff there is at least one word and every word is solved.
///
/// An empty book is never complete.
pub fn is_complete(words: &WordBook) -> bool {
    !words.is_empty() && words.iter().all(|w| w.solved())
}
