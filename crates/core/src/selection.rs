//! Selection tracker - the letter chain of the active drag gesture
//!
//! Selection is hover based, not adjacency based: any picker letter may follow
//! any other, but a letter already in the chain is never added again.
//!
//! ```text
//! Idle --begin--> Selecting --extend*--> Selecting --finish--> Idle
//! ```

use arrayvec::ArrayVec;

use crate::error::ContractViolation;
use crate::types::{LetterId, SelectionPhase, MAX_POOL_LETTERS};

/// Ordered letters of one gesture, each at most once.
pub type SelectionChain = ArrayVec<LetterId, MAX_POOL_LETTERS>;

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    chain: SelectionChain,
    phase: SelectionPhase,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn is_selecting(&self) -> bool {
        self.phase == SelectionPhase::Selecting
    }

    pub fn chain(&self) -> &[LetterId] {
        &self.chain
    }

    pub fn contains(&self, id: LetterId) -> bool {
        self.chain.contains(&id)
    }

    pub fn last(&self) -> Option<LetterId> {
        self.chain.last().copied()
    }

    /// Start a gesture on `id`. The chain becomes `[id]`.
    pub fn begin(&mut self, id: LetterId) -> Result<(), ContractViolation> {
        if self.is_selecting() {
            return Err(ContractViolation::AlreadySelecting);
        }
        self.chain.clear();
        self.chain.push(id);
        self.phase = SelectionPhase::Selecting;
        Ok(())
    }

    /// Append a hovered letter.
    ///
    /// Returns `Ok(false)` when the letter is already in the chain (including
    /// the last position), `Ok(true)` when it was appended.
    pub fn extend(&mut self, id: LetterId) -> Result<bool, ContractViolation> {
        if !self.is_selecting() {
            return Err(ContractViolation::NotSelecting);
        }
        if self.contains(id) {
            return Ok(false);
        }
        // Distinct ids never exceed the pool size, which is capped at capacity.
        Ok(self.chain.try_push(id).is_ok())
    }

    /// End the gesture, returning the frozen chain. Always succeeds; the
    /// chain is empty if no gesture was active.
    pub fn finish(&mut self) -> SelectionChain {
        self.phase = SelectionPhase::Idle;
        std::mem::take(&mut self.chain)
    }
}
