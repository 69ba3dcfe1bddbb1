//! Observer callbacks - how the puzzle talks to presentation code
//!
//! The controller never touches rendering objects. It emits one-way
//! notifications through [`PuzzleObserver`]; renderers and tests decide what
//! to do with them.

use crate::types::{LetterId, Point, WordOutcome};

/// One picker slot after a reorder: identifier, letter and picker centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSlot {
    pub id: LetterId,
    pub letter: char,
    pub center: Point,
}

/// Receiver of puzzle notifications. Every method defaults to a no-op.
pub trait PuzzleObserver {
    /// The selection chain changed (started, grew, or was cleared).
    fn on_selection_changed(&mut self, _chain: &[LetterId], _formed: &str) {}

    /// A finished gesture was validated.
    fn on_word_outcome(&mut self, _outcome: &WordOutcome) {}

    /// Picker letters were reordered; slot mapping must be rebuilt.
    fn on_pool_reordered(&mut self, _slots: &[PoolSlot]) {}

    /// Fired once, on the Playing to Complete transition.
    fn on_puzzle_complete(&mut self) {}
}

impl PuzzleObserver for () {}

impl<T: PuzzleObserver + ?Sized> PuzzleObserver for &mut T {
    fn on_selection_changed(&mut self, chain: &[LetterId], formed: &str) {
        (**self).on_selection_changed(chain, formed);
    }

    fn on_word_outcome(&mut self, outcome: &WordOutcome) {
        (**self).on_word_outcome(outcome);
    }

    fn on_pool_reordered(&mut self, slots: &[PoolSlot]) {
        (**self).on_pool_reordered(slots);
    }

    fn on_puzzle_complete(&mut self) {
        (**self).on_puzzle_complete();
    }
}

/// Owned copy of a notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleNotification {
    SelectionChanged { chain: Vec<LetterId>, formed: String },
    WordOutcome(WordOutcome),
    PoolReordered(Vec<PoolSlot>),
    PuzzleComplete,
}

/// Observer that queues notifications for later draining.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PuzzleNotification>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PuzzleNotification] {
        &self.events
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PuzzleNotification> {
        self.events.drain(..)
    }

    /// Recorded word outcomes, oldest first.
    pub fn outcomes(&self) -> impl Iterator<Item = &WordOutcome> {
        self.events.iter().filter_map(|e| match e {
            PuzzleNotification::WordOutcome(o) => Some(o),
            _ => None,
        })
    }

    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PuzzleNotification::PuzzleComplete))
            .count()
    }
}

impl PuzzleObserver for EventLog {
    fn on_selection_changed(&mut self, chain: &[LetterId], formed: &str) {
        self.events.push(PuzzleNotification::SelectionChanged {
            chain: chain.to_vec(),
            formed: formed.to_string(),
        });
    }

    fn on_word_outcome(&mut self, outcome: &WordOutcome) {
        self.events.push(PuzzleNotification::WordOutcome(outcome.clone()));
    }

    fn on_pool_reordered(&mut self, slots: &[PoolSlot]) {
        self.events.push(PuzzleNotification::PoolReordered(slots.to_vec()));
    }

    fn on_puzzle_complete(&mut self) {
        self.events.push(PuzzleNotification::PuzzleComplete);
    }
}
