//! Puzzle controller - the state machine host
//!
//! This module ties together all core components: definition, selection,
//! validation, progress, pool shuffling and picker hit-testing. It reacts to
//! pointer input and reports through a [`PuzzleObserver`].
//!
//! ```text
//! Playing --(last word solved)--> Complete
//! ```
//!
//! Complete is terminal: gestures and shuffles are ignored for the rest of
//! the controller's life. Playing again means building a new controller
//! from the same definition.

use tracing::{debug, info, warn};

use crate::definition::PuzzleDefinition;
use crate::error::ContractViolation;
use crate::layout::PickerLayout;
use crate::observer::{PoolSlot, PuzzleObserver};
use crate::pool::LetterPoolManager;
use crate::progress::{self, Progress};
use crate::snapshot::{CellView, PuzzleSnapshot, WordStatus};
use crate::state::PuzzleState;
use crate::types::{CellPos, LetterId, Point, PuzzleInput, PuzzlePhase, WordOutcome};
use crate::validator;

/// Owns the puzzle state and drives it from pointer input.
#[derive(Debug)]
pub struct PuzzleController<O: PuzzleObserver = ()> {
    definition: PuzzleDefinition,
    state: PuzzleState,
    layout: PickerLayout,
    pool_manager: LetterPoolManager,
    phase: PuzzlePhase,
    /// Last pointer position of the active gesture (for the rubber-band line).
    pointer: Option<Point>,
    observer: O,
}

impl<O: PuzzleObserver> PuzzleController<O> {
    /// Start a puzzle. `seed` drives picker shuffles.
    pub fn new(definition: PuzzleDefinition, seed: u32, observer: O) -> Self {
        let state = PuzzleState::new(&definition);
        let layout = PickerLayout::standard(state.pool().len());
        Self {
            definition,
            state,
            layout,
            pool_manager: LetterPoolManager::new(seed),
            phase: PuzzlePhase::Playing,
            pointer: None,
            observer,
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PuzzlePhase::Complete
    }

    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn progress(&self) -> Progress {
        progress::progress(self.state.words())
    }

    /// Letters of the active chain.
    pub fn selection(&self) -> &[LetterId] {
        self.state.selection().chain()
    }

    /// Preview of the word being formed.
    pub fn formed_word(&self) -> String {
        self.state.pool().spell(self.selection())
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Dispatch any input. Returns the outcome for gesture-ending inputs.
    pub fn handle(&mut self, input: PuzzleInput) -> Result<Option<WordOutcome>, ContractViolation> {
        match input {
            PuzzleInput::PointerDown(id) => self.pointer_down(id).map(|_| None),
            PuzzleInput::PointerDownAt(p) => self.pointer_down_at(p).map(|_| None),
            PuzzleInput::PointerMove(p) => {
                self.pointer_move(p);
                Ok(None)
            }
            PuzzleInput::PointerUp => Ok(self.pointer_up()),
            PuzzleInput::PointerUpOutside => Ok(self.pointer_up_outside()),
            PuzzleInput::Shuffle => self.shuffle().map(|_| None),
        }
    }

    /// Start a gesture on a letter.
    ///
    /// A second pointer-down during a gesture is rejected and leaves the
    /// active chain untouched.
    pub fn pointer_down(&mut self, id: LetterId) -> Result<(), ContractViolation> {
        if self.is_complete() {
            debug!(letter = %id, "pointer-down ignored: puzzle complete");
            return Ok(());
        }
        if !self.state.pool.contains_id(id) {
            warn!(letter = %id, "pointer-down on unknown letter");
            return Err(ContractViolation::UnknownLetter(id));
        }
        if let Err(err) = self.state.selection.begin(id) {
            warn!(letter = %id, %err, "pointer-down rejected");
            return Err(err);
        }
        self.pointer = self.layout.center(id);
        debug!(letter = %id, ch = ?self.state.pool.letter(id), "selection started");
        self.emit_selection();
        Ok(())
    }

    /// Hit-test the picker and start a gesture on the letter under `p`.
    ///
    /// Pressing outside every letter does nothing.
    pub fn pointer_down_at(&mut self, p: Point) -> Result<Option<LetterId>, ContractViolation> {
        if self.is_complete() {
            return Ok(None);
        }
        let Some(id) = self.layout.hit_test(p, |_| false) else {
            return Ok(None);
        };
        self.pointer_down(id)?;
        self.pointer = Some(p);
        Ok(Some(id))
    }

    /// Track the pointer and extend the chain with a newly hovered letter.
    ///
    /// Returns the appended letter, if any. Moves outside a gesture are
    /// ignored.
    pub fn pointer_move(&mut self, p: Point) -> Option<LetterId> {
        if self.is_complete() || !self.state.selection.is_selecting() {
            return None;
        }
        self.pointer = Some(p);

        let selection = &self.state.selection;
        let hovered = self.layout.hit_test(p, |id| selection.contains(id))?;
        match self.state.selection.extend(hovered) {
            Ok(true) => {
                debug!(letter = %hovered, formed = %self.formed_word(), "selection extended");
                self.emit_selection();
                Some(hovered)
            }
            Ok(false) => None,
            Err(err) => {
                warn!(%err, "hover extend rejected");
                None
            }
        }
    }

    /// Finish the gesture and validate the chain.
    ///
    /// Returns `None` only when the puzzle is already complete.
    pub fn pointer_up(&mut self) -> Option<WordOutcome> {
        self.finish_gesture()
    }

    /// Same as [`pointer_up`](Self::pointer_up): release outside the picker
    /// still submits whatever was chained.
    pub fn pointer_up_outside(&mut self) -> Option<WordOutcome> {
        self.finish_gesture()
    }

    fn finish_gesture(&mut self) -> Option<WordOutcome> {
        if self.is_complete() {
            return None;
        }

        let chain = self.state.selection.finish();
        self.pointer = None;
        if !chain.is_empty() {
            self.emit_selection();
        }

        let outcome = validator::submit(&mut self.state.words, &self.state.pool, &chain);
        match &outcome {
            WordOutcome::NewlySolved { text, .. } => {
                let p = self.progress();
                info!(word = %text, solved = p.solved, total = p.total, "word solved");
            }
            other => debug!(outcome = other.as_str(), text = ?other.text(), "gesture finished"),
        }
        self.observer.on_word_outcome(&outcome);

        if outcome.is_newly_solved() && self.state.is_complete() {
            self.phase = PuzzlePhase::Complete;
            info!("puzzle complete");
            self.observer.on_puzzle_complete();
        }

        Some(outcome)
    }

    /// Reorder the picker letters.
    ///
    /// Rejected during a gesture; ignored once the puzzle is complete.
    pub fn shuffle(&mut self) -> Result<(), ContractViolation> {
        if self.is_complete() {
            debug!("shuffle ignored: puzzle complete");
            return Ok(());
        }
        if self.state.selection.is_selecting() {
            warn!("shuffle rejected during selection");
            return Err(ContractViolation::ShuffleWhileSelecting);
        }

        self.state.pool = self.pool_manager.shuffle(&self.state.pool);
        let letters: String = self.state.pool.letters().iter().collect();
        debug!(%letters, "pool shuffled");
        let slots = self.pool_slots();
        self.observer.on_pool_reordered(&slots);
        Ok(())
    }

    /// Every picker slot with its current letter and centre.
    pub fn pool_slots(&self) -> Vec<PoolSlot> {
        self.state
            .pool()
            .ids()
            .filter_map(|id| {
                Some(PoolSlot {
                    id,
                    letter: self.state.pool().letter(id)?,
                    center: self.layout.center(id).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Copy the state out for rendering.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        let grid = self.state.grid();
        let words = self.state.words();

        let mut cells = Vec::with_capacity(grid.rows() as usize * grid.cols() as usize);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = CellPos::new(row, col);
                let view = if !grid.is_active(pos) {
                    CellView::Blocked
                } else if words.is_revealed(pos) {
                    self.definition
                        .letter_at(pos)
                        .map(CellView::Revealed)
                        .unwrap_or(CellView::Hidden)
                } else {
                    CellView::Hidden
                };
                cells.push(view);
            }
        }

        PuzzleSnapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
            slots: self.pool_slots(),
            chain: self.selection().to_vec(),
            formed: self.formed_word(),
            pointer: self.pointer,
            phase: self.phase,
            progress: self.progress(),
            words: words
                .iter()
                .map(|w| WordStatus {
                    text: w.text.clone(),
                    solved: w.solved(),
                })
                .collect(),
            picker_radius: self.layout.radius(),
        }
    }

    fn emit_selection(&mut self) {
        let formed = self.formed_word();
        self.observer
            .on_selection_changed(self.state.selection.chain(), &formed);
    }
}
