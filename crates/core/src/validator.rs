//! Word validator - turns a finished chain into an outcome
//!
//! Validation is a pure transition on the word book: no geometry, no
//! rendering. Order matters: "DOG" and "GOD" are different candidates.

use crate::pool::LetterPool;
use crate::types::{LetterId, WordOutcome};
use crate::words::WordBook;

/// Submit a finished chain against the word book.
///
/// - empty chain: `NoSubmission`
/// - single letter that is not a word (a tap): `NoSubmission`
/// - unknown word: `InvalidWord`, no state change
/// - solved word: `AlreadySolved`, no state change
/// - unsolved word: marks it solved, `NewlySolved` with its cells
pub fn submit(words: &mut WordBook, pool: &LetterPool, chain: &[LetterId]) -> WordOutcome {
    let candidate = pool.spell(chain);
    if candidate.is_empty() {
        return WordOutcome::NoSubmission;
    }

    if let Some(entry) = words.mark_solved(&candidate) {
        return WordOutcome::NewlySolved {
            text: entry.text.clone(),
            cells: entry.cells().collect(),
            orientation: entry.orientation,
        };
    }

    match words.get(&candidate) {
        Some(_) => WordOutcome::AlreadySolved(candidate),
        None if chain.len() == 1 => WordOutcome::NoSubmission,
        None => WordOutcome::InvalidWord(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PuzzleDefinition;
    use crate::types::{CellPos, Orientation};

    fn setup() -> (WordBook, LetterPool) {
        let def = PuzzleDefinition::reference().unwrap();
        (
            WordBook::from_placements(def.words()),
            def.letter_pool().clone(),
        )
    }

    // Reference pool order: G=0 O=1 D=2 L=3
    const G: LetterId = LetterId(0);
    const O: LetterId = LetterId(1);
    const D: LetterId = LetterId(2);
    const L: LetterId = LetterId(3);

    #[test]
    fn test_newly_solved_carries_cells() {
        let (mut words, pool) = setup();
        let outcome = submit(&mut words, &pool, &[L, O, G]);
        assert_eq!(
            outcome,
            WordOutcome::NewlySolved {
                text: "LOG".into(),
                cells: vec![CellPos::new(0, 2), CellPos::new(1, 2), CellPos::new(2, 2)],
                orientation: Orientation::Vertical,
            }
        );
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        let (mut words, pool) = setup();
        assert!(submit(&mut words, &pool, &[G, O, D]).is_newly_solved());
        assert_eq!(
            submit(&mut words, &pool, &[G, O, D]),
            WordOutcome::AlreadySolved("GOD".into())
        );
        assert_eq!(words.solved_count(), 1);
    }

    #[test]
    fn test_order_matters() {
        let (mut words, pool) = setup();
        assert_eq!(
            submit(&mut words, &pool, &[D, G, O]),
            WordOutcome::InvalidWord("DGO".into())
        );
        assert!(submit(&mut words, &pool, &[D, O, G]).is_newly_solved());
        assert!(!words.get("GOD").unwrap().solved());
    }

    #[test]
    fn test_empty_and_tap_are_not_submissions() {
        let (mut words, pool) = setup();
        assert_eq!(submit(&mut words, &pool, &[]), WordOutcome::NoSubmission);
        assert_eq!(submit(&mut words, &pool, &[G]), WordOutcome::NoSubmission);
        assert_eq!(words.solved_count(), 0);
    }
}
