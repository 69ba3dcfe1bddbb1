//! Word book - the mapping from word text to its placed entry

use std::collections::HashMap;

use crate::definition::WordPlacement;
use crate::types::{CellPos, Orientation};

/// A placed word and whether the player has found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub origin: CellPos,
    pub orientation: Orientation,
    solved: bool,
}

impl WordEntry {
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Grid cells of the word, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.text.len()).map(move |i| self.orientation.step(self.origin, i))
    }
}

impl From<&WordPlacement> for WordEntry {
    fn from(p: &WordPlacement) -> Self {
        Self {
            text: p.text.clone(),
            origin: p.origin,
            orientation: p.orientation,
            solved: false,
        }
    }
}

/// Words keyed by text, iterated in definition order.
#[derive(Debug, Clone, Default)]
pub struct WordBook {
    entries: Vec<WordEntry>,
    by_text: HashMap<String, usize>,
}

impl WordBook {
    /// Build a book with every word unsolved.
    pub fn from_placements(placements: &[WordPlacement]) -> Self {
        let entries: Vec<WordEntry> = placements.iter().map(WordEntry::from).collect();
        let by_text = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.text.clone(), i))
            .collect();
        Self { entries, by_text }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, text: &str) -> Option<&WordEntry> {
        self.by_text.get(text).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    pub fn solved_count(&self) -> usize {
        self.entries.iter().filter(|e| e.solved).count()
    }

    /// Flip `text` to solved.
    ///
    /// Returns the entry only on the unsolved-to-solved transition; unknown
    /// and already solved words return `None` and leave the book untouched.
    pub fn mark_solved(&mut self, text: &str) -> Option<&WordEntry> {
        let &i = self.by_text.get(text)?;
        let entry = &mut self.entries[i];
        if entry.solved {
            return None;
        }
        entry.solved = true;
        Some(entry)
    }

    /// Whether any solved word covers `pos`.
    pub fn is_revealed(&self, pos: CellPos) -> bool {
        self.entries
            .iter()
            .filter(|e| e.solved)
            .any(|e| e.cells().any(|c| c == pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> WordBook {
        WordBook::from_placements(&[
            WordPlacement::new("GOD", CellPos::new(0, 0), Orientation::Vertical),
            WordPlacement::new("DOG", CellPos::new(2, 0), Orientation::Horizontal),
        ])
    }

    #[test]
    fn test_mark_solved_transitions_once() {
        let mut book = book();
        assert_eq!(book.solved_count(), 0);
        assert!(book.mark_solved("GOD").is_some());
        assert!(book.mark_solved("GOD").is_none());
        assert!(book.mark_solved("CAT").is_none());
        assert_eq!(book.solved_count(), 1);
        assert!(book.get("GOD").unwrap().solved());
        assert!(!book.get("DOG").unwrap().solved());
    }

    #[test]
    fn test_revealed_cells_follow_solved_words() {
        let mut book = book();
        assert!(!book.is_revealed(CellPos::new(1, 0)));
        book.mark_solved("GOD");
        assert!(book.is_revealed(CellPos::new(1, 0)));
        assert!(book.is_revealed(CellPos::new(2, 0)));
        assert!(!book.is_revealed(CellPos::new(2, 1)));
    }

    #[test]
    fn test_iteration_keeps_definition_order() {
        let texts: Vec<_> = book().iter().map(|e| e.text.clone()).collect();
        assert_eq!(texts, vec!["GOD", "DOG"]);
    }
}
