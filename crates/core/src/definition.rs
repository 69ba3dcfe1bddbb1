//! Puzzle definition - the static fixture a puzzle is loaded from
//!
//! A definition bundles the grid occupancy, the placed words and the initial
//! picker letters. All content invariants are checked once in
//! [`PuzzleDefinition::new`]; a definition that exists is well-formed.

use std::collections::HashMap;

use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::pool::{letter_histogram, LetterPool};
use crate::types::{CellPos, Orientation};

/// A word placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    pub text: String,
    pub origin: CellPos,
    pub orientation: Orientation,
}

impl WordPlacement {
    pub fn new(text: impl Into<String>, origin: CellPos, orientation: Orientation) -> Self {
        Self {
            text: text.into(),
            origin,
            orientation,
        }
    }

    /// Grid cells covered by the word, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.text.len()).map(move |i| self.orientation.step(self.origin, i))
    }

    /// Cells paired with the letter each one holds.
    pub fn lettered_cells(&self) -> impl Iterator<Item = (CellPos, char)> + '_ {
        self.cells().zip(self.text.chars())
    }
}

/// Validated puzzle content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    grid: Grid,
    words: Vec<WordPlacement>,
    pool: LetterPool,
}

impl PuzzleDefinition {
    /// Validate and build a definition.
    ///
    /// Fails fast on the first content error: no words, malformed or
    /// duplicate word text, a word leaving the grid or covering a blocked
    /// cell, crossing words disagreeing on a letter, or a pool that cannot
    /// spell every word.
    pub fn new(
        grid: Grid,
        words: Vec<WordPlacement>,
        pool: impl IntoIterator<Item = char>,
    ) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }

        let pool = LetterPool::new(pool)?;
        if let Some(&bad) = pool.letters().iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(PuzzleError::InvalidPoolLetter(bad));
        }
        let available = letter_histogram(pool.letters().iter().copied());

        let mut placed: HashMap<CellPos, char> = HashMap::new();
        let mut seen: Vec<&str> = Vec::with_capacity(words.len());

        for word in &words {
            let text = word.text.as_str();
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidWordText(word.text.clone()));
            }
            if seen.contains(&text) {
                return Err(PuzzleError::DuplicateWord(word.text.clone()));
            }
            seen.push(text);

            for (cell, letter) in word.lettered_cells() {
                if !grid.contains(cell) {
                    return Err(PuzzleError::WordOutOfBounds {
                        word: word.text.clone(),
                        row: cell.row,
                        col: cell.col,
                    });
                }
                if !grid.is_active(cell) {
                    return Err(PuzzleError::WordOnBlockedCell {
                        word: word.text.clone(),
                        row: cell.row,
                        col: cell.col,
                    });
                }
                match placed.get(&cell) {
                    Some(&existing) if existing != letter => {
                        return Err(PuzzleError::ConflictingLetters {
                            row: cell.row,
                            col: cell.col,
                            existing,
                            incoming: letter,
                        });
                    }
                    Some(_) => {}
                    None => {
                        placed.insert(cell, letter);
                    }
                }
            }

            let needed = letter_histogram(text.chars());
            if let Some(slot) = (0..needed.len()).find(|&i| needed[i] > available[i]) {
                return Err(PuzzleError::MissingLetters {
                    word: word.text.clone(),
                    letter: (b'A' + slot as u8) as char,
                });
            }
        }

        Ok(Self { grid, words, pool })
    }

    /// The 3x4 reference puzzle: GOLD, GOD, DOG and LOG over the pool `GODL`.
    ///
    /// ```text
    /// G O L D
    /// O . O .
    /// D O G .
    /// ```
    pub fn reference() -> Result<Self, PuzzleError> {
        let grid = Grid::from_rows(&[[1u8, 1, 1, 1], [1, 0, 1, 0], [1, 1, 1, 0]])?;
        let words = vec![
            WordPlacement::new("GOLD", CellPos::new(0, 0), Orientation::Horizontal),
            WordPlacement::new("GOD", CellPos::new(0, 0), Orientation::Vertical),
            WordPlacement::new("DOG", CellPos::new(2, 0), Orientation::Horizontal),
            WordPlacement::new("LOG", CellPos::new(0, 2), Orientation::Vertical),
        ];
        Self::new(grid, words, "GODL".chars())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[WordPlacement] {
        &self.words
    }

    pub fn pool(&self) -> &[char] {
        self.pool.letters()
    }

    /// Picker letters in their initial order.
    pub fn letter_pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Letter shown in a grid cell once any covering word is solved.
    pub fn letter_at(&self, pos: CellPos) -> Option<char> {
        self.words
            .iter()
            .flat_map(|w| w.lettered_cells())
            .find(|(cell, _)| *cell == pos)
            .map(|(_, letter)| letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(&[[1u8, 1, 1, 1], [1, 0, 1, 0], [1, 1, 1, 0]]).unwrap()
    }

    #[test]
    fn test_reference_is_valid() {
        let def = PuzzleDefinition::reference().unwrap();
        assert_eq!(def.words().len(), 4);
        assert_eq!(def.pool(), &['G', 'O', 'D', 'L']);
        assert_eq!(def.letter_at(CellPos::new(2, 2)), Some('G'));
        assert_eq!(def.letter_at(CellPos::new(1, 2)), Some('O'));
        assert_eq!(def.letter_at(CellPos::new(1, 1)), None);
    }

    #[test]
    fn test_word_cells_follow_orientation() {
        let w = WordPlacement::new("LOG", CellPos::new(0, 2), Orientation::Vertical);
        let cells: Vec<_> = w.cells().collect();
        assert_eq!(
            cells,
            vec![CellPos::new(0, 2), CellPos::new(1, 2), CellPos::new(2, 2)]
        );
    }

    #[test]
    fn test_no_words_rejected() {
        assert_eq!(
            PuzzleDefinition::new(grid(), vec![], "GODL".chars()),
            Err(PuzzleError::NoWords)
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let words = vec![WordPlacement::new(
            "GOLD",
            CellPos::new(0, 1),
            Orientation::Horizontal,
        )];
        assert_eq!(
            PuzzleDefinition::new(grid(), words, "GODL".chars()),
            Err(PuzzleError::WordOutOfBounds {
                word: "GOLD".into(),
                row: 0,
                col: 4
            })
        );
    }

    #[test]
    fn test_blocked_cell_rejected() {
        let words = vec![WordPlacement::new(
            "DOG",
            CellPos::new(1, 0),
            Orientation::Horizontal,
        )];
        assert_eq!(
            PuzzleDefinition::new(grid(), words, "GODL".chars()),
            Err(PuzzleError::WordOnBlockedCell {
                word: "DOG".into(),
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_conflicting_crossing_rejected() {
        let words = vec![
            WordPlacement::new("GOLD", CellPos::new(0, 0), Orientation::Horizontal),
            WordPlacement::new("DOG", CellPos::new(0, 0), Orientation::Vertical),
        ];
        assert_eq!(
            PuzzleDefinition::new(grid(), words, "GODL".chars()),
            Err(PuzzleError::ConflictingLetters {
                row: 0,
                col: 0,
                existing: 'G',
                incoming: 'D'
            })
        );
    }

    #[test]
    fn test_shared_letter_crossing_allowed() {
        let words = vec![
            WordPlacement::new("GOLD", CellPos::new(0, 0), Orientation::Horizontal),
            WordPlacement::new("GOD", CellPos::new(0, 0), Orientation::Vertical),
        ];
        assert!(PuzzleDefinition::new(grid(), words, "GODL".chars()).is_ok());
    }

    #[test]
    fn test_pool_missing_letters_rejected() {
        let words = vec![WordPlacement::new(
            "GOLD",
            CellPos::new(0, 0),
            Orientation::Horizontal,
        )];
        assert_eq!(
            PuzzleDefinition::new(grid(), words, "GOD".chars()),
            Err(PuzzleError::MissingLetters {
                word: "GOLD".into(),
                letter: 'L'
            })
        );
    }

    #[test]
    fn test_bad_text_and_duplicates_rejected() {
        let lower = vec![WordPlacement::new(
            "gold",
            CellPos::new(0, 0),
            Orientation::Horizontal,
        )];
        assert_eq!(
            PuzzleDefinition::new(grid(), lower, "GODL".chars()),
            Err(PuzzleError::InvalidWordText("gold".into()))
        );

        let dup = vec![
            WordPlacement::new("GOD", CellPos::new(0, 0), Orientation::Vertical),
            WordPlacement::new("GOD", CellPos::new(0, 0), Orientation::Vertical),
        ];
        assert_eq!(
            PuzzleDefinition::new(grid(), dup, "GODL".chars()),
            Err(PuzzleError::DuplicateWord("GOD".into()))
        );
    }

    #[test]
    fn test_pool_validation() {
        let words = vec![WordPlacement::new(
            "GOD",
            CellPos::new(0, 0),
            Orientation::Vertical,
        )];
        assert_eq!(
            PuzzleDefinition::new(grid(), words.clone(), "GOd".chars()),
            Err(PuzzleError::InvalidPoolLetter('d'))
        );
        assert_eq!(
            PuzzleDefinition::new(grid(), words, std::iter::repeat('G').take(17)),
            Err(PuzzleError::PoolTooLarge { len: 17, max: 16 })
        );
    }
}
