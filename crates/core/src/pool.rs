//! Letter pool - the picker letters and their shuffling
//!
//! The pool is an ordered multiset: one letter per picker slot. Its contents
//! are fixed at load; only the order changes, and only via
//! [`LetterPoolManager::shuffle`].

use arrayvec::ArrayVec;

use crate::error::PuzzleError;
use crate::rng::SimpleRng;
use crate::types::{LetterId, MAX_POOL_LETTERS};

/// Ordered picker letters, indexed by [`LetterId`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    letters: ArrayVec<char, MAX_POOL_LETTERS>,
}

impl LetterPool {
    /// Build a pool from letters in slot order.
    ///
    /// More than `MAX_POOL_LETTERS` letters do not fit the picker.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, PuzzleError> {
        let letters: Vec<char> = letters.into_iter().collect();
        if letters.len() > MAX_POOL_LETTERS {
            return Err(PuzzleError::PoolTooLarge {
                len: letters.len(),
                max: MAX_POOL_LETTERS,
            });
        }
        Ok(Self {
            letters: letters.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter in the given slot
    pub fn letter(&self, id: LetterId) -> Option<char> {
        self.letters.get(id.index()).copied()
    }

    pub fn contains_id(&self, id: LetterId) -> bool {
        id.index() < self.letters.len()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// All slot identifiers, in slot order
    pub fn ids(&self) -> impl Iterator<Item = LetterId> {
        (0..self.letters.len() as u8).map(LetterId)
    }

    /// Concatenate the letters of `chain` in chain order.
    ///
    /// Identifiers outside the pool contribute nothing.
    pub fn spell(&self, chain: &[LetterId]) -> String {
        chain.iter().filter_map(|&id| self.letter(id)).collect()
    }
}

/// Count of each `A..=Z` letter; other characters are ignored.
pub fn letter_histogram(letters: impl IntoIterator<Item = char>) -> [u16; 26] {
    let mut counts = [0u16; 26];
    for c in letters {
        if c.is_ascii_uppercase() {
            counts[(c as u8 - b'A') as usize] += 1;
        }
    }
    counts
}

/// Reorders picker letters with a seeded, unbiased shuffle.
#[derive(Debug, Clone)]
pub struct LetterPoolManager {
    rng: SimpleRng,
}

impl LetterPoolManager {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Produce a uniformly random permutation of `pool`.
    ///
    /// The multiset is preserved exactly; only slot order changes.
    pub fn shuffle(&mut self, pool: &LetterPool) -> LetterPool {
        let mut next = pool.clone();
        self.rng.shuffle(&mut next.letters);
        next
    }
}

impl Default for LetterPoolManager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_follows_chain_order() {
        let pool = LetterPool::new("GODL".chars()).unwrap();
        assert_eq!(pool.spell(&[LetterId(0), LetterId(1), LetterId(2)]), "GOD");
        assert_eq!(pool.spell(&[LetterId(2), LetterId(1), LetterId(0)]), "DOG");
        assert_eq!(pool.spell(&[]), "");
        assert_eq!(pool.spell(&[LetterId(9)]), "");
    }

    #[test]
    fn test_histogram_counts_duplicates() {
        let h = letter_histogram("GOOD".chars());
        assert_eq!(h[(b'O' - b'A') as usize], 2);
        assert_eq!(h[(b'G' - b'A') as usize], 1);
        assert_eq!(h.iter().sum::<u16>(), 4);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let pool = LetterPool::new("GOODLLX".chars()).unwrap();
        let mut manager = LetterPoolManager::new(2024);
        let mut current = pool.clone();
        for _ in 0..50 {
            current = manager.shuffle(&current);
            assert_eq!(current.len(), pool.len());
            assert_eq!(
                letter_histogram(current.letters().iter().copied()),
                letter_histogram(pool.letters().iter().copied())
            );
        }
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        let pool = LetterPool::new("GODL".chars()).unwrap();
        let mut manager = LetterPoolManager::new(5);
        let moved = (0..20).any(|_| manager.shuffle(&pool) != pool);
        assert!(moved);
    }

    #[test]
    fn test_oversized_pool_rejected() {
        assert_eq!(
            LetterPool::new(std::iter::repeat('A').take(40)),
            Err(PuzzleError::PoolTooLarge { len: 40, max: 16 })
        );

        let full = LetterPool::new(std::iter::repeat('A').take(MAX_POOL_LETTERS)).unwrap();
        assert_eq!(full.len(), MAX_POOL_LETTERS);
        assert!(full.contains_id(LetterId(15)));
        assert!(!full.contains_id(LetterId(16)));
    }
}
