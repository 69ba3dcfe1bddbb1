//! Grid module - the fixed occupancy map of the puzzle board
//!
//! The grid is a rectangle of cells, each either active (part of the board)
//! or blocked. Uses a flat row-major vector; occupancy never changes after
//! the puzzle is loaded.

use crate::error::PuzzleError;
use crate::types::CellPos;

/// Board occupancy - `rows` x `cols` cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    active: Vec<bool>,
}

impl Grid {
    /// Build a grid from rows of `0` (blocked) / non-zero (active) values.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_wheel_core::Grid;
    /// use word_wheel_core::types::CellPos;
    ///
    /// let grid = Grid::from_rows(&[[1u8, 1], [1, 0]]).unwrap();
    /// assert!(grid.is_active(CellPos::new(1, 0)));
    /// assert!(!grid.is_active(CellPos::new(1, 1)));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut active = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != expected {
                return Err(PuzzleError::RaggedGrid {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            active.extend(values.iter().map(|&v| v != 0));
        }

        let too_large = || PuzzleError::GridTooLarge {
            rows: rows.len(),
            cols: expected,
        };
        Ok(Self {
            rows: u8::try_from(rows.len()).map_err(|_| too_large())?,
            cols: u8::try_from(expected).map_err(|_| too_large())?,
            active,
        })
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some((pos.row as usize) * (self.cols as usize) + (pos.col as usize))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Check if position lies inside the rectangle
    pub fn contains(&self, pos: CellPos) -> bool {
        self.index(pos).is_some()
    }

    /// Check if position is inside the grid and part of the board
    pub fn is_active(&self, pos: CellPos) -> bool {
        self.index(pos).map(|i| self.active[i]).unwrap_or(false)
    }

}
