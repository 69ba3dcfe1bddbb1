//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (puzzle logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Two coordinate spaces are in play:
//!
//! - **Grid space**: [`CellPos`] `(row, col)`, row 0 at the top, col 0 at the left.
//! - **Picker space**: [`Point`] in abstract picker units, origin at the centre of
//!   the letter circle, `+x` to the right and `+y` downwards.
//!
//! [`ScreenProjection`] converts between picker space and terminal cells.
//!
//! # Picker Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PICKER_RADIUS` | 70.0 | Distance from the circle centre to each letter |
//! | `LETTER_HIT_RADIUS` | 25.0 | Radius of each letter's hit region |
//! | `MAX_POOL_LETTERS` | 16 | Maximum number of picker slots |
//! | `FRAME_MS` | 33 | Input poll interval for terminal runners |
//!
//! # Examples
//!
//! ```
//! use word_wheel_types::{CellPos, Orientation, PuzzleInput, LetterId};
//!
//! // Parse an orientation (case-insensitive)
//! let o = Orientation::from_str("v").unwrap();
//! assert_eq!(o, Orientation::Vertical);
//!
//! // Walk along a placed word
//! let origin = CellPos::new(0, 2);
//! assert_eq!(o.step(origin, 2), CellPos::new(2, 2));
//!
//! // Inputs carry stable letter identifiers, not rendering handles
//! let input = PuzzleInput::PointerDown(LetterId(3));
//! assert_eq!(input.as_str(), "pointerDown");
//! ```

/// Distance from the picker centre to each letter slot (picker units).
pub const PICKER_RADIUS: f32 = 70.0;

/// Radius of the circular hit region around each letter (picker units).
pub const LETTER_HIT_RADIUS: f32 = 25.0;

/// Maximum number of letters a picker can hold.
pub const MAX_POOL_LETTERS: usize = 16;

/// Input poll interval for the terminal runner (~30 FPS).
pub const FRAME_MS: u32 = 33;

/// A cell position on the puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Direction a word runs in the grid.
///
/// - **Horizontal**: left to right along a row
/// - **Vertical**: top to bottom along a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse orientation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "horizontal" | "h", "vertical" | "v"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Position of the `index`-th letter of a word starting at `origin`.
    ///
    /// Saturates at `u8::MAX` so that out-of-range words map to a cell that
    /// bounds checks reject instead of wrapping around.
    pub fn step(&self, origin: CellPos, index: usize) -> CellPos {
        let offset = u8::try_from(index).unwrap_or(u8::MAX);
        match self {
            Orientation::Horizontal => CellPos::new(origin.row, origin.col.saturating_add(offset)),
            Orientation::Vertical => CellPos::new(origin.row.saturating_add(offset), origin.col),
        }
    }
}

/// Stable logical identifier of a picker slot.
///
/// This is an index into the letter pool. Renderers map identifiers to
/// visuals; the puzzle never holds a rendering handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterId(pub u8);

impl LetterId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LetterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in picker space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Maps picker space onto terminal cells.
///
/// `origin_col`/`origin_row` is the terminal cell holding the picker centre.
/// Terminal glyphs are roughly twice as tall as they are wide, so the two
/// axes carry separate scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjection {
    pub origin_col: u16,
    pub origin_row: u16,
    /// Picker units covered by one terminal column.
    pub units_per_col: f32,
    /// Picker units covered by one terminal row.
    pub units_per_row: f32,
}

impl ScreenProjection {
    /// Picker-space point at the centre of a terminal cell.
    pub fn to_picker(&self, col: u16, row: u16) -> Point {
        Point::new(
            (col as f32 - self.origin_col as f32) * self.units_per_col,
            (row as f32 - self.origin_row as f32) * self.units_per_row,
        )
    }

    /// Terminal cell containing a picker-space point (may be off-screen).
    pub fn to_screen(&self, p: Point) -> (i32, i32) {
        let col = self.origin_col as f32 + p.x / self.units_per_col;
        let row = self.origin_row as f32 + p.y / self.units_per_row;
        (col.round() as i32, row.round() as i32)
    }
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self {
            origin_col: 0,
            origin_row: 0,
            units_per_col: 5.0,
            units_per_row: 14.0,
        }
    }
}

/// Result of submitting a finalized selection chain.
///
/// Mismatches are ordinary outcomes, never errors: presentation code branches
/// on them to flash or paint feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// Empty chain, or a single-letter tap that spells nothing.
    NoSubmission,
    /// The chain spelled a string that is not a placed word.
    InvalidWord(String),
    /// The chain spelled a placed word that was solved earlier.
    AlreadySolved(String),
    /// The chain spelled an unsolved placed word; it is now solved.
    NewlySolved {
        text: String,
        /// Grid cells of the word, in letter order.
        cells: Vec<CellPos>,
        orientation: Orientation,
    },
}

impl WordOutcome {
    /// Spelled text carried by the outcome, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            WordOutcome::NoSubmission => None,
            WordOutcome::InvalidWord(text) | WordOutcome::AlreadySolved(text) => Some(text),
            WordOutcome::NewlySolved { text, .. } => Some(text),
        }
    }

    pub fn is_newly_solved(&self) -> bool {
        matches!(self, WordOutcome::NewlySolved { .. })
    }

    /// Convert to camelCase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            WordOutcome::NoSubmission => "noSubmission",
            WordOutcome::InvalidWord(_) => "invalidWord",
            WordOutcome::AlreadySolved(_) => "alreadySolved",
            WordOutcome::NewlySolved { .. } => "newlySolved",
        }
    }
}

/// Inputs that drive the puzzle controller.
///
/// These are produced by the input layer (terminal mouse/keys, tests, bots)
/// and consumed by the controller in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PuzzleInput {
    /// Pointer pressed on a known letter.
    PointerDown(LetterId),
    /// Pointer pressed at a picker-space position; hit-tested by the controller.
    PointerDownAt(Point),
    /// Pointer moved while the gesture is active.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// Pointer released outside the picker (or the gesture was interrupted).
    PointerUpOutside,
    /// Reorder the picker letters.
    Shuffle,
}

impl PuzzleInput {
    /// Convert to camelCase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleInput::PointerDown(_) => "pointerDown",
            PuzzleInput::PointerDownAt(_) => "pointerDownAt",
            PuzzleInput::PointerMove(_) => "pointerMove",
            PuzzleInput::PointerUp => "pointerUp",
            PuzzleInput::PointerUpOutside => "pointerUpOutside",
            PuzzleInput::Shuffle => "shuffle",
        }
    }
}

/// Puzzle lifecycle: `Playing` until every word is solved, then `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzlePhase {
    #[default]
    Playing,
    Complete,
}

/// Gesture lifecycle of the selection tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_geometry_defaults() {
        assert_eq!(PICKER_RADIUS, 70.0);
        assert_eq!(LETTER_HIT_RADIUS, 25.0);
        assert!(MAX_POOL_LETTERS >= 4);
    }

    #[test]
    fn orientation_step_walks_rows_and_columns() {
        let origin = CellPos::new(2, 0);
        assert_eq!(Orientation::Horizontal.step(origin, 2), CellPos::new(2, 2));
        assert_eq!(Orientation::Vertical.step(origin, 1), CellPos::new(3, 0));
    }

    #[test]
    fn orientation_step_saturates() {
        let origin = CellPos::new(250, 0);
        assert_eq!(
            Orientation::Vertical.step(origin, 300),
            CellPos::new(u8::MAX, 0)
        );
    }

    #[test]
    fn orientation_parses_short_and_long_forms() {
        assert_eq!(Orientation::from_str("H"), Some(Orientation::Horizontal));
        assert_eq!(Orientation::from_str("Vertical"), Some(Orientation::Vertical));
        assert_eq!(Orientation::from_str("diagonal"), None);
    }

    #[test]
    fn projection_round_trips_cell_centres() {
        let proj = ScreenProjection {
            origin_col: 40,
            origin_row: 12,
            ..ScreenProjection::default()
        };
        let p = proj.to_picker(54, 17);
        assert_eq!(p, Point::new(70.0, 70.0));
        assert_eq!(proj.to_screen(p), (54, 17));
    }

    #[test]
    fn outcome_text_accessor() {
        assert_eq!(WordOutcome::NoSubmission.text(), None);
        assert_eq!(WordOutcome::InvalidWord("XYZ".into()).text(), Some("XYZ"));
        let solved = WordOutcome::NewlySolved {
            text: "GOD".into(),
            cells: vec![CellPos::new(0, 0)],
            orientation: Orientation::Vertical,
        };
        assert!(solved.is_newly_solved());
        assert_eq!(solved.as_str(), "newlySolved");
    }
}
