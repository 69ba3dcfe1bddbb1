use crate::observer::PoolSlot;
use crate::progress::Progress;
use crate::types::{CellPos, LetterId, Point, PuzzlePhase};

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Blocked,
    Hidden,
    Revealed(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStatus {
    pub text: String,
    pub solved: bool,
}

/// Read-only copy of the puzzle for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cell views (`rows * cols` entries).
    pub cells: Vec<CellView>,
    pub slots: Vec<PoolSlot>,
    pub chain: Vec<LetterId>,
    pub formed: String,
    pub pointer: Option<Point>,
    pub phase: PuzzlePhase,
    pub progress: Progress,
    pub words: Vec<WordStatus>,
    pub picker_radius: f32,
}

impl PuzzleSnapshot {
    pub fn cell(&self, pos: CellPos) -> Option<CellView> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells
            .get((pos.row as usize) * (self.cols as usize) + (pos.col as usize))
            .copied()
    }

    pub fn is_selected(&self, id: LetterId) -> bool {
        self.chain.contains(&id)
    }

    pub fn slot(&self, id: LetterId) -> Option<&PoolSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Polyline for the selection: chained slot centres, then the pointer.
    pub fn selection_path(&self) -> Vec<Point> {
        let mut path: Vec<Point> = self
            .chain
            .iter()
            .filter_map(|&id| self.slot(id).map(|s| s.center))
            .collect();
        if let (false, Some(p)) = (path.is_empty(), self.pointer) {
            path.push(p);
        }
        path
    }
}
