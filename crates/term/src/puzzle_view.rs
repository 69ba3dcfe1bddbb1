//! PuzzleView: maps a `core::PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellView, PuzzleSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, Point, PuzzlePhase, ScreenProjection, WordOutcome};

/// Rows kept below the picker centre (lower letters, hint, status line).
const PICKER_BOTTOM_MARGIN: u16 = 8;
/// Samples used to draw the picker ring.
const RING_SAMPLES: usize = 64;

const BG: Rgb = Rgb::new(0, 0, 0);
const TILE_BG: Rgb = Rgb::new(40, 44, 60);
const REVEALED_BG: Rgb = Rgb::new(70, 110, 160);
const LETTER_BG: Rgb = Rgb::new(60, 60, 80);
const SELECTED_BG: Rgb = Rgb::new(230, 140, 40);
const PATH_FG: Rgb = Rgb::new(230, 140, 40);
const SOLVED_FG: Rgb = Rgb::new(100, 220, 120);
const REPEAT_FG: Rgb = Rgb::new(240, 220, 80);
const INVALID_FG: Rgb = Rgb::new(220, 80, 80);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Solved,
    AlreadySolved,
    Invalid,
}

/// Message shown after a gesture, derived from its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    /// `None` for outcomes that deserve no message (empty gesture, lone tap).
    pub fn from_outcome(outcome: &WordOutcome) -> Option<Self> {
        let (kind, text) = match outcome {
            WordOutcome::NoSubmission => return None,
            WordOutcome::NewlySolved { text, .. } => (FeedbackKind::Solved, text),
            WordOutcome::AlreadySolved(text) => (FeedbackKind::AlreadySolved, text),
            WordOutcome::InvalidWord(text) => (FeedbackKind::Invalid, text),
        };
        Some(Self {
            kind,
            text: text.clone(),
        })
    }

    pub fn message(&self) -> String {
        match self.kind {
            FeedbackKind::Solved => format!("+ {}", self.text),
            FeedbackKind::AlreadySolved => format!("{} already found", self.text),
            FeedbackKind::Invalid => format!("{} is not in the puzzle", self.text),
        }
    }

    fn style(&self) -> CellStyle {
        let fg = match self.kind {
            FeedbackKind::Solved => SOLVED_FG,
            FeedbackKind::AlreadySolved => REPEAT_FG,
            FeedbackKind::Invalid => INVALID_FG,
        };
        CellStyle::new(fg, BG).bold()
    }
}

/// A lightweight terminal renderer for the word puzzle.
pub struct PuzzleView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Blank columns between grid cells.
    gap_x: u16,
    /// Blank rows between grid rows.
    gap_y: u16,
    /// Row where the grid starts.
    grid_top: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            gap_x: 1,
            gap_y: 1,
            grid_top: 2,
        }
    }
}

impl PuzzleView {
    /// Where the picker sits on screen for a viewport.
    ///
    /// Input handling must use the same projection the view draws with.
    pub fn picker_projection(&self, viewport: Viewport) -> ScreenProjection {
        ScreenProjection {
            origin_col: viewport.width / 2,
            origin_row: viewport.height.saturating_sub(PICKER_BOTTOM_MARGIN),
            ..ScreenProjection::default()
        }
    }

    /// Render the current puzzle into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &PuzzleSnapshot,
        feedback: Option<&Feedback>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let title = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(0, "WORD WHEEL", title);

        let grid_right = self.draw_grid(fb, snap, viewport);
        self.draw_word_panel(fb, snap, viewport, grid_right);

        let proj = self.picker_projection(viewport);
        let top = proj.origin_row.saturating_sub(PICKER_BOTTOM_MARGIN);

        // Formed-word preview above the picker.
        if !snap.formed.is_empty() {
            let preview = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
            fb.put_str_centered(top, &snap.formed, preview);
        } else if let Some(feedback) = feedback {
            fb.put_str_centered(top, &feedback.message(), feedback.style());
        }

        self.draw_picker(fb, snap, proj);
        self.draw_status(fb, snap, viewport);

        if snap.phase == PuzzlePhase::Complete {
            self.draw_complete_overlay(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &PuzzleSnapshot,
        feedback: Option<&Feedback>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, feedback, viewport, &mut fb);
        fb
    }

    /// Screen column of grid column 0, for a grid `cols` wide.
    pub fn grid_left(&self, cols: u8, viewport: Viewport) -> u16 {
        let w = self.grid_width(cols);
        viewport.width.saturating_sub(w) / 2
    }

    /// Top-left terminal cell of a grid cell.
    pub fn grid_cell_origin(&self, row: u8, col: u8, cols: u8, viewport: Viewport) -> (u16, u16) {
        let x = self.grid_left(cols, viewport) + col as u16 * (self.cell_w + self.gap_x);
        let y = self.grid_top + row as u16 * (1 + self.gap_y);
        (x, y)
    }

    fn grid_width(&self, cols: u8) -> u16 {
        let cols = cols as u16;
        (cols * self.cell_w + cols.saturating_sub(1) * self.gap_x).max(1)
    }

    /// Draws the crossword grid; returns the column just right of it.
    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, viewport: Viewport) -> u16 {
        let hidden = CellStyle::new(Rgb::new(90, 90, 100), TILE_BG);
        let revealed = CellStyle::new(Rgb::new(255, 255, 255), REVEALED_BG).bold();

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (x, y) = self.grid_cell_origin(row, col, snap.cols, viewport);
                let (ch, style) = match snap.cell(CellPos::new(row, col)) {
                    Some(CellView::Hidden) => (' ', hidden),
                    Some(CellView::Revealed(c)) => (c, revealed),
                    Some(CellView::Blocked) | None => continue,
                };
                fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
                fb.put_char(x + self.cell_w / 2, y, ch, style);
            }
        }
        self.grid_left(snap.cols, viewport) + self.grid_width(snap.cols)
    }

    fn draw_word_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        viewport: Viewport,
        grid_right: u16,
    ) {
        let panel_x = grid_right.saturating_add(4);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let pending = CellStyle::default().dim();

        let mut y = self.grid_top;
        fb.put_str(panel_x, y, "WORDS", label);
        let x = panel_x + 6;
        let x = x + fb.put_u32(x, y, snap.progress.solved as u32, value);
        fb.put_char(x, y, '/', value);
        fb.put_u32(x + 1, y, snap.progress.total as u32, value);

        for word in &snap.words {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            if word.solved {
                fb.put_str(panel_x, y, &word.text, value);
            } else {
                let blanks = word.text.chars().count() as u16;
                fb.fill_rect(panel_x, y, blanks, 1, '_', pending);
            }
        }
    }

    fn draw_picker(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, proj: ScreenProjection) {
        let ring = CellStyle::new(Rgb::new(80, 80, 100), BG).dim();
        for i in 0..RING_SAMPLES {
            let angle = (i as f32 / RING_SAMPLES as f32) * std::f32::consts::TAU;
            let p = Point::new(
                snap.picker_radius * angle.cos(),
                snap.picker_radius * angle.sin(),
            );
            let (x, y) = proj.to_screen(p);
            fb.put_char_i32(x, y, '·', ring);
        }

        // Rubber band from letter to letter, ending at the pointer.
        let path_style = CellStyle::new(PATH_FG, BG).bold();
        let path = snap.selection_path();
        for pair in path.windows(2) {
            fb.draw_line(proj.to_screen(pair[0]), proj.to_screen(pair[1]), '•', path_style);
        }

        let idle = CellStyle::new(Rgb::new(255, 255, 255), LETTER_BG).bold();
        let selected = CellStyle::new(BG, SELECTED_BG).bold();
        for slot in &snap.slots {
            let style = if snap.is_selected(slot.id) { selected } else { idle };
            let (x, y) = proj.to_screen(slot.center);
            fb.put_char_i32(x - 1, y, ' ', style);
            fb.put_char_i32(x, y, slot.letter, style);
            fb.put_char_i32(x + 1, y, ' ', style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let style = CellStyle::default().dim();
        let hint = if snap.phase == PuzzlePhase::Complete {
            "r restart  q quit"
        } else {
            "drag across letters  s shuffle  r restart  q quit"
        };
        fb.put_str_centered(y, hint, style);
    }

    fn draw_complete_overlay(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let lines = ["PUZZLE COMPLETE", "press R to play again"];
        let w = lines.iter().map(|l| l.len() as u16).max().unwrap_or(0) + 4;
        let h = lines.len() as u16 + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let panel = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(30, 60, 40));
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.put_str_centered(y + 1, lines[0], panel.bold());
        fb.put_str_centered(y + 2, lines[1], panel);
    }
}
