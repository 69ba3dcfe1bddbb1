//! Mouse gesture handler for terminal environments.
//!
//! Terminals report presses, drags and releases in cell coordinates and have
//! no notion of "released outside the target". This handler projects cells
//! into picker space and decides which release variant to emit.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Point, PuzzleInput, ScreenProjection};

/// Turns crossterm mouse events into pointer inputs.
#[derive(Debug, Clone)]
pub struct PointerHandler {
    projection: ScreenProjection,
    /// Releases farther than this from the picker centre are "outside".
    picker_extent: f32,
    button_down: bool,
    last_cell: Option<(u16, u16)>,
}

impl PointerHandler {
    /// `picker_extent` is the picker disc radius in picker units, as
    /// reported by the controller's layout.
    pub fn new(projection: ScreenProjection, picker_extent: f32) -> Self {
        Self {
            projection,
            picker_extent,
            button_down: false,
            last_cell: None,
        }
    }

    /// Update the projection after a terminal resize.
    pub fn set_projection(&mut self, projection: ScreenProjection) {
        self.projection = projection;
    }

    pub fn is_dragging(&self) -> bool {
        self.button_down
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<PuzzleInput> {
        let point = self.projection.to_picker(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.button_down = true;
                self.last_cell = Some((event.column, event.row));
                Some(PuzzleInput::PointerDownAt(point))
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved if self.button_down => {
                // Terminals repeat drag reports for the same cell.
                if self.last_cell == Some((event.column, event.row)) {
                    return None;
                }
                self.last_cell = Some((event.column, event.row));
                Some(PuzzleInput::PointerMove(point))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.button_down {
                    return None;
                }
                self.button_down = false;
                self.last_cell = None;
                if self.is_inside(point) {
                    Some(PuzzleInput::PointerUp)
                } else {
                    Some(PuzzleInput::PointerUpOutside)
                }
            }
            _ => None,
        }
    }

    /// The terminal lost focus; a held button will never report its release.
    pub fn handle_focus_lost(&mut self) -> Option<PuzzleInput> {
        if !self.button_down {
            return None;
        }
        self.button_down = false;
        self.last_cell = None;
        Some(PuzzleInput::PointerUpOutside)
    }

    fn is_inside(&self, p: Point) -> bool {
        p.distance_sq(Point::default()) <= self.picker_extent * self.picker_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn handler() -> PointerHandler {
        PointerHandler::new(
            ScreenProjection {
                origin_col: 40,
                origin_row: 12,
                ..ScreenProjection::default()
            },
            95.0,
        )
    }

    #[test]
    fn test_press_projects_into_picker_space() {
        let mut h = handler();
        let input = h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 54, 12));
        assert_eq!(input, Some(PuzzleInput::PointerDownAt(Point::new(70.0, 0.0))));
        assert!(h.is_dragging());
    }

    #[test]
    fn test_drag_deduplicates_cells() {
        let mut h = handler();
        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 12)),
            None
        );
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 41, 12)),
            Some(PuzzleInput::PointerMove(Point::new(5.0, 0.0)))
        );
    }

    #[test]
    fn test_move_without_button_ignored() {
        let mut h = handler();
        assert_eq!(h.handle_mouse(mouse(MouseEventKind::Moved, 41, 12)), None);
        assert_eq!(h.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 41, 12)), None);
    }

    #[test]
    fn test_release_inside_and_outside() {
        let mut h = handler();
        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 42, 13)),
            Some(PuzzleInput::PointerUp)
        );

        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        // 30 columns right is 150 picker units, beyond the letters.
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 70, 12)),
            Some(PuzzleInput::PointerUpOutside)
        );
        assert!(!h.is_dragging());
    }

    #[test]
    fn test_release_honours_picker_extent() {
        let mut h = PointerHandler::new(
            ScreenProjection {
                origin_col: 40,
                origin_row: 12,
                ..ScreenProjection::default()
            },
            10.0,
        );
        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 42, 12)),
            Some(PuzzleInput::PointerUp)
        );
        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 43, 12)),
            Some(PuzzleInput::PointerUpOutside)
        );
    }

    #[test]
    fn test_focus_lost_ends_drag() {
        let mut h = handler();
        assert_eq!(h.handle_focus_lost(), None);
        h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
        assert_eq!(h.handle_focus_lost(), Some(PuzzleInput::PointerUpOutside));
        assert_eq!(h.handle_focus_lost(), None);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut h = handler();
        assert_eq!(
            h.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 40, 12)),
            None
        );
    }
}
