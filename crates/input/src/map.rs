//! Key mapping from terminal events to puzzle inputs.

use crate::types::PuzzleInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to puzzle inputs.
///
/// Gestures come from the mouse; the keyboard only drives the buttons.
pub fn map_key_event(key: KeyEvent) -> Option<PuzzleInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => Some(PuzzleInput::Shuffle),
        _ => None,
    }
}

/// Check if key asks for a fresh puzzle.
///
/// Restarting replaces the controller, so it is not a puzzle input.
pub fn is_restart(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
