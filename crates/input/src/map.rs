//! Key mapping from terminal events to movement actions.

use crate::types::MoveAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a movement action.
pub fn map_key(key: KeyEvent) -> Option<MoveAction> {
    match key.code {
        KeyCode::Left => Some(MoveAction::TurnLeft),
        KeyCode::Right => Some(MoveAction::TurnRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveAction::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveAction::Backward),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveAction::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveAction::StrafeRight),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
