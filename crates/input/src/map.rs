//! Key mapping from terminal events to input identifiers.

use crate::types::InputAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Identifier for a key, as understood by [`InputAction::from_identifier`].
///
/// Arrow keys map to their DOM-style names; vi and WASD letters alias them.
pub fn key_identifier(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some("ArrowLeft"),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some("ArrowRight"),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some("ArrowDown"),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some("ArrowUp"),
        KeyCode::Esc => Some("Escape"),
        _ => None,
    }
}

/// Map a key to the action it holds. Unrecognized keys yield None.
pub fn map_key(code: KeyCode) -> Option<InputAction> {
    key_identifier(code).and_then(InputAction::from_identifier)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
