//! Key mapping from terminal events to clock actions.

use crate::types::ClockAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to clock actions.
///
/// Only presses count; repeats and releases (on terminals that report them)
/// are ignored so one keystroke switches one profile.
pub fn handle_key_event(key: KeyEvent) -> Option<ClockAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => Some(ClockAction::NextProfile),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') => Some(ClockAction::PrevProfile),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(ClockAction::ToggleMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ClockAction::Reload),
        _ => None,
    }
}

/// Check if key should quit the clock.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
