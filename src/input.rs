//! Terminal events to logical game inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Flap, or start a run from the title / game-over screen.
    Jump,
    /// Start/restart without flapping.
    Start,
    ToggleMute,
    Quit,
}

/// Map a key press. Releases and repeats are ignored so a held key is one jump.
pub fn map_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') => {
            Some(InputAction::Jump)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Start),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMute),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// A left click (or tap, in terminals that forward touch as mouse) is a jump.
pub fn map_mouse(mouse: &MouseEvent) -> Option<InputAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Jump),
        _ => None,
    }
}

pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}
