//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Run,
    NextField,
    PrevField,
    Increment,
    Decrement,
    IncrementBig,
    DecrementBig,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Run,
        KeyCode::Tab | KeyCode::Right => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Left => KeyAction::PrevField,
        KeyCode::Up | KeyCode::Char('+') => KeyAction::Increment,
        KeyCode::Down | KeyCode::Char('-') => KeyAction::Decrement,
        KeyCode::PageUp => KeyAction::IncrementBig,
        KeyCode::PageDown => KeyAction::DecrementBig,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Char('j') => KeyAction::ScrollDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn plain_c_is_unbound() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn enter_triggers_run() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Run);
    }

    #[test]
    fn field_navigation() {
        let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::NextField);

        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(event), KeyAction::PrevField);

        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::PrevField);
    }

    #[test]
    fn adjustment_keys() {
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Increment);

        let event = KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Decrement);

        let event = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::IncrementBig);

        let event = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::DecrementBig);
    }

    #[test]
    fn log_keys() {
        let event = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ToggleLogs);

        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ScrollUp);

        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ScrollDown);
    }

    #[test]
    fn unknown_key() {
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
