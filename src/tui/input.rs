//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input.
///
/// `q` and Ctrl-C quit; every other key is a no-op (rendering happens on
/// tick, not on input).
pub fn handle_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('Q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(event), KeyAction::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key(key(KeyCode::Char('c'))), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Up)), KeyAction::None);
    }
}
