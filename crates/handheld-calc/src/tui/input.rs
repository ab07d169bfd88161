//! Keyboard and mouse input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::core::Command;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a command to the calculator
    Command(Command),
    /// Left click at (column, row)
    Click(u16, u16),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Command(Command::Clear),
                KeyCode::Char('h') => KeyAction::Command(Command::Backspace),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Command::from_key(c).map_or(KeyAction::None, KeyAction::Command),
            KeyCode::Enter => KeyAction::Command(Command::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Command(Command::Backspace),
            KeyCode::Esc => KeyAction::Command(Command::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click(event.column, event.row),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (value, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Command(Command::Digit(Digit::ALL[value]))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Command(Command::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Command(Command::DecimalPoint)
        );
    }

    #[test]
    fn test_handle_equals_keys() {
        let handler = InputHandler::new();
        let equals = KeyAction::Command(Command::Equals);
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), equals);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('='))), equals);
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        let backspace = KeyAction::Command(Command::Backspace);
        assert_eq!(handler.handle_key(key_event(KeyCode::Backspace)), backspace);
        assert_eq!(handler.handle_key(key_event(KeyCode::Delete)), backspace);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('h'))),
            backspace
        );
    }

    #[test]
    fn test_handle_escape_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Command(Command::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Command(Command::Clear)
        );
    }

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ignored_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_mouse_left_click() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Down(MouseButton::Left))),
            KeyAction::Click(4, 7)
        );
    }

    #[test]
    fn test_handle_mouse_other_events() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Down(MouseButton::Right))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Moved)),
            KeyAction::None
        );
    }
}
