//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::keypad_area;
use crate::core::number::format_value;
use crate::core::{Calculator, CalculatorState, Command, Limits};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator driven by this app
    calculator: Calculator,
    /// Keypad model, highlighted to echo the last command
    keypad: Keypad,
    /// Area of the last frame, used to resolve mouse clicks
    viewport: Rect,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a calculator app with custom limits
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            calculator: Calculator::with_limits(limits),
            keypad: Keypad::new(),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Returns the keypad model
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records the terminal area the next frame is drawn into
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Applies a command and highlights its keypad button
    pub fn apply(&mut self, command: Command) {
        self.keypad.highlight(command);
        self.calculator.execute(command);
    }

    /// Translates a key character and applies it; unknown keys are ignored
    pub fn press_key(&mut self, key: char) {
        if let Some(command) = Command::from_key(key) {
            self.apply(command);
        }
    }

    /// Clicks the keypad at terminal position (x, y)
    ///
    /// Returns the command of the button that was hit, if any.
    pub fn click(&mut self, x: u16, y: u16) -> Option<Command> {
        let area = keypad_area(self.viewport)?;
        let index = self.keypad.hit_test(area, x, y)?;
        let command = self.keypad.get_button(index)?.command;
        debug!(x, y, button = %command.label(), "keypad click");
        self.apply(command);
        Some(command)
    }

    /// Handles one input action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.apply(command),
            KeyAction::Click(x, y) => {
                self.click(x, y);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// One-line description of what the calculator is waiting for
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = self.calculator.state();
        if state.is_error() {
            return "✗ Error. Type a number or press C".into();
        }
        match state.op {
            Some(op) => format!("{} {}", format_value(state.operand), op.symbol()),
            None if state.just_evaluated => format!("= {}", state.display),
            None => "Ready".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operation, ERROR_TEXT};

    fn app_with_keys(keys: &str) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for key in keys.chars() {
            app.press_key(key);
        }
        app
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert!(!app.should_quit());
        assert!(app.keypad().buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_app_with_limits() {
        let mut app = CalculatorApp::with_limits(Limits::default().with_max_digits(2));
        for key in "987".chars() {
            app.press_key(key);
        }
        assert_eq!(app.display(), "98");
    }

    // ===== Command handling =====

    #[test]
    fn test_apply_highlights_button() {
        let mut app = CalculatorApp::new();
        app.apply(Command::Operator(Operation::Multiply));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, '*');
    }

    #[test]
    fn test_press_key_evaluates() {
        let app = app_with_keys("12+30=");
        assert_eq!(app.display(), "42");
    }

    #[test]
    fn test_press_key_ignores_unknown() {
        let app = app_with_keys("4%^");
        assert_eq!(app.display(), "4");
    }

    #[test]
    fn test_handle_action_quit() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_action_none() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::None);
        assert_eq!(app.state(), &CalculatorState::default());
    }

    // ===== Mouse =====

    #[test]
    fn test_click_without_viewport_does_nothing() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.click(5, 5), None);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_click_hits_keypad_button() {
        let mut app = CalculatorApp::new();
        let viewport = Rect::new(0, 0, 80, 24);
        app.set_viewport(viewport);
        let area = keypad_area(viewport).unwrap();

        // first button of the grid is 7
        let command = app.click(area.x + 1, area.y + 1);
        assert_eq!(command.map(|c| c.label()), Some("7".to_string()));
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_handle_action_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app.handle_action(KeyAction::Click(0, 0));
        assert_eq!(app.display(), "0");
    }

    // ===== Status line =====

    #[test]
    fn test_status_ready() {
        assert_eq!(CalculatorApp::new().status_line(), "Ready");
    }

    #[test]
    fn test_status_pending_operator() {
        assert_eq!(app_with_keys("12*").status_line(), "12 *");
    }

    #[test]
    fn test_status_after_equals() {
        assert_eq!(app_with_keys("2+2=").status_line(), "= 4");
    }

    #[test]
    fn test_status_error() {
        let app = app_with_keys("7/0=");
        assert_eq!(app.display(), ERROR_TEXT);
        assert!(app.status_line().starts_with('✗'));
    }
}
