//! The calculator object front ends drive
//!
//! [`Calculator`] owns a [`CalculatorState`] and the [`Limits`] it runs
//! under, and logs every command it executes.

use tracing::{debug, trace};

use crate::core::{CalculatorState, Command, Digit, Limits, Operation};

/// A calculator: one state value plus the limits it runs under
///
/// The six `press_*`/`clear` methods are the command surface shells call.
/// Each one hands the current state to [`CalculatorState::apply`] and keeps
/// the returned state.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    limits: Limits,
}

impl Calculator {
    /// Creates a calculator with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom limits
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            state: CalculatorState::new(),
            limits,
        }
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Read-only view of the full state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Limits this calculator runs under
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns true while the display shows the error text
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Applies a command
    pub fn execute(&mut self, command: Command) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(command, &self.limits);
        debug!(
            command = %command.label(),
            display = %self.state.display,
            op = ?self.state.op,
            "command applied"
        );
    }

    /// Types a digit
    pub fn press_digit(&mut self, digit: Digit) {
        self.execute(Command::Digit(digit));
    }

    /// Types the decimal point
    pub fn press_decimal_point(&mut self) {
        self.execute(Command::DecimalPoint);
    }

    /// Presses an operator key
    pub fn press_operator(&mut self, op: Operation) {
        self.execute(Command::Operator(op));
    }

    /// Presses `=`
    pub fn press_equals(&mut self) {
        self.execute(Command::Equals);
    }

    /// Erases the last typed character
    pub fn press_backspace(&mut self) {
        self.execute(Command::Backspace);
    }

    /// Resets to the power-on state
    pub fn clear(&mut self) {
        self.execute(Command::Clear);
    }

    /// Feeds every recognised key in `keys` through the key table
    ///
    /// Unrecognised characters are skipped. Returns how many commands ran.
    pub fn press_keys(&mut self, keys: &str) -> usize {
        let mut applied = 0;
        for key in keys.chars() {
            match Command::from_key(key) {
                Some(command) => {
                    self.execute(command);
                    applied += 1;
                }
                None => trace!(?key, "key ignored"),
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_TEXT;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_calculator_new() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.limits(), &Limits::default());
    }

    #[test]
    fn test_calculator_with_limits() {
        let limits = Limits::default().with_max_digits(4);
        let mut calc = Calculator::with_limits(limits);
        calc.press_keys("123456");
        assert_eq!(calc.display(), "1234");
    }

    #[test]
    fn test_press_methods_chain() {
        let mut calc = Calculator::new();
        calc.press_digit(d(5));
        calc.press_operator(Operation::Add);
        calc.press_digit(d(3));
        calc.press_operator(Operation::Add);
        calc.press_digit(d(2));
        calc.press_equals();
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_press_decimal_point_idempotent() {
        let mut calc = Calculator::new();
        calc.press_digit(d(3));
        calc.press_decimal_point();
        let once = calc.display().to_string();
        calc.press_decimal_point();
        calc.press_decimal_point();
        assert_eq!(calc.display(), once);
        assert_eq!(once, "3.");
    }

    #[test]
    fn test_press_backspace() {
        let mut calc = Calculator::new();
        calc.press_keys("5");
        calc.press_backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear_after_error() {
        let mut calc = Calculator::new();
        calc.press_keys("7/0=");
        assert!(calc.is_error());
        assert_eq!(calc.display(), ERROR_TEXT);
        calc.clear();
        assert_eq!(calc.state(), &CalculatorState::default());
    }

    #[test]
    fn test_press_keys_counts_and_skips_unknown() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_keys("1 + 2 ="), 4);
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_press_keys_decimal_math() {
        let mut calc = Calculator::new();
        calc.press_keys(".1+.2=");
        assert_eq!(calc.display(), "0.3");
    }
}
