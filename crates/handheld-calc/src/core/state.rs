//! Calculator state and its transitions
//!
//! [`CalculatorState::apply`] is the whole state machine: it takes the current
//! state and a [`Command`] and returns the next state. Every command is total.
//! Evaluation failures become the error display, never a panic or an `Err`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::number::{digit_count, format_value, parse_display};
use crate::core::{CalcError, Command, Digit, Operation, ERROR_TEXT};

/// Bounds applied while the state evolves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Digits accepted while typing a number; further presses are ignored
    ///
    /// The zero placed in front of a leading decimal point does not count,
    /// so a cap of 3 accepts `.123`.
    pub max_digits: usize,
    /// Divisors with a smaller magnitude count as zero
    pub zero_epsilon: f64,
}

impl Limits {
    /// Default digit cap, the precision an f64 holds exactly
    pub const DEFAULT_MAX_DIGITS: usize = 15;

    /// Sets the digit cap (at least one digit is always accepted)
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = if max_digits == 0 { 1 } else { max_digits };
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_digits: Self::DEFAULT_MAX_DIGITS,
            zero_epsilon: Operation::DEFAULT_ZERO_EPSILON,
        }
    }
}

/// The calculator's complete state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text on the display
    pub display: String,
    /// Left-hand side of the pending operation
    pub operand: f64,
    /// Operation waiting for its right-hand side
    pub op: Option<Operation>,
    /// Whether the display is a number still being typed
    pub entering: bool,
    /// Whether the display is the direct output of `=`
    pub just_evaluated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            operand: 0.0,
            op: None,
            entering: true,
            just_evaluated: false,
        }
    }
}

impl CalculatorState {
    /// Creates the power-on state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the display shows the error text
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// Applies one command and returns the resulting state
    #[must_use]
    pub fn apply(mut self, command: Command, limits: &Limits) -> Self {
        match command {
            Command::Digit(d) => self.press_digit(d, limits),
            Command::DecimalPoint => self.press_decimal_point(),
            Command::Operator(op) => self.press_operator(op, limits),
            Command::Equals => self.press_equals(limits),
            Command::Backspace => self.press_backspace(),
            Command::Clear => self = Self::default(),
        }
        self
    }

    fn start_new_number(&mut self) {
        self.display = "0".to_string();
        self.entering = true;
        self.just_evaluated = false;
    }

    fn press_digit(&mut self, digit: Digit, limits: &Limits) {
        if self.just_evaluated || !self.entering {
            self.start_new_number();
        }
        if self.display == "0" {
            self.display.clear();
        } else if digit_count(&self.display) >= limits.max_digits {
            return;
        }
        self.display.push(digit.to_char());
    }

    fn press_decimal_point(&mut self) {
        if self.just_evaluated || !self.entering {
            self.start_new_number();
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_operator(&mut self, op: Operation, limits: &Limits) {
        match self.op {
            Some(_) if self.entering => self.apply_pending(limits),
            Some(_) => {}
            None => self.operand = parse_display(&self.display),
        }
        self.op = Some(op);
        self.entering = false;
        self.just_evaluated = false;
    }

    fn press_equals(&mut self, limits: &Limits) {
        if self.op.is_none() {
            return;
        }
        self.apply_pending(limits);
        self.op = None;
        self.entering = false;
        self.just_evaluated = true;
    }

    fn press_backspace(&mut self) {
        if self.just_evaluated || !self.entering {
            return;
        }
        if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Evaluates the pending operation against the display
    ///
    /// A failed evaluation leaves the error text on the display and the
    /// operand untouched.
    fn apply_pending(&mut self, limits: &Limits) {
        let Some(op) = self.op else {
            return;
        };
        let current = parse_display(&self.display);
        match op.apply(self.operand, current, limits.zero_epsilon) {
            Ok(result) => {
                self.display = format_value(result);
                self.operand = result;
            }
            Err(err) => self.enter_error(&err, op, current),
        }
    }

    fn enter_error(&mut self, err: &CalcError, op: Operation, rhs: f64) {
        warn!(operand = self.operand, %op, rhs, error = %err, "evaluation failed");
        self.display = ERROR_TEXT.to_string();
        self.op = None;
        self.entering = false;
        self.just_evaluated = true;
    }
}
