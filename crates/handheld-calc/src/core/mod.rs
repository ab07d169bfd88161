//! Calculator core: the input accumulator behind every shell
//!
//! Nothing in here knows about terminals or key events. Shells translate their
//! input into [`Command`]s and read [`Calculator::display`] back.

mod calculator;
pub mod command;
pub mod number;
mod operations;
pub mod state;

pub use calculator::Calculator;
pub use command::{Command, Digit};
pub use operations::Operation;
pub use state::{CalculatorState, Limits};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown on the display after a failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Calculator error types
///
/// Evaluation errors never escape a command: the calculator turns them into
/// the [`ERROR_TEXT`] display state. They surface only from the arithmetic
/// helpers and from [`Digit`] construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right-hand operand of a division was (close to) zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Value cannot be used as a single decimal digit
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),
}
