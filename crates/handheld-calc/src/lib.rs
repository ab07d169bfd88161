//! Handheld Calculator
//!
//! A four-function pocket calculator: an input accumulator that turns key
//! presses into a display string, plus a terminal front end.
//!
//! Operators apply immediately and strictly left to right, as on a handheld
//! device: `2 + 3 * 4 =` shows `20`.
//!
//! # Example
//!
//! ```rust
//! use handheld_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_keys("5+3+2=");
//! assert_eq!(calc.display(), "10");
//!
//! // Dividing by zero shows the error text; the next digit starts over
//! calc.press_keys("/0=");
//! assert_eq!(calc.display(), ERROR_TEXT);
//! calc.press_digit(Digit::new(4).unwrap());
//! assert_eq!(calc.display(), "4");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

pub use commands::{Cli, Commands, EvalArgs};
pub use config::{CalcConfig, Verbosity};
pub use error::{CliError, CliResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, Command, Digit, Limits, Operation,
        ERROR_TEXT,
    };
    pub use crate::driver::{CalculatorDriver, CoreDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_keys("6*7="), 4);
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_operation_direct() {
        let eps = Operation::DEFAULT_ZERO_EPSILON;
        assert_eq!(Operation::Multiply.apply(6.0, 7.0, eps).unwrap(), 42.0);
        assert_eq!(
            Operation::Divide.apply(1.0, 0.0, eps),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_no_precedence() {
        let mut calc = Calculator::new();
        calc.press_keys("2+3*4=");
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_commands_through_execute() {
        let mut calc = Calculator::new();
        for command in [
            Command::Digit(Digit::new(1).unwrap()),
            Command::DecimalPoint,
            Command::Digit(Digit::new(5).unwrap()),
            Command::Operator(Operation::Multiply),
            Command::Digit(Digit::new(2).unwrap()),
            Command::Equals,
        ] {
            calc.execute(command);
        }
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_independent_calculators() {
        let mut a = Calculator::new();
        let mut b = Calculator::new();
        a.press_keys("12");
        b.press_keys("7");
        assert_eq!(a.display(), "12");
        assert_eq!(b.display(), "7");
    }

    #[test]
    fn test_error_recovery() {
        let mut calc = Calculator::new();
        calc.press_keys("9/0=");
        assert!(calc.is_error());
        calc.clear();
        assert_eq!(calc.state(), &CalculatorState::default());
    }

    #[test]
    fn test_driver_from_prelude() {
        let mut driver = CoreDriver::new();
        driver.press_sequence("1.25+0.75=");
        assert_eq!(driver.display(), "2");
    }
}
