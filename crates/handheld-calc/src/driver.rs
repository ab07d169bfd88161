//! Unified calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`] and run
//! against every front end: the bare core and the terminal app.

use crate::core::{Calculator, Command, Limits, ERROR_TEXT};

/// Abstract driver for "press a key, read the display"
///
/// # Example
///
/// ```rust
/// use handheld_calc::driver::{verify_chaining, CalculatorDriver, CoreDriver};
///
/// let mut driver = CoreDriver::new();
/// driver.press_sequence("6*7=");
/// assert_eq!(driver.display(), "42");
///
/// verify_chaining(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses one key; characters outside the key table are ignored
    fn press(&mut self, key: char);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses every key of `keys` in order
    fn press_sequence(&mut self, keys: &str) {
        for key in keys.chars() {
            self.press(key);
        }
    }
}

/// Driver over the bare [`Calculator`]
#[derive(Debug, Default)]
pub struct CoreDriver {
    calculator: Calculator,
}

impl CoreDriver {
    /// Creates a driver with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with custom limits
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            calculator: Calculator::with_limits(limits),
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for CoreDriver {
    fn press(&mut self, key: char) {
        if let Some(command) = Command::from_key(key) {
            self.calculator.execute(command);
        }
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Command};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: char) {
            self.app.press_key(key);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn clear(&mut self) {
            self.app.apply(Command::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These run against ANY CalculatorDriver implementation

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5+3+2=");
    assert_eq!(driver.display(), "10");

    driver.clear();
    driver.press_sequence("2+3*4=");
    assert_eq!(driver.display(), "20");

    driver.clear();
    driver.press_sequence("10-4/3=");
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Verifies the error display and recovery after dividing by zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("7/0=");
    assert_eq!(driver.display(), ERROR_TEXT);

    driver.press('4');
    assert_eq!(driver.display(), "4");
    driver.clear();
}

/// Verifies that an operator pressed on the error display still chains
pub fn verify_operator_after_error<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("7/0+");
    assert_eq!(driver.display(), ERROR_TEXT);
    driver.press_sequence("3=");
    assert_eq!(driver.display(), "10");

    driver.clear();
    driver.press_sequence("7/0=+2=");
    assert_eq!(driver.display(), "2");

    driver.clear();
    driver.press_sequence("8/0*.5=");
    assert_eq!(driver.display(), "4");
    driver.clear();
}

/// Verifies backspace while typing and after equals
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5\u{8}");
    assert_eq!(driver.display(), "0");

    driver.clear();
    driver.press_sequence("123\u{8}");
    assert_eq!(driver.display(), "12");

    driver.clear();
    driver.press_sequence("12+3=\u{8}");
    assert_eq!(driver.display(), "15");
    driver.clear();
}

/// Verifies that the decimal point is accepted once per number
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("1..5.");
    assert_eq!(driver.display(), "1.5");

    driver.clear();
    driver.press_sequence(".25");
    assert_eq!(driver.display(), "0.25");
    driver.clear();
}

/// Verifies that equals with nothing pending leaves the display alone
pub fn verify_equals_without_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("9=");
    assert_eq!(driver.display(), "9");

    driver.press('=');
    assert_eq!(driver.display(), "9");
    driver.clear();
}

/// Runs every shared check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_operator_after_error(driver);
    verify_backspace(driver);
    verify_decimal_point(driver);
    verify_equals_without_operator(driver);
}
