//! Calculator commands and the key table that produces them

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by its value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, returning `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The character shown for the digit
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| CalcError::InvalidDigit(value.to_string()))
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Everything a shell can ask the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Type a digit
    Digit(Digit),
    /// Type the decimal point
    DecimalPoint,
    /// Press an operator key
    Operator(Operation),
    /// Press `=`
    Equals,
    /// Erase the last typed character
    Backspace,
    /// Reset everything
    Clear,
}

impl Command {
    /// Translates a key character into a command
    ///
    /// | key                         | command        |
    /// |-----------------------------|----------------|
    /// | `0`-`9`                     | `Digit`        |
    /// | `.` `,`                     | `DecimalPoint` |
    /// | `+ - * /` (`x × ÷`)         | `Operator`     |
    /// | `=` Enter                   | `Equals`       |
    /// | Backspace, Delete (`\x7f`)  | `Backspace`    |
    /// | `c` `C` Escape              | `Clear`        |
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(key) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operation::from_char(key) {
            return Some(Self::Operator(op));
        }
        match key {
            '.' | ',' => Some(Self::DecimalPoint),
            '=' | '\n' | '\r' => Some(Self::Equals),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            'c' | 'C' | '\u{1b}' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Short label used on keypad buttons and in logs
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_char().to_string(),
            Self::DecimalPoint => ".".into(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".into(),
            Self::Backspace => "⌫".into(),
            Self::Clear => "C".into(),
        }
    }
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Command {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}
