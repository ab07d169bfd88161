//! The four binary operations a handheld calculator offers

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// A pending binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Magnitudes below this count as zero when dividing
    pub const DEFAULT_ZERO_EPSILON: f64 = 1e-15;

    /// All operations in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps an operator character to an operation
    ///
    /// Accepts the ASCII symbols plus the `x`, `×` and `÷` spellings found on
    /// physical keypads.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    ///
    /// Division fails when `|rhs| < epsilon`. Any non-finite result is an
    /// overflow.
    pub fn apply(self, lhs: f64, rhs: f64, epsilon: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs.abs() < epsilon {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        check_finite(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = Operation::DEFAULT_ZERO_EPSILON;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_operation_display_matches_symbol() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
    }

    #[test]
    fn test_from_char_round_trips_symbol() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_char(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_char_keypad_spellings() {
        assert_eq!(Operation::from_char('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('÷'), Some(Operation::Divide));
    }

    #[test]
    fn test_from_char_rejects_others() {
        for c in ['%', '^', '(', '=', '5', 'a'] {
            assert_eq!(Operation::from_char(c), None, "{c} is not an operator");
        }
    }

    // --- Arithmetic ---

    #[test]
    fn test_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0, EPS), Ok(5.0));
        assert_eq!(Operation::Add.apply(-2.0, 5.0, EPS), Ok(3.0));
    }

    #[test]
    fn test_subtract_to_negative() {
        assert_eq!(Operation::Subtract.apply(3.0, 5.0, EPS), Ok(-2.0));
    }

    #[test]
    fn test_multiply_mixed_signs() {
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0, EPS), Ok(-6.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::Divide.apply(6.0, 2.0, EPS), Ok(3.0));
        assert_eq!(Operation::Divide.apply(0.0, 5.0, EPS), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0, EPS),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(10.0, -0.0, EPS),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_by_near_zero() {
        assert_eq!(
            Operation::Divide.apply(1.0, 1e-16, EPS),
            Err(CalcError::DivisionByZero)
        );
        assert!(Operation::Divide.apply(1.0, 1e-14, EPS).is_ok());
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(
            Operation::Multiply.apply(1e300, 1e300, EPS),
            Err(CalcError::Overflow)
        );
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Operation::Add.apply(a, b, EPS).unwrap();
            let r2 = Operation::Add.apply(b, a, EPS).unwrap();
            prop_assert!((r1 - r2).abs() < 1e-10);
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0, EPS), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in 1e-3f64..1e10f64) {
            let result = Operation::Divide.apply(a, a, EPS).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_subtract_self_is_zero(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Subtract.apply(a, a, EPS), Ok(0.0));
        }
    }
}
