//! Conversions between display text and numbers
//!
//! The display always shows fixed notation, never an exponent, with no
//! trailing zeros after the decimal point.

use crate::core::ERROR_TEXT;

/// Significant digits kept when rendering a computed value
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Renders a computed value the way a handheld calculator shows it
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] first so binary noise such as
/// `0.1 + 0.2 = 0.30000000000000004` shows as `0.3`. Non-finite input renders
/// as the error text.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let rounded = round_significant(value);
    if rounded == 0.0 {
        // also folds -0 into 0
        return "0".to_string();
    }

    // f64's Display never switches to exponent notation
    trim_fraction(&rounded.to_string())
}

/// Parses display text as a number
///
/// Anything that is not a finite decimal literal (the error text, a lone
/// `"-"`) reads as zero.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Strips trailing zeros and a dangling point from a decimal literal
///
/// Text without a decimal point is returned unchanged.
#[must_use]
pub fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Counts the significant digits in display text
///
/// The placeholder zero in front of a fraction (`"0.25"`, `"-0.5"`) does not
/// count, so a cap of N allows N typed digits after a leading point. A lone
/// `"0"` counts as one digit.
#[must_use]
pub fn digit_count(text: &str) -> usize {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let digits = unsigned.strip_prefix("0.").unwrap_or(unsigned);
    digits.chars().filter(char::is_ascii_digit).count()
}

fn round_significant(value: f64) -> f64 {
    // scientific formatting rounds to exactly SIGNIFICANT_DIGITS digits
    // rounding f64::MAX up would overflow, so keep the unrounded value
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .unwrap_or(value)
}
