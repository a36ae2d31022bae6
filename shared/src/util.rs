//! Form input parsing helpers
//!
//! Form fields arrive as free text. These helpers turn them into typed values
//! or a [`ValidationError`] naming the field.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};

/// Trimmed value of a required text field
pub fn required(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a required decimal field (accepts `,` as decimal separator)
pub fn parse_decimal(field: &'static str, value: &str) -> ValidationResult<Decimal> {
    let text = required(field, value)?.replace(',', ".");
    Decimal::from_str(&text).map_err(|_| ValidationError::not_numeric(field, value.trim()))
}

/// Parse a required integer field
pub fn parse_int(field: &'static str, value: &str) -> ValidationResult<i64> {
    let text = required(field, value)?;
    text.parse::<i64>()
        .map_err(|_| ValidationError::not_numeric(field, text))
}

/// Parse an optional integer field; blank means `default`
pub fn parse_int_or(field: &'static str, value: &str, default: i64) -> ValidationResult<i64> {
    if value.trim().is_empty() {
        return Ok(default);
    }
    parse_int(field, value)
}

/// Keep only ASCII digits (`"12 kg"` -> `"12"`)
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// First run of digits in `value`, if any (`"15% Off"` -> `15`).
///
/// `Ok(None)` when the text has no digits; a run too large for `u32` is an
/// out-of-range error for `field`.
pub fn leading_number(field: &'static str, value: &str) -> ValidationResult<Option<u32>> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::out_of_range(field, format!("{digits} is too large")))
}
