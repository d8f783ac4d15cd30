//! # Validation Module
//!
//! Turns the raw text of the cost field into a [`Money`] amount.
//!
//! ## Normalization Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cost Field → Calculator                            │
//! │                                                                         │
//! │  "51.00"  ──► validate_cost_text ──► Ok(5100 cents)  ──► Some(cost)     │
//! │  ""       ──► validate_cost_text ──► Err(Required)   ──► None           │
//! │  "abc"    ──► validate_cost_text ──► Err(InvalidFormat) ─► None         │
//! │                                                                         │
//! │  parse_cost() keeps only the Option: a bad field is not an error for    │
//! │  the calculator, it is simply "no cost", which shows a $0.00 bill.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiptime_core::validation::{parse_cost, validate_cost_text};
//!
//! assert_eq!(parse_cost("51").map(|m| m.cents()), Some(5100));
//! assert_eq!(parse_cost("fifty"), None);
//! assert!(validate_cost_text("").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{CENTS_PER_UNIT, MAX_COST_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const FIELD: &str = "cost";

/// Validates the cost field and converts it to cents.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Plain decimal notation only: `12`, `12.5`, `12.50`, `.75`, `12.`
/// - No signs, exponents, thousands separators or currency symbols
/// - Fractions finer than a cent round half-up (`10.005` → `10.01`)
/// - Must not exceed [`MAX_COST_CENTS`]
///
/// ## Example
/// ```rust
/// use tiptime_core::validation::validate_cost_text;
///
/// assert_eq!(validate_cost_text(" 12.5 ").unwrap().cents(), 1250);
/// assert_eq!(validate_cost_text("10.005").unwrap().cents(), 1001);
/// assert!(validate_cost_text("-5").is_err());
/// assert!(validate_cost_text("1e3").is_err());
/// ```
pub fn validate_cost_text(text: &str) -> ValidationResult<Money> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: FIELD.to_string(),
        });
    }

    if text
        .strip_prefix('-')
        .is_some_and(|rest| rest.bytes().any(|b| b.is_ascii_digit()))
    {
        return Err(invalid_format("must not be negative"));
    }

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid_format("must contain at least one digit"));
    }

    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_format("must be a plain decimal number"));
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: FIELD.to_string(),
        min: 0,
        max: MAX_COST_CENTS,
    };

    let mut units: i64 = 0;
    for digit in whole.bytes().map(|b| i64::from(b - b'0')) {
        units = units
            .checked_mul(10)
            .and_then(|u| u.checked_add(digit))
            .ok_or_else(out_of_range)?;
    }

    // First two fractional digits are cents, the third decides rounding
    let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tens = frac_digits.next().unwrap_or(0);
    let ones = frac_digits.next().unwrap_or(0);
    let round_up = frac_digits.next().is_some_and(|d| d >= 5);

    let cents = units
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|c| c.checked_add(tens * 10 + ones + i64::from(round_up)))
        .ok_or_else(out_of_range)?;

    if cents > MAX_COST_CENTS {
        return Err(out_of_range());
    }

    Ok(Money::from_cents(cents))
}

/// Parses the cost field, treating any invalid text as "no cost".
///
/// This is the normalization the calculator expects: empty or non-numeric
/// input becomes `None`, which [`crate::calculator::compute`] turns into a
/// zero bill.
pub fn parse_cost(text: &str) -> Option<Money> {
    validate_cost_text(text).ok()
}

fn invalid_format(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: FIELD.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
