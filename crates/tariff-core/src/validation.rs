//! # Validation Module
//!
//! Entry validation for the three fields a user types when adding a tariff.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Entry Validation                                   │
//! │                                                                         │
//! │  "  Paris " , "500" , "10"                                             │
//! │       │                                                                 │
//! │       ▼  trim every field                                               │
//! │  direction ── empty? ──────────────► Required                          │
//! │           └── non-letter? ─────────► InvalidFormat                     │
//! │       │                                                                 │
//! │  price ────── not a number? ───────► InvalidFormat                     │
//! │           └── outside 0..=100000? ─► OutOfRange                        │
//! │       │                                                                 │
//! │  discount ─── not a number? ───────► InvalidFormat                     │
//! │           └── outside 0..=100? ────► OutOfRange                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TariffInput { "Paris", 500.0, 10.0 }                                  │
//! │                                                                         │
//! │  The first failure wins; nothing is aggregated.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records loaded from a file are NOT passed through here.

use crate::error::ValidationError;
use crate::types::TariffInput;
use crate::{MAX_DISCOUNT_PERCENT, MAX_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the raw text of a new tariff.
///
/// ## Example
/// ```rust
/// use tariff_core::validation::validate_entry;
///
/// let input = validate_entry(" Paris ", "500", "10").unwrap();
/// assert_eq!(input.direction, "Paris");
/// assert_eq!(input.final_price(), 450.0);
///
/// assert!(validate_entry("A1b", "500", "10").is_err());
/// ```
pub fn validate_entry(
    direction_text: &str,
    price_text: &str,
    discount_text: &str,
) -> ValidationResult<TariffInput> {
    let direction = validate_direction(direction_text)?;
    let price = validate_price(price_text)?;
    let discount = validate_discount(discount_text)?;

    Ok(TariffInput {
        direction,
        price,
        discount,
    })
}

/// Validates a direction label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Every character must be alphabetic (any script, no digits, spaces or
///   punctuation)
///
/// ## Returns
/// The trimmed direction.
pub fn validate_direction(text: &str) -> ValidationResult<String> {
    let direction = text.trim();

    if direction.is_empty() {
        return Err(ValidationError::Required {
            field: "direction".to_string(),
        });
    }

    if !direction.chars().all(char::is_alphabetic) {
        return Err(ValidationError::InvalidFormat {
            field: "direction".to_string(),
            reason: "must contain only letters".to_string(),
        });
    }

    Ok(direction.to_string())
}

/// Validates a price, `0..=100000` inclusive.
pub fn validate_price(text: &str) -> ValidationResult<f64> {
    parse_bounded("price", text, MAX_PRICE)
}

/// Validates a discount percentage, `0..=100` inclusive.
pub fn validate_discount(text: &str) -> ValidationResult<f64> {
    parse_bounded("discount", text, MAX_DISCOUNT_PERCENT)
}

/// Parses `text` as a number and checks it against `0..=max`.
///
/// `RangeInclusive::contains` is false for NaN, so "nan" is rejected along
/// with the infinities.
fn parse_bounded(field: &str, text: &str, max: f64) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{text}' is not a number"),
    })?;

    if !(0.0..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max,
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
