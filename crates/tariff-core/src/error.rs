//! # Error Types
//!
//! Domain-specific error types for tariff-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tariff-core errors (this file)                                        │
//! │  ├── CoreError        - Umbrella for the two below                     │
//! │  ├── ValidationError  - Bad user input (re-prompt)                     │
//! │  └── FormatError      - Malformed import document                      │
//! │                                                                         │
//! │  tariff-db errors (separate crate)                                     │
//! │  └── StoreError       - Database operation failures                    │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the user sees at the action boundary      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::error::Category;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import/export document error (wraps FormatError).
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only the first failing field is reported; entry validation never
/// aggregates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range (inclusive bounds).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (non-letters in a direction, unparseable number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Format Error
// =============================================================================

/// Errors raised while reading or writing a tariff document.
///
/// An import either yields every entry or fails with one of these; there is
/// no partial result.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text is not JSON at all (or ends early).
    #[error("invalid JSON at line {line}, column {column}: {reason}")]
    Syntax {
        line: usize,
        column: usize,
        reason: String,
    },

    /// Valid JSON, wrong shape: not an array, missing or mistyped key,
    /// unknown key.
    #[error("unexpected document shape at line {line}, column {column}: {reason}")]
    Shape {
        line: usize,
        column: usize,
        reason: String,
    },

    /// The document is not UTF-8 text.
    #[error("not UTF-8 text: invalid byte at offset {offset}")]
    Encoding { offset: usize },

    /// Serializer failure on export.
    #[error("could not encode tariffs: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        let reason = err.to_string();
        match err.classify() {
            Category::Data => FormatError::Shape {
                line,
                column,
                reason,
            },
            Category::Syntax | Category::Eof => FormatError::Syntax {
                line,
                column,
                reason,
            },
            Category::Io => FormatError::Encode(reason),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "direction".to_string(),
        };
        assert_eq!(err.to_string(), "direction is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: 100_000.0,
        };
        assert_eq!(err.to_string(), "price must be between 0 and 100000");
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_json_syntax_is_classified() {
        let err: FormatError = serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err().into();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_json_shape_is_classified() {
        let err: FormatError = serde_json::from_str::<Vec<u8>>("{}").unwrap_err().into();
        assert!(matches!(err, FormatError::Shape { .. }));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "direction".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
