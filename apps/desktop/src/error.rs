//! # API Error Type
//!
//! Unified error type for action handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tariff Desk                            │
//! │                                                                         │
//! │  Action handler  ──►  Result<Outcome, ApiError>                        │
//! │         │                                                               │
//! │         ├── ValidationError ──► VALIDATION_ERROR  (shell re-prompts)    │
//! │         ├── StoreError ───────► STORE_ERROR       (action aborted)      │
//! │         ├── FormatError ──────► FORMAT_ERROR      (store untouched)     │
//! │         ├── io::Error ────────► IO_ERROR          (save/load file)      │
//! │         └── bad row numbers ──► NO_SELECTION / INVALID_SELECTION        │
//! │                                                                         │
//! │  The shell prints the error and waits for the next action; only a      │
//! │  failure to open the database at startup ends the process.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tariff_core::{CoreError, FormatError, ValidationError};
use tariff_db::StoreError;
use thiserror::Error;

/// Error returned from action handlers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Field that failed entry validation, when there is one.
    pub field: Option<String>,
}

/// Error codes for action results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad user input
    ValidationError,

    /// Database operation failed
    StoreError,

    /// Import document malformed
    FormatError,

    /// File could not be read or written
    IoError,

    /// Remove requested without selecting rows
    NoSelection,

    /// A selected row number is not in the current view
    InvalidSelection,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::FormatError => "FORMAT_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::NoSelection => "NO_SELECTION",
            ErrorCode::InvalidSelection => "INVALID_SELECTION",
        };
        f.write_str(code)
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a file error that names the path.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        ApiError::new(
            ErrorCode::IoError,
            format!("Failed to {} {}: {}", action, path.display(), err),
        )
    }

    /// Whether the shell should re-prompt instead of aborting.
    pub fn is_recoverable_input(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }
}

/// Converts validation errors, keeping the failing field.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            field: Some(err.field().to_string()),
            message: format!("Invalid input: {}", err),
        }
    }
}

/// Converts database errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidPartition { .. } => {
                ApiError::new(ErrorCode::ValidationError, err.to_string())
            }
            other => {
                tracing::error!("Store operation failed: {}", other);
                ApiError::new(ErrorCode::StoreError, format!("Database error: {}", other))
            }
        }
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        ApiError::new(ErrorCode::FormatError, format!("Invalid tariff file: {}", err))
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::Format(e) => e.into(),
        }
    }
}

/// Result type for action handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a session could not be opened at startup. Always fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured starting partition is not a usable table name.
    #[error("Invalid starting partition: {0}")]
    InvalidPartition(StoreError),

    #[error("Failed to create {}: {source}", .dir.display())]
    DataDirectory {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to connect to the database: {0}")]
    Database(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_field() {
        let err: ApiError = ValidationError::Required {
            field: "direction".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("direction"));
        assert!(err.is_recoverable_input());
        assert_eq!(err.to_string(), "Invalid input: direction is required");
    }

    #[test]
    fn test_store_error_code() {
        let err: ApiError = StoreError::QueryFailed("no such table: x".to_string()).into();
        assert_eq!(err.code, ErrorCode::StoreError);
        assert!(!err.is_recoverable_input());
        assert!(err.message.contains("no such table"));
    }

    #[test]
    fn test_startup_error_messages() {
        let err = StartupError::InvalidPartition(StoreError::invalid_partition(
            "1st",
            "must not start with a digit",
        ));
        assert!(err.to_string().starts_with("Invalid starting partition: "));

        let err = StartupError::Database(StoreError::ConnectionFailed("locked".to_string()));
        assert_eq!(err.to_string(), "Failed to connect to the database: Connection failed: locked");
    }

    #[test]
    fn test_core_error_unwraps() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "price".to_string(),
        })
        .into();
        assert_eq!(err.field.as_deref(), Some("price"));
        assert_eq!(ErrorCode::FormatError.to_string(), "FORMAT_ERROR");
    }
}
