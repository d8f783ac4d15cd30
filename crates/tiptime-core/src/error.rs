//! # Error Types
//!
//! Domain-specific error types for tiptime-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiptime-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Cost text that is not a usable amount          │
//! │                                                                         │
//! │  tiptime-cli errors (app)                                              │
//! │  ├── ApiError         - What the terminal / JSON output shows          │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note on the calculation path
//! `calculator::compute` never fails. A `ValidationError` produced while
//! parsing the cost field is normalized to "no cost" by the caller, which
//! yields a zero bill. The typed error exists so the UI can log the reason.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested service tier does not exist.
    ///
    /// ## When This Occurs
    /// - Tier name typo in the UI (`tier grate`)
    /// - Percentage that is not one of 10 / 15 / 18 / 20
    #[error("Unknown service tier: {0}")]
    UnknownServiceTier(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., letters in an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownServiceTier("grate".to_string());
        assert_eq!(err.to_string(), "Unknown service tier: grate");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "cost".to_string(),
        };
        assert_eq!(err.to_string(), "cost is required");

        let err = ValidationError::InvalidFormat {
            field: "cost".to_string(),
            reason: "must be a plain decimal number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cost has invalid format: must be a plain decimal number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "cost".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
