//! Error types for Kanban Admin
//!
//! This module provides unified error handling for the non-UI layers:
//! timestamp/number coercion failures, configuration problems, and
//! internal invariant violations.

use thiserror::Error;

/// The main error type for Kanban Admin core logic
#[derive(Debug, Error)]
pub enum CoreError {
    // ========================================================================
    // Parse / Coercion Errors
    // ========================================================================
    /// Timestamp text did not match the canonical format
    #[error("Invalid timestamp '{value}': expected format {expected}")]
    InvalidTimestamp { value: String, expected: String },

    /// Numeric cell text could not be parsed as an integer
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// Value is not one of the closed option set
    #[error("Invalid option '{value}' for column '{column}'")]
    InvalidOption { column: String, value: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CoreError {
    /// Create an invalid-timestamp error against the canonical format
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        CoreError::InvalidTimestamp {
            value: value.into(),
            expected: crate::time::TIMESTAMP_FORMAT_LABEL.to_string(),
        }
    }

    /// Create an invalid-number error
    pub fn invalid_number(value: impl Into<String>) -> Self {
        CoreError::InvalidNumber(value.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        CoreError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        CoreError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a local parse/coercion failure.
    ///
    /// Parse failures are handled inline by the input widgets (the value is
    /// rejected or defaulted) and never surfaced in an error dialog.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidTimestamp { .. }
                | CoreError::InvalidNumber(_)
                | CoreError::InvalidOption { .. }
        )
    }
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_timestamp_error() {
        let err = CoreError::invalid_timestamp("2024-13-99");
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "Invalid timestamp '2024-13-99': expected format yyyy-MM-dd HH:mm:ss"
        );
    }

    #[test]
    fn test_invalid_number_error() {
        let err = CoreError::invalid_number("abc");
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "Invalid number 'abc'");
    }

    #[test]
    fn test_error_with_context() {
        let err = CoreError::with_context("Loading config", "bad URL");
        assert!(!err.is_parse());
        assert_eq!(err.to_string(), "Loading config: bad URL");
    }
}
