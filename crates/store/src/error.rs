//! Store error types
//!
//! The backend has no structured error taxonomy: a non-2xx response's body
//! text *is* the error message shown to the user.

use thiserror::Error;

/// Errors from the REST sync layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connection refused, timeout, bad URL)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `body` is the raw response text
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

impl StoreError {
    /// The message to surface in the error dialog.
    ///
    /// For API errors this is the response body verbatim (falling back to
    /// the status code when the body is empty); transport errors use their
    /// display form.
    pub fn surface_message(&self) -> String {
        match self {
            StoreError::Api { status, body } => {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.clone()
                }
            }
            StoreError::Http(err) => err.to_string(),
        }
    }
}

/// Result type alias using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_surfaces_body_verbatim() {
        let err = StoreError::Api {
            status: 400,
            body: "bad owner".to_string(),
        };
        assert_eq!(err.surface_message(), "bad owner");
        assert_eq!(err.to_string(), "HTTP 400: bad owner");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = StoreError::Api {
            status: 500,
            body: "  ".to_string(),
        };
        assert_eq!(err.surface_message(), "HTTP 500");
    }
}
