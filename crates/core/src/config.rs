//! Backend configuration
//!
//! The editor is a thin client: everything it shows comes from one REST
//! backend. The only knob is that backend's base URL, defaulting to the
//! local development server and overridable via `KADMIN_BASE_URL`.

use crate::error::{CoreError, CoreResult};

/// Default backend base URL (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Environment variable that overrides the backend base URL
pub const BASE_URL_ENV: &str = "KADMIN_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST backend, without a trailing slash
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> CoreResult<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self { base_url })
    }

    /// Build a config from the environment, falling back to the default URL
    pub fn from_env() -> CoreResult<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Strip trailing slashes and reject obviously unusable URLs
fn normalize_base_url(url: String) -> CoreResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CoreError::InvalidConfig("base URL is empty".to_string()));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(CoreError::InvalidConfig(format!(
            "base URL '{}' must start with http:// or https://",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Tests
// ============================================================================
