//! # Kadmin Core
//!
//! Core types for Kanban Admin.
//!
//! This crate provides the foundational building blocks shared by the model,
//! store, and UI crates:
//!
//! - **Errors**: Unified error handling with `CoreError` and `CoreResult`
//! - **Config**: Backend endpoint configuration with environment overrides
//! - **Time**: The canonical `yyyy-MM-dd HH:mm:ss` timestamp codec
//!

pub mod config;
pub mod error;
pub mod time;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use time::{TIMESTAMP_FORMAT, format_timestamp, now_formatted, parse_timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
