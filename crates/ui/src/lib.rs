//! # Kadmin UI
//!
//! Dioxus Desktop UI for Kanban Admin.
//!
//! One generic table editor serves all six entity tabs: column metadata from
//! `kadmin_model` drives the header, the view/edit rows, and the create row,
//! while `sync` keeps each tab's list refreshed through the REST store.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod state;
pub mod sync;
pub mod tabs;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use kadmin_core;
pub use kadmin_model;
pub use kadmin_store;

pub use app::App;
pub use state::{APP_STATE, AppState, EntityState, ResourceSlot, Tab};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Kanban Admin";

/// Application window title
pub const TITLE: &str = "Kanban Admin - Table Editor";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Kanban Admin desktop application.
///
/// Reads the backend base URL from the environment (falling back to the
/// default local server), initializes the shared API client, and starts the
/// Dioxus desktop app.
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let config = match kadmin_core::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid backend configuration, using default: {}", err);
            kadmin_core::Config::default()
        }
    };
    tracing::info!("Backend base URL: {}", config.base_url);
    sync::init_client(&config);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_styles_loaded() {
        assert!(STYLES.contains(".db-table"));
        assert!(STYLES.contains(".dialog-backdrop"));
    }
}
