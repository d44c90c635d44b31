//! Kanban Admin
//!
//! Desktop table editor for the kanban backend.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    println!();
    println!("  Kanban Admin v{}", kadmin_ui::VERSION);
    println!("  Table editor for the kanban REST backend");
    println!();

    // Launch the Dioxus desktop application
    kadmin_ui::launch();
}
