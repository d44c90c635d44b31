//! # Main Application Component
//!
//! The root component: the entity tab bar, the active tab's table, and a
//! single error modal fed by the per-entity error slots.

use dioxus::prelude::*;

use crate::state::{APP_STATE, Tab};
use crate::tabs::{BoardsTab, ColumnsTab, MembersTab, ProjectsTab, TasksTab, UsersTab};

// ============================================================================
// App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let active = APP_STATE.read().active_tab;

    rsx! {
        div { class: "app-shell",
            div { class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.display_name()}",
                        class: if tab == active { "tab-button active" } else { "tab-button" },
                        onclick: move |_| APP_STATE.write().active_tab = tab,
                        "{tab.display_name()}"
                    }
                }
            }

            div { class: "tab-content",
                match active {
                    Tab::Users => rsx! { UsersTab {} },
                    Tab::Projects => rsx! { ProjectsTab {} },
                    Tab::Members => rsx! { MembersTab {} },
                    Tab::Boards => rsx! { BoardsTab {} },
                    Tab::Columns => rsx! { ColumnsTab {} },
                    Tab::Tasks => rsx! { TasksTab {} },
                }
            }

            ErrorDialog {}
        }
    }
}

// ============================================================================
// Error Dialog Component
// ============================================================================

/// Modal showing the first pending entity error. Dismissing clears that
/// error only; further pending errors surface one at a time.
#[component]
fn ErrorDialog() -> Element {
    let message = APP_STATE.read().first_error();

    rsx! {
        if let Some(message) = message {
            div { class: "dialog-backdrop",
                div { class: "dialog-card",
                    h3 { class: "error-title", "Request failed" }
                    p { "{message}" }
                    button {
                        class: "action-button neutral",
                        onclick: move |_| APP_STATE.write().dismiss_first_error(),
                        "Dismiss"
                    }
                }
            }
        }
    }
}
