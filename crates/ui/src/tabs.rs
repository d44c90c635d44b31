//! # Entity Tabs
//!
//! One component per entity tab. Each tab fetches its own list plus the
//! parent lists its foreign-key dropdowns draw from, then renders the
//! generic table through `resource_table`. While any of those fetches is in
//! flight the tab shows a loading indicator instead of the table, so
//! dropdowns never render from stale parent lists.

use dioxus::prelude::*;

use kadmin_model::{KanbanBoard, KanbanColumn, KanbanTask, Project, ProjectMember, Row, User};

use crate::components::DataTable;
use crate::state::{APP_STATE, ResourceSlot};
use crate::sync;

// ============================================================================
// Generic Table Rendering
// ============================================================================

/// Render the table for one entity from its state slot.
///
/// `parents_loading` folds in the fetch status of the lists this entity's
/// foreign-key columns depend on.
fn resource_table<T: ResourceSlot>(parents_loading: bool) -> Element {
    let state = APP_STATE.read();
    let slot = T::slot(&state);

    if slot.loading || parents_loading {
        return rsx! {
            div { class: "loading-indicator", "Loading..." }
        };
    }

    let columns = T::columns(&state.fk_options());
    let rows: Vec<Row> = slot.items.iter().map(|item| item.to_cells()).collect();

    rsx! {
        DataTable {
            title: T::TITLE.to_string(),
            columns,
            rows,
            on_create: move |cells: Vec<String>| {
                spawn(sync::create(T::from_cells(&cells)));
            },
            on_save: move |cells: Vec<String>| {
                spawn(sync::update(T::from_cells(&cells)));
            },
            on_delete: move |id: i64| {
                spawn(sync::delete::<T>(id));
            },
        }
    }
}

// ============================================================================
// Tab Components
// ============================================================================

/// Users table
#[component]
pub fn UsersTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<User>().await;
        });
    });
    resource_table::<User>(false)
}

/// Projects table; owner dropdown needs the users list
#[component]
pub fn ProjectsTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<User>().await;
            sync::refresh::<Project>().await;
        });
    });
    let parents_loading = APP_STATE.read().users.loading;
    resource_table::<Project>(parents_loading)
}

/// Project members table; needs both users and projects for its dropdowns
#[component]
pub fn MembersTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<User>().await;
            sync::refresh::<Project>().await;
            sync::refresh::<ProjectMember>().await;
        });
    });
    let parents_loading = {
        let state = APP_STATE.read();
        state.users.loading || state.projects.loading
    };
    resource_table::<ProjectMember>(parents_loading)
}

/// Boards table; project dropdown needs the projects list
#[component]
pub fn BoardsTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<Project>().await;
            sync::refresh::<KanbanBoard>().await;
        });
    });
    let parents_loading = APP_STATE.read().projects.loading;
    resource_table::<KanbanBoard>(parents_loading)
}

/// Columns table; board dropdown needs the boards list
#[component]
pub fn ColumnsTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<KanbanBoard>().await;
            sync::refresh::<KanbanColumn>().await;
        });
    });
    let parents_loading = APP_STATE.read().boards.loading;
    resource_table::<KanbanColumn>(parents_loading)
}

/// Tasks table; column dropdown needs the kanban columns list
#[component]
pub fn TasksTab() -> Element {
    use_effect(|| {
        spawn(async {
            sync::refresh::<KanbanColumn>().await;
            sync::refresh::<KanbanTask>().await;
        });
    });
    let parents_loading = APP_STATE.read().columns.loading;
    resource_table::<KanbanTask>(parents_loading)
}
