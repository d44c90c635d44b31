//! Application state
//!
//! Centralized state via Dioxus Signals: one `EntityState` slot per entity
//! type plus the active tab. Loading and error are kept per slot (not
//! process-wide), so concurrent fetches of different entities cannot race on
//! a shared flag; within one slot, last writer wins.

use dioxus::prelude::*;

use kadmin_model::{
    FkOptions, KanbanBoard, KanbanColumn, KanbanTask, Project, ProjectMember, Resource, User,
    id_options,
};

// ============================================================================
// Tabs
// ============================================================================

/// The six entity tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Users,
    Projects,
    Members,
    Boards,
    Columns,
    Tasks,
}

impl Tab {
    /// All tabs, in display order
    pub const ALL: [Tab; 6] = [
        Tab::Users,
        Tab::Projects,
        Tab::Members,
        Tab::Boards,
        Tab::Columns,
        Tab::Tasks,
    ];

    /// Label shown in the tab bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Users => "users",
            Tab::Projects => "projects",
            Tab::Members => "project_members",
            Tab::Boards => "kanban_boards",
            Tab::Columns => "kanban_columns",
            Tab::Tasks => "kanban_tasks",
        }
    }
}

// ============================================================================
// Per-entity slot
// ============================================================================

/// In-memory cache + sync status for one entity type
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<T> {
    /// Last fetched list (replaced wholesale on every refresh)
    pub items: Vec<T>,
    /// Whether a fetch is in flight for this slot
    pub loading: bool,
    /// Last surfaced error for this slot (overwritten by the next failure)
    pub error: Option<String>,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> EntityState<T> {
    /// Replace the list after a successful fetch
    pub fn finish(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// Record a failure; the list keeps its previous contents
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

// ============================================================================
// Application state
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Currently active tab
    pub active_tab: Tab,
    pub users: EntityState<User>,
    pub projects: EntityState<Project>,
    pub members: EntityState<ProjectMember>,
    pub boards: EntityState<KanbanBoard>,
    pub columns: EntityState<KanbanColumn>,
    pub tasks: EntityState<KanbanTask>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Foreign-key dropdown options from the currently loaded lists.
    /// Rebuilt on every render so dropdowns track the latest fetch.
    pub fn fk_options(&self) -> FkOptions {
        FkOptions {
            users: id_options(&self.users.items),
            projects: id_options(&self.projects.items),
            boards: id_options(&self.boards.items),
            columns: id_options(&self.columns.items),
        }
    }

    /// First pending slot error, in tab order (one modal at a time)
    pub fn first_error(&self) -> Option<String> {
        self.users
            .error
            .as_ref()
            .or(self.projects.error.as_ref())
            .or(self.members.error.as_ref())
            .or(self.boards.error.as_ref())
            .or(self.columns.error.as_ref())
            .or(self.tasks.error.as_ref())
            .cloned()
    }

    /// Dismiss the error currently shown (the first pending one)
    pub fn dismiss_first_error(&mut self) {
        for error in [
            &mut self.users.error,
            &mut self.projects.error,
            &mut self.members.error,
            &mut self.boards.error,
            &mut self.columns.error,
            &mut self.tasks.error,
        ] {
            if error.is_some() {
                *error = None;
                return;
            }
        }
    }
}

// ============================================================================
// Resource slots
// ============================================================================

/// Maps a resource type to its slot in `AppState`, letting the sync layer
/// stay generic over all six entities.
pub trait ResourceSlot: Resource {
    fn slot(state: &AppState) -> &EntityState<Self>;
    fn slot_mut(state: &mut AppState) -> &mut EntityState<Self>;
}

macro_rules! impl_resource_slot {
    ($ty:ty, $field:ident) => {
        impl ResourceSlot for $ty {
            fn slot(state: &AppState) -> &EntityState<Self> {
                &state.$field
            }
            fn slot_mut(state: &mut AppState) -> &mut EntityState<Self> {
                &mut state.$field
            }
        }
    };
}

impl_resource_slot!(User, users);
impl_resource_slot!(Project, projects);
impl_resource_slot!(ProjectMember, members);
impl_resource_slot!(KanbanBoard, boards);
impl_resource_slot!(KanbanColumn, columns);
impl_resource_slot!(KanbanTask, tasks);

// ============================================================================
// Global state
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entity_state_lifecycle() {
        let mut slot: EntityState<User> = EntityState::default();
        assert!(slot.items.is_empty());

        slot.loading = true;
        slot.finish(vec![User { id: Some(1), ..Default::default() }]);
        assert!(!slot.loading);
        assert_eq!(slot.items.len(), 1);

        slot.loading = true;
        slot.fail("boom".to_string());
        assert!(!slot.loading);
        assert_eq!(slot.error.as_deref(), Some("boom"));
        // The list keeps its previous contents on failure.
        assert_eq!(slot.items.len(), 1);
    }

    #[test]
    fn test_errors_are_keyed_per_entity() {
        let mut state = AppState::new();
        state.tasks.fail("task error".to_string());
        state.projects.fail("project error".to_string());

        // Tab order: the projects error surfaces first.
        assert_eq!(state.first_error().as_deref(), Some("project error"));
        state.dismiss_first_error();
        assert_eq!(state.first_error().as_deref(), Some("task error"));
        state.dismiss_first_error();
        assert_eq!(state.first_error(), None);
    }

    #[test]
    fn test_fk_options_track_loaded_lists() {
        let mut state = AppState::new();
        state.users.items = vec![
            User { id: Some(1), ..Default::default() },
            User { id: Some(7), ..Default::default() },
        ];
        state.boards.items = vec![KanbanBoard { id: Some(4), ..Default::default() }];

        let fk = state.fk_options();
        assert_eq!(fk.users, vec!["1".to_string(), "7".to_string()]);
        assert_eq!(fk.boards, vec!["4".to_string()]);
        assert!(fk.projects.is_empty());
    }

    #[test]
    fn test_slot_mapping() {
        let mut state = AppState::new();
        <Project as ResourceSlot>::slot_mut(&mut state).loading = true;
        assert!(state.projects.loading);
        assert!(!state.users.loading);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::ALL.len(), 6);
        assert_eq!(Tab::default(), Tab::Users);
        assert_eq!(Tab::Members.display_name(), "project_members");
    }
}
