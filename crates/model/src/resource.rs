//! Resource descriptors
//!
//! One trait covers what used to be six near-identical CRUD flows: each
//! record type names its REST path, builds its column descriptors from the
//! live foreign-key option lists, and converts between the typed record and
//! the positional cell array the generic table view edits.
//!
//! The positional contracts here must match the column ordering exactly; an
//! ordering mistake silently puts values in the wrong fields.

use serde::Serialize;
use serde::de::DeserializeOwned;

use kadmin_core::{format_timestamp, parse_timestamp};

use crate::column::{ColumnSpec, ColumnType};
use crate::records::{
    KanbanBoard, KanbanColumn, KanbanTask, MemberRole, Project, ProjectMember, TaskPriority, User,
};

/// Fallback identity used when a foreign-key cell holds no parseable number.
///
/// Inherited behavior: submission never fails on a bad FK cell, it silently
/// targets this id instead. Forgiving but a known correctness risk; kept in
/// exactly this one place.
pub const DEFAULT_FK_ID: i64 = 1;

/// Stringified identity lists of the currently loaded entities, used to
/// populate foreign-key dropdowns. Rebuilt from live state on every render
/// so dropdowns always reflect the latest fetched parent list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FkOptions {
    pub users: Vec<String>,
    pub projects: Vec<String>,
    pub boards: Vec<String>,
    pub columns: Vec<String>,
}

/// Stringify the identities of loaded records for FK dropdown options
pub fn id_options<T: Resource>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.id())
        .map(|id| id.to_string())
        .collect()
}

/// A REST-backed entity type editable through the generic table view
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Resource path segment under `/api/`
    const PATH: &'static str;

    /// Tab / table title
    const TITLE: &'static str;

    /// Server-assigned identity (None until created)
    fn id(&self) -> Option<i64>;

    /// Overwrite the identity (cleared before create payloads)
    fn set_id(&mut self, id: Option<i64>);

    /// Column descriptors, with FK dropdowns populated from `fk`
    fn columns(fk: &FkOptions) -> Vec<ColumnSpec>;

    /// Render the record as display/edit cells, positionally aligned with
    /// `columns`
    fn to_cells(&self) -> Vec<String>;

    /// Rebuild a record from edited cells. Forgiving: bad numerics coerce to
    /// `0` (or `DEFAULT_FK_ID` for foreign keys), unknown enum symbols fall
    /// back to the enum default, and read-only audit cells are never parsed
    /// back (sent as None, the server owns them).
    fn from_cells(cells: &[String]) -> Self;
}

// ============================================================================
// Cell coercion helpers
// ============================================================================

fn cell(cells: &[String], index: usize) -> &str {
    cells.get(index).map(String::as_str).unwrap_or("")
}

fn parse_id(cells: &[String], index: usize) -> Option<i64> {
    cell(cells, index).parse().ok()
}

fn parse_fk(cells: &[String], index: usize) -> i64 {
    cell(cells, index).parse().unwrap_or(DEFAULT_FK_ID)
}

fn parse_numeric(cells: &[String], index: usize) -> i32 {
    cell(cells, index).parse().unwrap_or(0)
}

fn opt_text(cells: &[String], index: usize) -> Option<String> {
    let text = cell(cells, index);
    if text.is_empty() { None } else { Some(text.to_string()) }
}

fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn display_ts(value: &Option<chrono::NaiveDateTime>) -> String {
    value.map(format_timestamp).unwrap_or_default()
}

// ============================================================================
// Resource implementations
// ============================================================================

impl Resource for User {
    const PATH: &'static str = "user";
    const TITLE: &'static str = "Users";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(_fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("username", ColumnType::ShortText).with_max_len(32),
            ColumnSpec::new("email", ColumnType::LongText),
            ColumnSpec::new("password_hash", ColumnType::LongText),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            display_opt(&self.username),
            self.email.clone(),
            self.password_hash.clone(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        User {
            id: parse_id(cells, 0),
            username: opt_text(cells, 1),
            email: cell(cells, 2).to_string(),
            password_hash: cell(cells, 3).to_string(),
        }
    }
}

impl Resource for Project {
    const PATH: &'static str = "project";
    const TITLE: &'static str = "Projects";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText).with_max_len(255),
            ColumnSpec::new("description", ColumnType::LongText),
            ColumnSpec::audit_timestamp("created_at"),
            ColumnSpec::audit_timestamp("updated_at"),
            ColumnSpec::foreign_key("owner_id", fk.users.clone()),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            self.title.clone(),
            display_opt(&self.description),
            display_ts(&self.created_at),
            display_ts(&self.updated_at),
            self.owner_id.to_string(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        Project {
            id: parse_id(cells, 0),
            title: cell(cells, 1).to_string(),
            description: opt_text(cells, 2),
            created_at: None,
            updated_at: None,
            owner_id: parse_fk(cells, 5),
        }
    }
}

impl Resource for ProjectMember {
    const PATH: &'static str = "project-member";
    const TITLE: &'static str = "Project members";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("role", ColumnType::Enum).with_options(
                MemberRole::ALL
                    .iter()
                    .map(|role| role.symbol().to_string())
                    .collect(),
            ),
            ColumnSpec::foreign_key("project_id", fk.projects.clone()),
            ColumnSpec::foreign_key("user_id", fk.users.clone()),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            self.role.symbol().to_string(),
            self.project_id.to_string(),
            self.user_id.to_string(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        ProjectMember {
            id: parse_id(cells, 0),
            role: MemberRole::from_symbol(cell(cells, 1)),
            project_id: parse_fk(cells, 2),
            user_id: parse_fk(cells, 3),
        }
    }
}

impl Resource for KanbanBoard {
    const PATH: &'static str = "kanban-board";
    const TITLE: &'static str = "Boards";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText).with_max_len(255),
            ColumnSpec::new("description", ColumnType::LongText),
            ColumnSpec::audit_timestamp("created_at"),
            ColumnSpec::audit_timestamp("updated_at"),
            ColumnSpec::foreign_key("project_id", fk.projects.clone()),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            self.title.clone(),
            display_opt(&self.description),
            display_ts(&self.created_at),
            display_ts(&self.updated_at),
            self.project_id.to_string(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        KanbanBoard {
            id: parse_id(cells, 0),
            title: cell(cells, 1).to_string(),
            description: opt_text(cells, 2),
            created_at: None,
            updated_at: None,
            project_id: parse_fk(cells, 5),
        }
    }
}

impl Resource for KanbanColumn {
    const PATH: &'static str = "kanban-column";
    const TITLE: &'static str = "Columns";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText).with_max_len(255),
            ColumnSpec::new("position", ColumnType::Numeric),
            ColumnSpec::audit_timestamp("created_at"),
            ColumnSpec::audit_timestamp("updated_at"),
            ColumnSpec::foreign_key("board_id", fk.boards.clone()),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            self.title.clone(),
            self.position.to_string(),
            display_ts(&self.created_at),
            display_ts(&self.updated_at),
            self.board_id.to_string(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        KanbanColumn {
            id: parse_id(cells, 0),
            title: cell(cells, 1).to_string(),
            position: parse_numeric(cells, 2),
            created_at: None,
            updated_at: None,
            board_id: parse_fk(cells, 5),
        }
    }
}

impl Resource for KanbanTask {
    const PATH: &'static str = "kanban-task";
    const TITLE: &'static str = "Tasks";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn columns(fk: &FkOptions) -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText).with_max_len(255),
            ColumnSpec::new("description", ColumnType::LongText),
            ColumnSpec::new("position", ColumnType::Numeric),
            ColumnSpec::new("priority", ColumnType::Enum).with_options(
                TaskPriority::ALL
                    .iter()
                    .map(|priority| priority.symbol().to_string())
                    .collect(),
            ),
            ColumnSpec::new("due_date", ColumnType::Timestamp),
            ColumnSpec::audit_timestamp("created_at"),
            ColumnSpec::audit_timestamp("updated_at"),
            ColumnSpec::foreign_key("column_id", fk.columns.clone()),
        ]
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            display_opt(&self.id.map(|id| id.to_string())),
            self.title.clone(),
            display_opt(&self.description),
            self.position.to_string(),
            self.priority.symbol().to_string(),
            display_ts(&self.due_date),
            display_ts(&self.created_at),
            display_ts(&self.updated_at),
            self.column_id.to_string(),
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        KanbanTask {
            id: parse_id(cells, 0),
            title: cell(cells, 1).to_string(),
            description: opt_text(cells, 2),
            position: parse_numeric(cells, 3),
            priority: TaskPriority::from_symbol(cell(cells, 4)),
            due_date: parse_timestamp(cell(cells, 5)).ok(),
            created_at: None,
            updated_at: None,
            column_id: parse_fk(cells, 8),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::single_primary_key;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn fk() -> FkOptions {
        FkOptions {
            users: vec!["1".to_string(), "7".to_string()],
            projects: vec!["3".to_string()],
            boards: vec!["4".to_string()],
            columns: vec!["9".to_string()],
        }
    }

    #[test]
    fn test_every_table_has_one_primary_key_and_aligned_cells() {
        fn check<T: Resource + Default>() {
            let columns = T::columns(&fk());
            assert_eq!(single_primary_key(&columns), Some(0), "{}", T::TITLE);
            assert_eq!(T::default().to_cells().len(), columns.len(), "{}", T::TITLE);
        }
        check::<User>();
        check::<Project>();
        check::<ProjectMember>();
        check::<KanbanBoard>();
        check::<KanbanColumn>();
        check::<KanbanTask>();
    }

    #[test]
    fn test_audit_columns_are_read_only() {
        let columns = Project::columns(&fk());
        assert!(!columns[0].editable);
        assert!(!columns[3].editable);
        assert!(!columns[4].editable);
        assert!(columns[1].editable);
    }

    #[test]
    fn test_fk_dropdowns_track_loaded_parents() {
        let columns = Project::columns(&fk());
        assert_eq!(
            columns[5].enum_options,
            Some(vec!["1".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn test_user_positional_round_trip() {
        let user = User {
            id: Some(2),
            username: Some("ada".to_string()),
            email: "ada@example.com".to_string(),
            password_hash: "h4sh".to_string(),
        };
        assert_eq!(user.to_cells(), cells(&["2", "ada", "ada@example.com", "h4sh"]));
        assert_eq!(User::from_cells(&user.to_cells()), user);
    }

    #[test]
    fn test_project_from_cells_positions() {
        let project = Project::from_cells(&cells(&[
            "3",
            "Demo",
            "first project",
            "2024-03-07 10:00:00",
            "2024-03-07 11:00:00",
            "7",
        ]));
        assert_eq!(project.id, Some(3));
        assert_eq!(project.title, "Demo");
        assert_eq!(project.description, Some("first project".to_string()));
        // Audit cells are display-only: never parsed back.
        assert_eq!(project.created_at, None);
        assert_eq!(project.updated_at, None);
        assert_eq!(project.owner_id, 7);
    }

    #[test]
    fn test_fk_fallback_to_default_id() {
        let board = KanbanBoard::from_cells(&cells(&["", "B", "", "", "", "garbage"]));
        assert_eq!(board.id, None);
        assert_eq!(board.project_id, DEFAULT_FK_ID);
    }

    #[test]
    fn test_plain_numeric_falls_back_to_zero() {
        let column = KanbanColumn::from_cells(&cells(&["1", "Todo", "x", "", "", "4"]));
        assert_eq!(column.position, 0);
        assert_eq!(column.board_id, 4);
    }

    #[test]
    fn test_member_role_symbol_round_trip() {
        let member = ProjectMember::from_cells(&cells(&["5", "ADMIN", "3", "1"]));
        assert_eq!(member.role, MemberRole::Admin);
        assert_eq!(member.to_cells()[1], "ADMIN");

        let unknown = ProjectMember::from_cells(&cells(&["5", "BOSS", "3", "1"]));
        assert_eq!(unknown.role, MemberRole::Member);
    }

    #[test]
    fn test_task_cells() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(15, 42, 0)
            .unwrap();
        let task = KanbanTask {
            id: Some(5),
            title: "Ship".to_string(),
            description: None,
            position: 2,
            priority: TaskPriority::High,
            due_date: Some(due),
            created_at: None,
            updated_at: None,
            column_id: 9,
        };
        assert_eq!(
            task.to_cells(),
            cells(&["5", "Ship", "", "2", "HIGH", "2024-03-07 15:42:00", "", "", "9"])
        );

        let back = KanbanTask::from_cells(&task.to_cells());
        assert_eq!(back, task);

        // Bad due date is rejected locally and defaults to None.
        let mut bad = task.to_cells();
        bad[5] = "soon".to_string();
        assert_eq!(KanbanTask::from_cells(&bad).due_date, None);
    }

    #[test]
    fn test_id_options_skips_uncreated_records() {
        let users = vec![
            User { id: Some(1), ..Default::default() },
            User { id: None, ..Default::default() },
            User { id: Some(7), ..Default::default() },
        ];
        assert_eq!(id_options(&users), vec!["1".to_string(), "7".to_string()]);
    }
}
