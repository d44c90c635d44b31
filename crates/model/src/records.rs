//! Entity records
//!
//! The six persisted record types, mirroring the backend's JSON contract:
//! camelCase field names, enums as their symbolic names, timestamps in the
//! canonical `yyyy-MM-dd HH:mm:ss` text form. Identity and audit timestamps
//! are server-assigned and therefore optional (absent until created).
//! Unknown fields are ignored on decode; defaulted fields are still emitted
//! on encode.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Role of a user within a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Admin,
    #[default]
    Member,
    Viewer,
}

impl MemberRole {
    /// All roles, in dropdown order
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Owner,
        MemberRole::Admin,
        MemberRole::Member,
        MemberRole::Viewer,
    ];

    /// Wire/display symbol, e.g. `"OWNER"`
    pub fn symbol(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Admin => "ADMIN",
            MemberRole::Member => "MEMBER",
            MemberRole::Viewer => "VIEWER",
        }
    }

    /// Parse a symbol, falling back to the default role
    pub fn from_symbol(symbol: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|role| role.symbol() == symbol)
            .unwrap_or_default()
    }
}

/// Priority of a kanban task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
    Optional,
}

impl TaskPriority {
    /// All priorities, in dropdown order
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
        TaskPriority::Optional,
    ];

    /// Wire/display symbol, e.g. `"HIGH"`
    pub fn symbol(&self) -> &'static str {
        match self {
            TaskPriority::High => "HIGH",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::Low => "LOW",
            TaskPriority::Optional => "OPTIONAL",
        }
    }

    /// Parse a symbol, falling back to the default priority
    pub fn from_symbol(symbol: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|priority| priority.symbol() == symbol)
            .unwrap_or_default()
    }
}

// ============================================================================
// Records
// ============================================================================

/// A registered user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub password_hash: String,
}

/// A project owned by a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    pub owner_id: i64,
}

/// A user's membership in a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub role: MemberRole,
    pub project_id: i64,
    pub user_id: i64,
}

/// A kanban board attached to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBoard {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    pub project_id: i64,
}

/// A column on a kanban board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub position: i32,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    pub board_id: i64,
}

/// A task in a kanban column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanTask {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub position: i32,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "kadmin_core::time::opt_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    pub column_id: i64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enum_symbols() {
        assert_eq!(MemberRole::Owner.symbol(), "OWNER");
        assert_eq!(MemberRole::from_symbol("VIEWER"), MemberRole::Viewer);
        assert_eq!(MemberRole::from_symbol("???"), MemberRole::Member);

        assert_eq!(TaskPriority::High.symbol(), "HIGH");
        assert_eq!(TaskPriority::from_symbol("OPTIONAL"), TaskPriority::Optional);
        assert_eq!(TaskPriority::from_symbol(""), TaskPriority::Medium);
    }

    #[test]
    fn test_project_wire_format() {
        let project = Project {
            id: Some(3),
            title: "Demo".to_string(),
            description: Some("first".to_string()),
            created_at: None,
            updated_at: None,
            owner_id: 7,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["ownerId"], 7);
        assert_eq!(json["title"], "Demo");
        // Defaulted fields are still emitted explicitly.
        assert!(json.as_object().unwrap().contains_key("createdAt"));
    }

    #[test]
    fn test_unknown_fields_ignored_on_decode() {
        let json = r#"{
            "id": 1,
            "email": "a@b.c",
            "passwordHash": "x",
            "serverOnlyField": true
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.username, None);
        assert_eq!(user.email, "a@b.c");
    }

    #[test]
    fn test_enum_wire_symbols_round_trip() {
        let member = ProjectMember {
            id: None,
            role: MemberRole::Owner,
            project_id: 1,
            user_id: 2,
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains(r#""role":"OWNER""#));

        let back: ProjectMember = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, MemberRole::Owner);
    }

    #[test]
    fn test_task_timestamps_on_wire() {
        let json = r#"{
            "id": 5,
            "title": "Ship it",
            "position": 2,
            "priority": "HIGH",
            "dueDate": "2024-03-07 15:42:00",
            "createdAt": null,
            "columnId": 9
        }"#;
        let task: KanbanTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(
            task.due_date.map(kadmin_core::format_timestamp),
            Some("2024-03-07 15:42:00".to_string())
        );
        assert_eq!(task.created_at, None);
        assert_eq!(task.updated_at, None);
        assert_eq!(task.column_id, 9);
    }
}
