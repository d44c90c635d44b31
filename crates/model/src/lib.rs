//! # Kadmin Model
//!
//! Entity catalog and table metadata model for Kanban Admin.
//!
//! The generic table editor is driven entirely by the types in this crate:
//!
//! - **Columns**: `ColumnSpec` describes one field's display/edit behavior
//! - **Directives**: per-column sort/search/filter state with activation
//!   priorities, plus the `visible_rows` evaluation that applies them
//! - **Records**: the six REST entity types and their wire encoding
//! - **Resources**: the `Resource` trait bridging typed records and the
//!   positional cell arrays the table view works with
//! - **Coercion**: digit filtering and masked timestamp entry for inputs
//!
//! Everything here is pure logic with no UI dependency, so the editor's
//! behavior is testable without a running window or backend.

pub mod coerce;
pub mod column;
pub mod directive;
pub mod records;
pub mod resource;
pub mod table;

// Re-export commonly used items at crate root
pub use coerce::{filter_digits, mask_timestamp_digits, parse_masked_timestamp};
pub use column::{ColumnSpec, ColumnType, single_primary_key};
pub use directive::{ColumnControls, FilterOp, PriorityCounter, SortDirection};
pub use records::{
    KanbanBoard, KanbanColumn, KanbanTask, MemberRole, Project, ProjectMember, TaskPriority, User,
};
pub use resource::{DEFAULT_FK_ID, FkOptions, Resource, id_options};
pub use table::{Row, visible_rows};
