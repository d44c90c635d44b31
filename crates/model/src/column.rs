//! Column descriptors
//!
//! A `ColumnSpec` describes one field of one table: its data type, whether
//! it is editable, its key role, and (for closed-option columns) the list of
//! selectable values. The generic table view renders header, cells, and
//! input widgets purely from these descriptors.

use kadmin_core::time::now_formatted;

/// Data type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Short single-line text, optionally length-limited (varchar)
    ShortText,
    /// Unbounded text
    LongText,
    /// Closed set of symbolic values
    Enum,
    /// Integer, edited as digit-filtered text
    Numeric,
    /// Date-time in the canonical `yyyy-MM-dd HH:mm:ss` form
    Timestamp,
}

impl ColumnType {
    /// Lowercase name used in header labels
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::ShortText => "varchar",
            ColumnType::LongText => "text",
            ColumnType::Enum => "enum",
            ColumnType::Numeric => "numeric",
            ColumnType::Timestamp => "timestamp",
        }
    }
}

/// Metadata describing one column of a table
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Column name as shown in the header
    pub name: String,
    /// Data type driving widget selection and comparison semantics
    pub ty: ColumnType,
    /// Maximum text length (ShortText only)
    pub max_len: Option<usize>,
    /// Whether the cell may be edited. Identity and audit-timestamp columns
    /// are read-only.
    pub editable: bool,
    /// Selectable values for Enum and foreign-key columns
    pub enum_options: Option<Vec<String>>,
    /// Whether this column is the table's primary key (at most one per table)
    pub primary_key: bool,
    /// Whether this column references another entity's identity
    pub foreign_key: bool,
}

impl ColumnSpec {
    /// Create an editable column with no options or limits
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            max_len: None,
            editable: true,
            enum_options: None,
            primary_key: false,
            foreign_key: false,
        }
    }

    /// The read-only numeric identity column
    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            editable: false,
            primary_key: true,
            ..Self::new(name, ColumnType::Numeric)
        }
    }

    /// A foreign-key column selecting among the given stringified parent ids
    pub fn foreign_key(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            enum_options: Some(options),
            foreign_key: true,
            ..Self::new(name, ColumnType::Numeric)
        }
    }

    /// A read-only audit timestamp column (created_at / updated_at)
    pub fn audit_timestamp(name: impl Into<String>) -> Self {
        Self {
            editable: false,
            ..Self::new(name, ColumnType::Timestamp)
        }
    }

    /// Set a maximum text length
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set the closed option set (Enum columns)
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.enum_options = Some(options);
        self
    }

    /// Mark the column read-only
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Whether this column is edited via a closed-option selector
    pub fn is_closed_option(&self) -> bool {
        self.foreign_key || self.ty == ColumnType::Enum
    }

    /// Header label: `"<PK |FK |><name> - <type>[(<limit>)]"`
    pub fn header_label(&self) -> String {
        let mut label = String::new();
        if self.primary_key {
            label.push_str("PK ");
        } else if self.foreign_key {
            label.push_str("FK ");
        }
        label.push_str(&self.name);
        label.push_str(" - ");
        label.push_str(self.ty.label());
        if self.ty == ColumnType::ShortText {
            if let Some(max_len) = self.max_len {
                label.push_str(&format!("({})", max_len));
            }
        }
        label
    }

    /// Seed value for the create row.
    ///
    /// Text columns start empty, numeric columns at `"0"`, timestamps at the
    /// current time, and closed-option columns at their first option (or
    /// `"None"` when no options are loaded yet).
    pub fn default_value(&self) -> String {
        if self.is_closed_option() {
            return self
                .enum_options
                .as_ref()
                .and_then(|options| options.first().cloned())
                .unwrap_or_else(|| "None".to_string());
        }
        match self.ty {
            ColumnType::ShortText | ColumnType::LongText => String::new(),
            ColumnType::Numeric => "0".to_string(),
            ColumnType::Timestamp => now_formatted(),
            ColumnType::Enum => String::new(),
        }
    }
}

/// Check the at-most-one-primary-key invariant over a column list
pub fn single_primary_key(columns: &[ColumnSpec]) -> Option<usize> {
    let mut found = None;
    for (index, column) in columns.iter().enumerate() {
        if column.primary_key {
            if found.is_some() {
                return None;
            }
            found = Some(index);
        }
    }
    found
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_label_plain() {
        let column = ColumnSpec::new("description", ColumnType::LongText);
        assert_eq!(column.header_label(), "description - text");
    }

    #[test]
    fn test_header_label_pk() {
        let column = ColumnSpec::primary_key("id");
        assert_eq!(column.header_label(), "PK id - numeric");
        assert!(!column.editable);
    }

    #[test]
    fn test_header_label_fk() {
        let column = ColumnSpec::foreign_key("owner_id", vec!["1".to_string()]);
        assert_eq!(column.header_label(), "FK owner_id - numeric");
    }

    #[test]
    fn test_header_label_varchar_limit() {
        let column = ColumnSpec::new("username", ColumnType::ShortText).with_max_len(32);
        assert_eq!(column.header_label(), "username - varchar(32)");
    }

    #[test]
    fn test_limit_only_shown_for_short_text() {
        let mut column = ColumnSpec::new("position", ColumnType::Numeric);
        column.max_len = Some(8);
        assert_eq!(column.header_label(), "position - numeric");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(ColumnSpec::new("t", ColumnType::ShortText).default_value(), "");
        assert_eq!(ColumnSpec::new("n", ColumnType::Numeric).default_value(), "0");

        let enum_col = ColumnSpec::new("role", ColumnType::Enum)
            .with_options(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        assert_eq!(enum_col.default_value(), "1");

        let empty_fk = ColumnSpec::foreign_key("owner_id", vec![]);
        assert_eq!(empty_fk.default_value(), "None");
    }

    #[test]
    fn test_default_timestamp_is_canonical() {
        let column = ColumnSpec::new("due_date", ColumnType::Timestamp);
        assert!(kadmin_core::parse_timestamp(&column.default_value()).is_ok());
    }

    #[test]
    fn test_single_primary_key() {
        let columns = vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText),
        ];
        assert_eq!(single_primary_key(&columns), Some(0));

        let two_pks = vec![ColumnSpec::primary_key("a"), ColumnSpec::primary_key("b")];
        assert_eq!(single_primary_key(&two_pks), None);
    }
}
