//! # Table View Component
//!
//! The generic table editor. One `DataTable` renders any entity given its
//! column descriptors and stringified rows:
//! - header rows above and below the data, with sort / search / filter
//!   controls in the top header
//! - one view/edit row per visible record, with Edit / Delete actions
//! - a create row seeded from per-column defaults
//!
//! Row visibility and order are computed by `kadmin_model::visible_rows`
//! from the per-column directives held here; the row data itself always
//! stays the full fetched list.

use dioxus::prelude::*;

use kadmin_model::{
    ColumnControls, ColumnSpec, ColumnType, FilterOp, PriorityCounter, Row, single_primary_key,
    visible_rows,
};

use crate::components::inputs::{CellNumericInput, CellSelect, CellTextInput, TimestampInput};

// ============================================================================
// Data Table Component
// ============================================================================

/// Properties for the DataTable component
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Table title shown above the header
    pub title: String,

    /// Column descriptors, in display order
    pub columns: Vec<ColumnSpec>,

    /// All fetched rows, stringified cell-wise in column order
    pub rows: Vec<Row>,

    /// Called with the create row's cells when Create is clicked
    #[props(default)]
    pub on_create: EventHandler<Vec<String>>,

    /// Called with an edited row's cells when Save is clicked
    #[props(default)]
    pub on_save: EventHandler<Vec<String>>,

    /// Called with the primary-key value when Delete is clicked
    #[props(default)]
    pub on_delete: EventHandler<i64>,
}

/// Generic table editor driven by column descriptors
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let column_count = props.columns.len();
    let controls = use_signal(|| vec![ColumnControls::new(); column_count]);
    let counter = use_signal(PriorityCounter::new);

    let visible = visible_rows(&props.columns, &controls.read(), &props.rows);
    let pk = single_primary_key(&props.columns);

    rsx! {
        div { class: "db-table",
            div { class: "db-table-title", "{props.title}" }

            HeaderRow {
                columns: props.columns.clone(),
                controls,
                counter,
                with_controls: true,
            }

            for (index, cells) in visible.into_iter().enumerate() {
                TableRow {
                    key: "{row_key(pk, &cells, index)}",
                    columns: props.columns.clone(),
                    cells,
                    on_save: move |cells| props.on_save.call(cells),
                    on_delete: move |id| props.on_delete.call(id),
                }
            }

            div { class: "row-divider" }

            HeaderRow {
                columns: props.columns.clone(),
                controls,
                counter,
                with_controls: false,
            }

            CreateRow {
                columns: props.columns.clone(),
                on_create: move |cells| props.on_create.call(cells),
            }
        }
    }
}

// ============================================================================
// Header Row Component
// ============================================================================

/// Properties for HeaderRow
#[derive(Props, Clone, PartialEq)]
struct HeaderRowProps {
    columns: Vec<ColumnSpec>,

    /// Shared per-column directive state
    controls: Signal<Vec<ColumnControls>>,

    /// Shared activation-priority source
    counter: Signal<PriorityCounter>,

    /// Whether to render the directive controls (top header only)
    with_controls: bool,
}

/// One header row: labels plus, in the top copy, the directive controls
#[component]
fn HeaderRow(props: HeaderRowProps) -> Element {
    rsx! {
        div { class: "db-row header",
            for (index, column) in props.columns.iter().cloned().enumerate() {
                HeaderCell {
                    key: "{column.name}",
                    column,
                    index,
                    controls: props.controls,
                    counter: props.counter,
                    with_controls: props.with_controls,
                }
            }
            div { class: "db-cell actions",
                span { class: "header-label", "ACTIONS" }
            }
        }
    }
}

// ============================================================================
// Header Cell Component
// ============================================================================

/// Properties for HeaderCell
#[derive(Props, Clone, PartialEq)]
struct HeaderCellProps {
    column: ColumnSpec,
    index: usize,
    controls: Signal<Vec<ColumnControls>>,
    counter: Signal<PriorityCounter>,
    with_controls: bool,
}

/// One header cell: the column label plus sort toggle, search and filter
/// controls. Activating any directive takes a fresh priority from the shared
/// counter, which makes it the primary ordering key.
#[component]
fn HeaderCell(props: HeaderCellProps) -> Element {
    let mut controls = props.controls;
    let counter = props.counter;
    let index = props.index;

    let mut show_search = use_signal(|| false);
    let mut show_filter = use_signal(|| false);

    let control = props
        .controls
        .read()
        .get(index)
        .cloned()
        .unwrap_or_default();

    rsx! {
        div { class: "db-cell",
            div { class: "header-stack",
                span { class: "header-label", "{props.column.header_label()}" }

                if props.with_controls {
                    div { class: "header-controls",
                        button {
                            class: "action-button sort",
                            onclick: move |_| {
                                let mut counter = counter;
                                let mut counter_guard = counter.write();
                                if let Some(entry) = controls.write().get_mut(index) {
                                    entry.cycle_sort(&mut counter_guard);
                                }
                            },
                            "{control.sort_glyph()}"
                        }

                        if let Some(term) = control.search.clone() {
                            span { class: "directive-summary", "🔍 {term}" }
                            button {
                                class: "action-button neutral",
                                onclick: move |_| {
                                    if let Some(entry) = controls.write().get_mut(index) {
                                        entry.clear_search();
                                    }
                                },
                                "✕"
                            }
                        } else {
                            button {
                                class: "action-button neutral",
                                onclick: move |_| show_search.set(true),
                                "🔍"
                            }
                        }

                        if let Some((operand, op)) = control.filter.clone() {
                            span { class: "directive-summary", "⌛ {op.summarize(&operand)}" }
                            button {
                                class: "action-button neutral",
                                onclick: move |_| {
                                    if let Some(entry) = controls.write().get_mut(index) {
                                        entry.clear_filter();
                                    }
                                },
                                "✕"
                            }
                        } else {
                            button {
                                class: "action-button neutral",
                                onclick: move |_| show_filter.set(true),
                                "⌛"
                            }
                        }
                    }
                }
            }

            if show_search() {
                SearchDialog {
                    column: props.column.clone(),
                    on_confirm: move |term: String| {
                        let mut counter = counter;
                        let mut counter_guard = counter.write();
                        if let Some(entry) = controls.write().get_mut(index) {
                            entry.set_search(term, &mut counter_guard);
                        }
                        show_search.set(false);
                    },
                    on_dismiss: move |_| show_search.set(false),
                }
            }

            if show_filter() {
                FilterDialog {
                    column: props.column.clone(),
                    on_confirm: move |(operand, op): (String, FilterOp)| {
                        let mut counter = counter;
                        let mut counter_guard = counter.write();
                        if let Some(entry) = controls.write().get_mut(index) {
                            entry.set_filter(operand, op, &mut counter_guard);
                        }
                        show_filter.set(false);
                    },
                    on_dismiss: move |_| show_filter.set(false),
                }
            }
        }
    }
}

// ============================================================================
// Search Dialog
// ============================================================================

/// Properties for SearchDialog
#[derive(Props, Clone, PartialEq)]
struct SearchDialogProps {
    column: ColumnSpec,
    on_confirm: EventHandler<String>,
    on_dismiss: EventHandler<()>,
}

/// Exact-match search dialog. The term is edited with the same typed widget
/// the column uses in rows, so numeric columns get the digit filter and
/// timestamp columns the mask.
#[component]
fn SearchDialog(props: SearchDialogProps) -> Element {
    let mut term = use_signal(|| props.column.default_value());

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog-card",
                h3 { "Search {props.column.name}" }
                div { class: "field",
                    CellEditor {
                        column: props.column.clone(),
                        value: term(),
                        on_change: move |v: String| term.set(v),
                    }
                }
                button {
                    class: "action-button save",
                    onclick: move |_| props.on_confirm.call(term()),
                    "Search"
                }
                button {
                    class: "action-button cancel",
                    onclick: move |_| props.on_dismiss.call(()),
                    "Cancel"
                }
            }
        }
    }
}

// ============================================================================
// Filter Dialog
// ============================================================================

/// Properties for FilterDialog
#[derive(Props, Clone, PartialEq)]
struct FilterDialogProps {
    column: ColumnSpec,
    on_confirm: EventHandler<(String, FilterOp)>,
    on_dismiss: EventHandler<()>,
}

/// Filter dialog: operator dropdown plus a typed operand editor. Text
/// columns offer the substring operators, numeric and timestamp columns the
/// ordering operators.
#[component]
fn FilterDialog(props: FilterDialogProps) -> Element {
    let ops = ops_for_column(&props.column);
    let mut operand = use_signal(|| props.column.default_value());
    let mut op = use_signal(|| ops[0]);

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog-card",
                h3 { "Filter {props.column.name}" }
                div { class: "field",
                    select {
                        onchange: move |e| {
                            if let Some(found) = ops.iter().find(|o| o.label() == e.value()) {
                                op.set(*found);
                            }
                        },
                        for o in ops.iter() {
                            option {
                                key: "{o.label()}",
                                value: "{o.label()}",
                                selected: op() == *o,
                                "{o.label()}"
                            }
                        }
                    }
                }
                div { class: "field",
                    CellEditor {
                        column: props.column.clone(),
                        value: operand(),
                        on_change: move |v: String| operand.set(v),
                    }
                }
                button {
                    class: "action-button save",
                    onclick: move |_| props.on_confirm.call((operand(), op())),
                    "Filter"
                }
                button {
                    class: "action-button cancel",
                    onclick: move |_| props.on_dismiss.call(()),
                    "Cancel"
                }
            }
        }
    }
}

// ============================================================================
// Data Row Components
// ============================================================================

/// Properties for TableRow
#[derive(Props, Clone, PartialEq)]
struct TableRowProps {
    columns: Vec<ColumnSpec>,
    cells: Vec<String>,
    #[props(default)]
    on_save: EventHandler<Vec<String>>,
    #[props(default)]
    on_delete: EventHandler<i64>,
}

/// One record row, toggling between view and edit mode. Editing works on a
/// draft copy; Cancel discards it, Save hands it to the caller unchanged.
#[component]
fn TableRow(props: TableRowProps) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(Vec::<String>::new);

    // Delete resolves the primary-key cell up front; rows without a
    // parseable identity get no delete action.
    let delete_id = single_primary_key(&props.columns)
        .and_then(|i| props.cells.get(i))
        .and_then(|cell| cell.parse::<i64>().ok());
    let cells_for_edit = props.cells.clone();

    if editing() {
        rsx! {
            div { class: "db-row",
                EditableCells { columns: props.columns.clone(), draft }
                div { class: "db-cell actions",
                    button {
                        class: "action-button save",
                        onclick: move |_| {
                            editing.set(false);
                            props.on_save.call(draft());
                        },
                        "Save"
                    }
                    button {
                        class: "action-button cancel",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                }
            }
        }
    } else {
        let shaded: Vec<(String, &'static str)> = props
            .cells
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, cell_shade(i)))
            .collect();
        rsx! {
            div { class: "db-row",
                for (value, shade) in shaded {
                    div { class: "db-cell {shade}",
                        span { "{value}" }
                    }
                }
                div { class: "db-cell actions",
                    button {
                        class: "action-button edit",
                        onclick: move |_| {
                            draft.set(cells_for_edit.clone());
                            editing.set(true);
                        },
                        "Edit"
                    }
                    button {
                        class: "action-button delete",
                        onclick: move |_| {
                            if let Some(id) = delete_id {
                                props.on_delete.call(id);
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Properties for CreateRow
#[derive(Props, Clone, PartialEq)]
struct CreateRowProps {
    columns: Vec<ColumnSpec>,
    #[props(default)]
    on_create: EventHandler<Vec<String>>,
}

/// The always-editable row at the bottom of the table, seeded from each
/// column's default value
#[component]
fn CreateRow(props: CreateRowProps) -> Element {
    let columns = props.columns.clone();
    let draft = use_signal(move || {
        columns
            .iter()
            .map(|column| column.default_value())
            .collect::<Vec<String>>()
    });

    rsx! {
        div { class: "db-row",
            EditableCells { columns: props.columns.clone(), draft }
            div { class: "db-cell actions",
                button {
                    class: "action-button create",
                    onclick: move |_| props.on_create.call(draft()),
                    "Create"
                }
            }
        }
    }
}

/// Properties for EditableCells
#[derive(Props, Clone, PartialEq)]
struct EditableCellsProps {
    columns: Vec<ColumnSpec>,
    draft: Signal<Vec<String>>,
}

/// The cell editors of one row in edit mode. Read-only columns render their
/// draft value as plain text.
#[component]
fn EditableCells(props: EditableCellsProps) -> Element {
    let mut draft = props.draft;
    let values = props.draft.read().clone();

    let entries: Vec<(usize, ColumnSpec, String, &'static str)> = props
        .columns
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, column)| {
            let value = values.get(i).cloned().unwrap_or_default();
            (i, column, value, cell_shade(i))
        })
        .collect();

    rsx! {
        for (index, column, value, shade) in entries {
            div { class: "db-cell {shade}",
                if column.editable {
                    CellEditor {
                        column: column.clone(),
                        value: value.clone(),
                        on_change: move |v: String| {
                            let mut cells = draft.write();
                            if index < cells.len() {
                                cells[index] = v;
                            }
                        },
                    }
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

// ============================================================================
// Cell Editor Component
// ============================================================================

/// Properties for CellEditor
#[derive(Props, Clone, PartialEq)]
struct CellEditorProps {
    column: ColumnSpec,
    value: String,
    #[props(default)]
    on_change: EventHandler<String>,
}

/// Picks the input widget for a column: closed-option columns get a
/// dropdown, then numeric, timestamp and text columns their typed editors
#[component]
fn CellEditor(props: CellEditorProps) -> Element {
    let on_change = props.on_change;

    if props.column.is_closed_option() {
        let options = props.column.enum_options.clone().unwrap_or_default();
        rsx! {
            CellSelect {
                value: props.value.clone(),
                options,
                on_change: move |v| on_change.call(v),
            }
        }
    } else {
        match props.column.ty {
            ColumnType::Numeric => rsx! {
                CellNumericInput {
                    value: props.value.clone(),
                    on_change: move |v| on_change.call(v),
                }
            },
            ColumnType::Timestamp => rsx! {
                TimestampInput {
                    value: props.value.clone(),
                    on_change: move |v| on_change.call(v),
                }
            },
            _ => rsx! {
                CellTextInput {
                    value: props.value.clone(),
                    max_len: props.column.max_len,
                    on_change: move |v| on_change.call(v),
                }
            },
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Operator set offered in the filter dialog for a column
fn ops_for_column(column: &ColumnSpec) -> &'static [FilterOp] {
    match column.ty {
        ColumnType::Numeric | ColumnType::Timestamp => &FilterOp::ORDERING_OPS,
        _ => &FilterOp::TEXT_OPS,
    }
}

/// Alternating background class for a data cell
fn cell_shade(index: usize) -> &'static str {
    if index % 2 == 0 { "even" } else { "odd" }
}

/// Diffing key for a data row: the primary-key cell when present and
/// non-empty, otherwise the visible position
fn row_key(pk: Option<usize>, cells: &[String], fallback: usize) -> String {
    pk.and_then(|i| cells.get(i))
        .filter(|cell| !cell.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("row-{}", fallback))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_shade_alternates() {
        assert_eq!(cell_shade(0), "even");
        assert_eq!(cell_shade(1), "odd");
        assert_eq!(cell_shade(2), "even");
    }

    #[test]
    fn test_row_key_prefers_primary_key_cell() {
        let cells = vec!["42".to_string(), "demo".to_string()];
        assert_eq!(row_key(Some(0), &cells, 3), "42");
    }

    #[test]
    fn test_row_key_falls_back_to_position() {
        let cells = vec!["".to_string(), "demo".to_string()];
        assert_eq!(row_key(Some(0), &cells, 3), "row-3");
        assert_eq!(row_key(None, &cells, 5), "row-5");
    }

    #[test]
    fn test_ops_for_column() {
        let title = ColumnSpec::new("title", ColumnType::ShortText);
        assert_eq!(ops_for_column(&title), &FilterOp::TEXT_OPS);

        let position = ColumnSpec::new("position", ColumnType::Numeric);
        assert_eq!(ops_for_column(&position), &FilterOp::ORDERING_OPS);

        let due = ColumnSpec::new("due_date", ColumnType::Timestamp);
        assert_eq!(ops_for_column(&due), &FilterOp::ORDERING_OPS);
    }
}
