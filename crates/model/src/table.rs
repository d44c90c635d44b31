//! Directive evaluation
//!
//! `visible_rows` is the local recompute applied on every render: it takes
//! the full fetched row list plus the per-column directive state and returns
//! the rows to display. Derived state only; nothing here is persisted.

use crate::column::{ColumnSpec, ColumnType};
use crate::directive::{ColumnControls, FilterOp, SortDirection};

/// One table row: cell values positionally aligned with the column list
pub type Row = Vec<String>;

/// Apply the active search, filter, and sort directives to `rows`.
///
/// Search keeps rows whose cell equals the term exactly; filters apply their
/// operator; sorts run as successive stable passes in ascending activation
/// priority, so the most-recently-activated sort is the final pass and
/// therefore the primary key (earlier activations survive as tie-breaks).
/// `controls` must be positionally aligned with `columns`.
pub fn visible_rows(columns: &[ColumnSpec], controls: &[ColumnControls], rows: &[Row]) -> Vec<Row> {
    debug_assert_eq!(columns.len(), controls.len());

    let mut result: Vec<Row> = rows
        .iter()
        .filter(|row| row_passes(columns, controls, row))
        .cloned()
        .collect();

    // (priority, direction, column index), oldest activation first
    let mut sorts: Vec<(u64, SortDirection, usize)> = controls
        .iter()
        .enumerate()
        .filter_map(|(index, control)| {
            control
                .sort
                .map(|direction| (control.sort_priority, direction, index))
        })
        .collect();
    sorts.sort_by_key(|&(priority, _, _)| priority);

    for (_, direction, index) in sorts {
        let numeric = columns[index].ty == ColumnType::Numeric;
        result.sort_by(|a, b| {
            let ordering = if numeric {
                numeric_value(&a[index]).cmp(&numeric_value(&b[index]))
            } else {
                a[index].cmp(&b[index])
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    result
}

fn row_passes(columns: &[ColumnSpec], controls: &[ColumnControls], row: &Row) -> bool {
    for (index, control) in controls.iter().enumerate() {
        if let Some(term) = &control.search {
            if &row[index] != term {
                return false;
            }
        }
        if let Some((operand, op)) = &control.filter {
            let numeric = columns[index].ty == ColumnType::Numeric;
            if !filter_matches(&row[index], operand, *op, numeric) {
                return false;
            }
        }
    }
    true
}

/// Evaluate one filter against one cell. Ordering operators compare as
/// integers on numeric columns and lexicographically otherwise; an
/// unparseable numeric operand matches nothing.
fn filter_matches(cell: &str, operand: &str, op: FilterOp, numeric: bool) -> bool {
    match op {
        FilterOp::StartsWith => cell.starts_with(operand),
        FilterOp::EndsWith => cell.ends_with(operand),
        FilterOp::Contains => cell.contains(operand),
        FilterOp::GreaterThan | FilterOp::LessThan | FilterOp::Equals if numeric => {
            let (Ok(cell), Ok(operand)) = (cell.parse::<i64>(), operand.parse::<i64>()) else {
                return false;
            };
            match op {
                FilterOp::GreaterThan => cell > operand,
                FilterOp::LessThan => cell < operand,
                _ => cell == operand,
            }
        }
        FilterOp::GreaterThan => cell > operand,
        FilterOp::LessThan => cell < operand,
        FilterOp::Equals => cell == operand,
    }
}

/// Integer sort key for numeric cells; malformed cells sort first
fn numeric_value(cell: &str) -> i64 {
    cell.parse::<i64>().unwrap_or(i64::MIN)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::PriorityCounter;
    use pretty_assertions::assert_eq;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::primary_key("id"),
            ColumnSpec::new("title", ColumnType::ShortText).with_max_len(255),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            vec!["10".to_string(), "beta".to_string()],
            vec!["2".to_string(), "alpha".to_string()],
            vec!["7".to_string(), "beta".to_string()],
            vec!["1".to_string(), "gamma".to_string()],
        ]
    }

    fn cell_at(result: &[Row], column: usize) -> Vec<&str> {
        result.iter().map(|row| row[column].as_str()).collect()
    }

    #[test]
    fn test_no_directives_is_identity() {
        let columns = columns();
        let controls = vec![ColumnControls::new(), ColumnControls::new()];
        assert_eq!(visible_rows(&columns, &controls, &rows()), rows());
    }

    #[test]
    fn test_numeric_ascending_sort() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        controls[0].cycle_sort(&mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        // Non-decreasing when parsed as integers, not lexicographic.
        assert_eq!(cell_at(&result, 0), vec!["1", "2", "7", "10"]);
    }

    #[test]
    fn test_numeric_descending_sort() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        controls[0].cycle_sort(&mut counter);
        controls[0].cycle_sort(&mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["10", "7", "2", "1"]);
    }

    #[test]
    fn test_most_recent_sort_is_primary() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        // Activated in order: id (A), then title (B). B must win as primary.
        controls[0].cycle_sort(&mut counter);
        controls[1].cycle_sort(&mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 1), vec!["alpha", "beta", "beta", "gamma"]);
        // Within the "beta" tie, the earlier id sort still orders 7 before 10.
        assert_eq!(cell_at(&result, 0), vec!["2", "7", "10", "1"]);
    }

    #[test]
    fn test_reactivation_flips_primary() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        controls[1].cycle_sort(&mut counter);
        // id toggled later: ascending activation outranks the title sort.
        controls[0].cycle_sort(&mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["1", "2", "7", "10"]);
    }

    #[test]
    fn test_search_is_exact_match() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        controls[1].set_search("beta", &mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["10", "7"]);

        controls[1].set_search("bet", &mut counter);
        assert!(visible_rows(&columns, &controls, &rows()).is_empty());
    }

    #[test]
    fn test_text_filters() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];

        controls[1].set_filter("a", FilterOp::EndsWith, &mut counter);
        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 1), vec!["beta", "alpha", "beta", "gamma"]);

        controls[1].set_filter("alp", FilterOp::StartsWith, &mut counter);
        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 1), vec!["alpha"]);

        controls[1].set_filter("mm", FilterOp::Contains, &mut counter);
        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 1), vec!["gamma"]);
    }

    #[test]
    fn test_numeric_filters_compare_as_integers() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];

        controls[0].set_filter("7", FilterOp::GreaterThan, &mut counter);
        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["10"]);

        controls[0].set_filter("7", FilterOp::Equals, &mut counter);
        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["7"]);

        // Unparseable operand excludes everything rather than panicking.
        controls[0].set_filter("x", FilterOp::LessThan, &mut counter);
        assert!(visible_rows(&columns, &controls, &rows()).is_empty());
    }

    #[test]
    fn test_filter_then_sort_compose() {
        let columns = columns();
        let mut counter = PriorityCounter::new();
        let mut controls = vec![ColumnControls::new(), ColumnControls::new()];
        controls[1].set_filter("beta", FilterOp::Equals, &mut counter);
        controls[0].cycle_sort(&mut counter);

        let result = visible_rows(&columns, &controls, &rows());
        assert_eq!(cell_at(&result, 0), vec!["7", "10"]);
    }
}
