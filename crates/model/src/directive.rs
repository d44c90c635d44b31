//! Sort / search / filter directives
//!
//! Each column carries optional directives; each activation takes a priority
//! from a per-table monotonically increasing counter, and clearing a
//! directive resets its priority to 0. When several directives are active at
//! once they compose by activation recency: the most-recently-activated
//! directive is the primary key (see `table::visible_rows`).

/// Direction of an active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Filter operator, chosen in the filter dialog.
///
/// Text columns offer the substring operators, numeric and timestamp columns
/// the ordering operators; the evaluation accepts any pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    StartsWith,
    EndsWith,
    Contains,
    GreaterThan,
    LessThan,
    Equals,
}

impl FilterOp {
    /// Short summary shown in the header while the filter is active
    pub fn summarize(&self, operand: &str) -> String {
        match self {
            FilterOp::StartsWith => format!("{} ...", operand),
            FilterOp::EndsWith => format!("... {}", operand),
            FilterOp::Contains => format!("... {} ...", operand),
            FilterOp::GreaterThan => format!("> {}", operand),
            FilterOp::LessThan => format!("< {}", operand),
            FilterOp::Equals => format!("= {}", operand),
        }
    }

    /// Dialog label for this operator
    pub fn label(&self) -> &'static str {
        match self {
            FilterOp::StartsWith => "Starts with",
            FilterOp::EndsWith => "Ends with",
            FilterOp::Contains => "Contains",
            FilterOp::GreaterThan => ">",
            FilterOp::LessThan => "<",
            FilterOp::Equals => "=",
        }
    }

    /// Operators offered for text columns
    pub const TEXT_OPS: [FilterOp; 3] = [FilterOp::StartsWith, FilterOp::EndsWith, FilterOp::Contains];

    /// Operators offered for numeric and timestamp columns
    pub const ORDERING_OPS: [FilterOp; 3] = [FilterOp::GreaterThan, FilterOp::LessThan, FilterOp::Equals];
}

/// Per-table source of activation priorities.
///
/// Monotonically increasing; never reset while the table lives, so a
/// re-activated directive always lands after everything still active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounter(u64);

impl PriorityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next (strictly positive) priority
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Active directives for one column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnControls {
    /// Active sort direction, if any
    pub sort: Option<SortDirection>,
    /// Activation priority of the sort (0 when inactive)
    pub sort_priority: u64,
    /// Active exact-match search term, if any
    pub search: Option<String>,
    /// Activation priority of the search (0 when inactive)
    pub search_priority: u64,
    /// Active filter as `(operand, operator)`, if any
    pub filter: Option<(String, FilterOp)>,
    /// Activation priority of the filter (0 when inactive)
    pub filter_priority: u64,
}

impl ColumnControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the three-state sort toggle: none → ascending → descending →
    /// none. Entering either direction counts as a fresh activation.
    pub fn cycle_sort(&mut self, counter: &mut PriorityCounter) {
        self.sort = match self.sort {
            None => {
                self.sort_priority = counter.next();
                Some(SortDirection::Ascending)
            }
            Some(SortDirection::Ascending) => {
                self.sort_priority = counter.next();
                Some(SortDirection::Descending)
            }
            Some(SortDirection::Descending) => {
                self.sort_priority = 0;
                None
            }
        };
    }

    /// Activate an exact-match search on this column
    pub fn set_search(&mut self, term: impl Into<String>, counter: &mut PriorityCounter) {
        self.search = Some(term.into());
        self.search_priority = counter.next();
    }

    /// Clear the search and reset its priority
    pub fn clear_search(&mut self) {
        self.search = None;
        self.search_priority = 0;
    }

    /// Activate a filter on this column
    pub fn set_filter(
        &mut self,
        operand: impl Into<String>,
        op: FilterOp,
        counter: &mut PriorityCounter,
    ) {
        self.filter = Some((operand.into(), op));
        self.filter_priority = counter.next();
    }

    /// Clear the filter and reset its priority
    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.filter_priority = 0;
    }

    /// Glyph for the sort toggle button
    pub fn sort_glyph(&self) -> &'static str {
        match self.sort {
            None => "=",
            Some(SortDirection::Ascending) => "↓",
            Some(SortDirection::Descending) => "↑",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_cycle() {
        let mut counter = PriorityCounter::new();
        let mut controls = ColumnControls::new();
        assert_eq!(controls.sort, None);
        assert_eq!(controls.sort_glyph(), "=");

        controls.cycle_sort(&mut counter);
        assert_eq!(controls.sort, Some(SortDirection::Ascending));
        assert_eq!(controls.sort_priority, 1);
        assert_eq!(controls.sort_glyph(), "↓");

        controls.cycle_sort(&mut counter);
        assert_eq!(controls.sort, Some(SortDirection::Descending));
        assert_eq!(controls.sort_priority, 2);
        assert_eq!(controls.sort_glyph(), "↑");

        controls.cycle_sort(&mut counter);
        assert_eq!(controls.sort, None);
        assert_eq!(controls.sort_priority, 0);
    }

    #[test]
    fn test_priorities_are_monotonic_across_columns() {
        let mut counter = PriorityCounter::new();
        let mut a = ColumnControls::new();
        let mut b = ColumnControls::new();

        a.cycle_sort(&mut counter);
        b.set_search("x", &mut counter);
        b.set_filter("5", FilterOp::GreaterThan, &mut counter);

        assert!(a.sort_priority < b.search_priority);
        assert!(b.search_priority < b.filter_priority);
    }

    #[test]
    fn test_clear_resets_priority() {
        let mut counter = PriorityCounter::new();
        let mut controls = ColumnControls::new();

        controls.set_search("demo", &mut counter);
        assert_eq!(controls.search, Some("demo".to_string()));
        controls.clear_search();
        assert_eq!(controls.search, None);
        assert_eq!(controls.search_priority, 0);

        controls.set_filter("z", FilterOp::Contains, &mut counter);
        controls.clear_filter();
        assert_eq!(controls.filter, None);
        assert_eq!(controls.filter_priority, 0);
    }

    #[test]
    fn test_filter_summaries() {
        assert_eq!(FilterOp::StartsWith.summarize("ab"), "ab ...");
        assert_eq!(FilterOp::EndsWith.summarize("ab"), "... ab");
        assert_eq!(FilterOp::Contains.summarize("ab"), "... ab ...");
        assert_eq!(FilterOp::GreaterThan.summarize("5"), "> 5");
        assert_eq!(FilterOp::LessThan.summarize("5"), "< 5");
        assert_eq!(FilterOp::Equals.summarize("5"), "= 5");
    }
}
