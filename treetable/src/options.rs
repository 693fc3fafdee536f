//! Table configuration

use serde::{Deserialize, Serialize};

use crate::expand::ExpandOptions;
use crate::state::TableState;

/// Host configuration for sorting and expansion.
///
/// Every field has a default, so partial JSON configs deserialize.
///
/// # Example
///
/// ```
/// use treetable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_max_multi_sort_col_count(2)
///     .with_disable_sort_remove(true);
///
/// let parsed: TableOptions = serde_json::from_str(r#"{ "manual_sort_by": true }"#).unwrap();
/// assert!(parsed.manual_sort_by);
/// assert!(parsed.paginate_expanded_rows);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Rows arrive already sorted; the sort engine passes them through.
    ///
    /// Default: false
    pub manual_sort_by: bool,

    /// Maximum number of columns in a multi-sort. `None` is unbounded.
    ///
    /// Default: unbounded
    pub max_multi_sort_col_count: Option<usize>,

    /// Treat every toggle as single-sort.
    pub disable_multi_sort: bool,

    /// Toggling never removes a column from the sort.
    pub disable_sort_remove: bool,

    /// Multi-sort toggles never remove a column from the sort.
    pub disable_multi_remove: bool,

    /// Disable sorting for every column with an accessor.
    pub disable_sort_by: bool,

    /// Sortability of columns without an accessor, overriding the column.
    pub default_can_sort: Option<bool>,

    /// Hide collapsed sub-trees from the visible rows.
    ///
    /// Default: true
    pub paginate_expanded_rows: bool,

    /// Emit the children of expanded rows in the visible rows.
    ///
    /// Default: true
    pub expand_sub_rows: bool,

    /// Reset the sort to the initial state when rows are replaced.
    /// Ignored when `manual_sort_by` is set.
    ///
    /// Default: true
    pub auto_reset_sort_by: bool,

    /// Reset the expanded set to the initial state when rows are replaced.
    ///
    /// Default: true
    pub auto_reset_expanded: bool,

    /// State the table starts with and resets to.
    pub initial_state: TableState,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            manual_sort_by: false,
            max_multi_sort_col_count: None,
            disable_multi_sort: false,
            disable_sort_remove: false,
            disable_multi_remove: false,
            disable_sort_by: false,
            default_can_sort: None,
            paginate_expanded_rows: true,
            expand_sub_rows: true,
            auto_reset_sort_by: true,
            auto_reset_expanded: true,
            initial_state: TableState::default(),
        }
    }
}

impl TableOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets manual sorting.
    pub fn with_manual_sort_by(mut self, value: bool) -> Self {
        self.manual_sort_by = value;
        self
    }

    /// Caps the number of multi-sort columns.
    pub fn with_max_multi_sort_col_count(mut self, max: usize) -> Self {
        self.max_multi_sort_col_count = Some(max);
        self
    }

    /// Disables multi-sort.
    pub fn with_disable_multi_sort(mut self, value: bool) -> Self {
        self.disable_multi_sort = value;
        self
    }

    /// Disables removal by toggling.
    pub fn with_disable_sort_remove(mut self, value: bool) -> Self {
        self.disable_sort_remove = value;
        self
    }

    /// Disables removal by multi-sort toggling.
    pub fn with_disable_multi_remove(mut self, value: bool) -> Self {
        self.disable_multi_remove = value;
        self
    }

    /// Disables sorting on all accessor columns.
    pub fn with_disable_sort_by(mut self, value: bool) -> Self {
        self.disable_sort_by = value;
        self
    }

    /// Sets sortability of accessor-less columns.
    pub fn with_default_can_sort(mut self, value: bool) -> Self {
        self.default_can_sort = Some(value);
        self
    }

    /// Sets whether collapsed sub-trees are hidden.
    pub fn with_paginate_expanded_rows(mut self, value: bool) -> Self {
        self.paginate_expanded_rows = value;
        self
    }

    /// Sets whether expanded children are emitted.
    pub fn with_expand_sub_rows(mut self, value: bool) -> Self {
        self.expand_sub_rows = value;
        self
    }

    /// Sets sort auto-reset.
    pub fn with_auto_reset_sort_by(mut self, value: bool) -> Self {
        self.auto_reset_sort_by = value;
        self
    }

    /// Sets expansion auto-reset.
    pub fn with_auto_reset_expanded(mut self, value: bool) -> Self {
        self.auto_reset_expanded = value;
        self
    }

    /// Sets the initial state.
    pub fn with_initial_state(mut self, state: TableState) -> Self {
        self.initial_state = state;
        self
    }

    /// Options of the visibility walk.
    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            paginate_expanded_rows: self.paginate_expanded_rows,
            expand_sub_rows: self.expand_sub_rows,
        }
    }
}
