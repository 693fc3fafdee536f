//! The host container: owns the row tree, the state and the derived rows.

use std::cmp::Ordering;

use crate::column::{Column, ColumnSet};
use crate::error::ConfigError;
use crate::expand::{ExpandedSet, VisibleRow, expand_rows};
use crate::model::{Row, RowData, RowId};
use crate::options::TableOptions;
use crate::sort::{SortAction, SortContext, SortSpec, SortTypes, SortedRows, sort_rows};
use crate::state::{
    Action, ActionOutcome, ReduceContext, TableState, reduce, reduce_toggle_sort,
    reset_for_new_rows,
};

/// Read-only sort flags of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSortStatus {
    /// The column can be sorted.
    pub can_sort: bool,
    /// The column is part of the current sort.
    pub is_sorted: bool,
    /// Priority position in the current sort.
    pub sorted_index: Option<usize>,
    /// Direction in the current sort.
    pub is_sorted_desc: Option<bool>,
}

/// A hierarchical table: rows in, ordered and visible rows out.
///
/// `Table<T>` owns:
/// - the input row tree (already filtered and grouped upstream)
/// - the column registry and the sort type registry
/// - the sort specification and the expanded set
/// - the derived ordered tree, its flattening and the visible rows
///
/// Every mutation is one transaction. The next state is computed by the
/// reducer, the derived rows are recomputed from it when one of their inputs
/// changed, and both are committed only if derivation succeeded.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use treetable::{Column, Row, RowId, Table, TableOptions, Value};
///
/// type Record = HashMap<String, Value>;
///
/// fn record(name: &str) -> Record {
///     HashMap::from([("name".to_string(), Value::from(name))])
/// }
///
/// let rows = vec![
///     Row::leaf(RowId::root(0), 0, record("b")),
///     Row::leaf(RowId::root(1), 1, record("a")),
/// ];
/// let mut table = Table::with_rows(vec![Column::new("name")], rows, TableOptions::default())?;
/// table.toggle_sort("name", None, false)?;
///
/// let names: Vec<Value> = table
///     .visible_rows()
///     .iter()
///     .map(|v| v.row.original["name"].clone())
///     .collect();
/// assert_eq!(names, vec![Value::from("a"), Value::from("b")]);
/// # Ok::<(), treetable::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Table<T> {
    columns: ColumnSet<T>,
    sort_types: SortTypes<T>,
    options: TableOptions,
    /// Input tree.
    rows: Vec<Row<T>>,
    /// Every id in the input tree.
    row_ids: Vec<RowId>,
    state: TableState,
    sorted: SortedRows<T>,
    visible: Vec<VisibleRow<T>>,
}

impl<T: RowData + 'static> Table<T> {
    /// Create an empty table.
    pub fn new(columns: Vec<Column<T>>, options: TableOptions) -> Result<Self, ConfigError> {
        let mut table = Self {
            columns: ColumnSet::new(columns)?,
            sort_types: SortTypes::new(),
            state: options.initial_state.clone(),
            options,
            rows: Vec::new(),
            row_ids: Vec::new(),
            sorted: SortedRows::default(),
            visible: Vec::new(),
        };
        table.rederive()?;
        Ok(table)
    }

    /// Create a table with initial rows.
    pub fn with_rows(
        columns: Vec<Column<T>>,
        rows: Vec<Row<T>>,
        options: TableOptions,
    ) -> Result<Self, ConfigError> {
        let mut table = Self::new(columns, options)?;
        table.set_rows(rows)?;
        Ok(table)
    }

    /// Use a user sort type registry.
    pub fn with_sort_types(mut self, sort_types: SortTypes<T>) -> Result<Self, ConfigError> {
        self.sort_types = sort_types;
        self.rederive()?;
        Ok(self)
    }

    /// Register a named sort type and re-sort.
    pub fn register_sort_type<F>(
        &mut self,
        name: impl Into<String>,
        f: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync + 'static,
    {
        self.sort_types.register(name, f);
        self.rederive()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the row tree.
    ///
    /// The auto-reset policy runs against the new tree before anything is
    /// derived from it.
    pub fn set_rows(&mut self, rows: Vec<Row<T>>) -> Result<(), ConfigError> {
        let next = reset_for_new_rows(&self.state, &self.options);
        log::debug!(
            "[table] rows replaced ({} roots), sort reset: {}, expanded reset: {}",
            rows.len(),
            next.sort_by != self.state.sort_by,
            next.expanded != self.state.expanded
        );
        self.commit(Some(rows), next)
    }

    /// The input tree, before sorting.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Every row id in the input tree, in pre-order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    /// Find a row anywhere in the ordered tree.
    pub fn find_row(&self, id: &RowId) -> Option<&Row<T>> {
        Row::find(&self.sorted.rows, id)
    }

    // -------------------------------------------------------------------------
    // Derived rows
    // -------------------------------------------------------------------------

    /// Ordered root rows.
    pub fn ordered_rows(&self) -> &[Row<T>] {
        &self.sorted.rows
    }

    /// Pre-order flattening of the ordered tree.
    pub fn flattened_ordered_rows(&self) -> &[Row<T>] {
        &self.sorted.flat_rows
    }

    /// Rows visible under the current expansion, in display order.
    pub fn visible_rows(&self) -> &[VisibleRow<T>] {
        &self.visible
    }

    /// Greatest depth referenced by the expanded set.
    pub fn max_expanded_depth(&self) -> usize {
        self.state.expanded.max_depth()
    }

    /// Whether every known row is expanded.
    pub fn is_all_expanded(&self) -> bool {
        self.state.expanded.is_all_expanded(&self.row_ids)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// The current state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// The current sort specification.
    pub fn sort_by(&self) -> &SortSpec {
        &self.state.sort_by
    }

    /// The current expanded set.
    pub fn expanded(&self) -> &ExpandedSet {
        &self.state.expanded
    }

    /// The table options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The column registry.
    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// Sort flags of a column, `None` for unknown columns.
    pub fn column_status(&self, column_id: &str) -> Option<ColumnSortStatus> {
        let column = self.columns.get(column_id)?;
        let sorted_index = self.state.sort_by.index_of(column_id);
        Some(ColumnSortStatus {
            can_sort: column.is_sortable(&self.options),
            is_sorted: sorted_index.is_some(),
            sorted_index,
            is_sorted_desc: self.state.sort_by.get(column_id).map(|d| d.desc),
        })
    }

    /// Apply an action.
    ///
    /// On error the state and the derived rows are unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, ConfigError> {
        let (next, outcome) = reduce(&self.state, &action, &self.reduce_context())?;
        self.commit(None, next)?;
        Ok(outcome)
    }

    /// Run the sort toggle state machine for a column.
    pub fn toggle_sort(
        &mut self,
        column_id: &str,
        desc: Option<bool>,
        multi: bool,
    ) -> Result<SortAction, ConfigError> {
        let (sort_by, action) =
            reduce_toggle_sort(&self.state, column_id, desc, multi, &self.reduce_context())?;
        log::debug!("[state] toggle_sort -> {:?}", action);
        let next = TableState {
            sort_by,
            ..self.state.clone()
        };
        self.commit(None, next)?;
        Ok(action)
    }

    /// Replace the sort specification.
    pub fn set_sort(&mut self, sort_by: impl Into<SortSpec>) -> Result<(), ConfigError> {
        self.dispatch(Action::SetSort {
            sort_by: sort_by.into(),
        })
        .map(|_| ())
    }

    /// Replace the sort specification with a function of the current one.
    pub fn set_sort_with<F>(&mut self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&SortSpec) -> SortSpec,
    {
        let sort_by = f(&self.state.sort_by);
        self.set_sort(sort_by)
    }

    /// Restore the initial sort specification.
    pub fn reset_sort(&mut self) -> Result<(), ConfigError> {
        self.dispatch(Action::ResetSort).map(|_| ())
    }

    /// Remove a column from the sort.
    pub fn clear_sort(&mut self, column_id: &str) -> Result<(), ConfigError> {
        self.dispatch(Action::ClearSort {
            column_id: column_id.to_string(),
        })
        .map(|_| ())
    }

    /// Set or flip a row's expansion. Returns the resulting value.
    pub fn toggle_expanded(
        &mut self,
        id: &RowId,
        value: Option<bool>,
    ) -> Result<bool, ConfigError> {
        let outcome = self.dispatch(Action::ToggleExpanded {
            id: id.clone(),
            value,
        })?;
        Ok(outcome == ActionOutcome::Expanded(true))
    }

    /// Expand every known row, or collapse everything. Returns the resulting
    /// value.
    pub fn toggle_all_expanded(&mut self, value: Option<bool>) -> Result<bool, ConfigError> {
        let outcome = self.dispatch(Action::ToggleAllExpanded { value })?;
        Ok(outcome == ActionOutcome::Expanded(true))
    }

    /// Restore the initial expanded set.
    pub fn reset_expanded(&mut self) -> Result<(), ConfigError> {
        self.dispatch(Action::ResetExpanded).map(|_| ())
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    fn reduce_context(&self) -> ReduceContext<'_, T> {
        ReduceContext {
            columns: &self.columns,
            options: &self.options,
            row_ids: &self.row_ids,
        }
    }

    fn sort_context(&self) -> SortContext<'_, T> {
        SortContext {
            columns: &self.columns,
            sort_types: &self.sort_types,
            manual_sort_by: self.options.manual_sort_by,
        }
    }

    /// Recompute every derived sequence from the current state.
    fn rederive(&mut self) -> Result<(), ConfigError> {
        let sorted = sort_rows(&self.rows, &self.state.sort_by, &self.sort_context())?;
        self.visible = expand_rows(
            &sorted.rows,
            &self.state.expanded,
            self.options.expand_options(),
        );
        self.sorted = sorted;
        Ok(())
    }

    /// Derive from `next` (and new rows, if any), then commit everything.
    fn commit(&mut self, rows: Option<Vec<Row<T>>>, next: TableState) -> Result<(), ConfigError> {
        let rows_changed = rows.is_some();
        let sort_changed = rows_changed || next.sort_by != self.state.sort_by;
        let expanded_changed = next.expanded != self.state.expanded;

        let input = rows.as_deref().unwrap_or(&self.rows);
        let sorted = if sort_changed {
            Some(sort_rows(input, &next.sort_by, &self.sort_context())?)
        } else {
            None
        };
        let visible = if sort_changed || expanded_changed {
            let ordered = sorted.as_ref().map_or(&self.sorted.rows, |s| &s.rows);
            Some(expand_rows(ordered, &next.expanded, self.options.expand_options()))
        } else {
            None
        };

        if let Some(rows) = rows {
            self.row_ids = Row::flatten(&rows).into_iter().map(|row| row.id).collect();
            self.rows = rows;
        }
        if let Some(sorted) = sorted {
            self.sorted = sorted;
        }
        if let Some(visible) = visible {
            self.visible = visible;
        }
        self.state = next;
        Ok(())
    }
}
