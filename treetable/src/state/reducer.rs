//! Pure state reducer.

use crate::column::ColumnSet;
use crate::error::ConfigError;
use crate::model::RowId;
use crate::options::TableOptions;
use crate::sort::{self, SortAction, SortSpec, SortToggle, ToggleRules};

use super::{Action, ActionOutcome, TableState};

/// Read-only inputs an action may consult.
#[derive(Debug)]
pub struct ReduceContext<'a, T> {
    pub columns: &'a ColumnSet<T>,
    pub options: &'a TableOptions,
    /// Every row id in the current tree.
    pub row_ids: &'a [RowId],
}

/// Compute the state that results from applying `action` to `state`.
///
/// `state` is left untouched; the caller decides whether to commit.
pub fn reduce<T>(
    state: &TableState,
    action: &Action,
    cx: &ReduceContext<'_, T>,
) -> Result<(TableState, ActionOutcome), ConfigError> {
    let mut next = state.clone();

    let outcome = match action {
        Action::ToggleSort {
            column_id,
            desc,
            multi,
        } => {
            let (sort_by, sort_action) = reduce_toggle_sort(state, column_id, *desc, *multi, cx)?;
            next.sort_by = sort_by;
            ActionOutcome::Sort(sort_action)
        }
        Action::SetSort { sort_by } => {
            next.sort_by = sort_by.clone();
            ActionOutcome::Applied
        }
        Action::ResetSort => {
            next.sort_by = cx.options.initial_state.sort_by.clone();
            ActionOutcome::Applied
        }
        Action::ClearSort { column_id } => {
            next.sort_by = state.sort_by.without(column_id);
            ActionOutcome::Applied
        }
        Action::ToggleExpanded { id, value } => {
            ActionOutcome::Expanded(next.expanded.toggle(id, *value))
        }
        Action::ToggleAllExpanded { value } => {
            let value = value.unwrap_or(!state.expanded.is_all_expanded(cx.row_ids));
            next.expanded = if value {
                cx.row_ids.iter().cloned().collect()
            } else {
                Default::default()
            };
            ActionOutcome::Expanded(value)
        }
        Action::ResetExpanded => {
            next.expanded = cx.options.initial_state.expanded.clone();
            ActionOutcome::Applied
        }
    };

    log::debug!("[state] {} -> {:?}", action.action_type(), outcome);
    Ok((next, outcome))
}

/// The sort that results from toggling `column_id`, and the action the state
/// machine chose.
pub fn reduce_toggle_sort<T>(
    state: &TableState,
    column_id: &str,
    desc: Option<bool>,
    multi: bool,
    cx: &ReduceContext<'_, T>,
) -> Result<(SortSpec, SortAction), ConfigError> {
    let column = cx
        .columns
        .get(column_id)
        .ok_or_else(|| ConfigError::unknown_column(column_id))?;
    let toggle = SortToggle {
        column_id,
        sort_desc_first: column.sort_desc_first,
        desc,
        multi,
    };
    Ok(sort::toggle_sort(&state.sort_by, &toggle, &ToggleRules::from(cx.options)))
}

/// State to use after the row tree has been replaced.
///
/// The sort resets unless sorting is manual; the expanded set resets on every
/// replacement. Both are gated by their auto-reset options.
pub fn reset_for_new_rows(state: &TableState, options: &TableOptions) -> TableState {
    let mut next = state.clone();
    if options.auto_reset_sort_by && !options.manual_sort_by {
        next.sort_by = options.initial_state.sort_by.clone();
    }
    if options.auto_reset_expanded {
        next.expanded = options.initial_state.expanded.clone();
    }
    next
}
