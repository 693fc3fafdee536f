//! State transitions

use serde::{Deserialize, Serialize};

use crate::model::RowId;
use crate::sort::{SortAction, SortSpec};

/// A requested change to the table state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Run the sort toggle state machine for a column.
    ToggleSort {
        column_id: String,
        #[serde(default)]
        desc: Option<bool>,
        #[serde(default)]
        multi: bool,
    },
    /// Replace the whole sort specification.
    SetSort { sort_by: SortSpec },
    /// Restore the initial sort specification.
    ResetSort,
    /// Remove one column from the sort, bypassing the state machine.
    ClearSort { column_id: String },
    /// Set or flip one row's expansion.
    ToggleExpanded {
        id: RowId,
        #[serde(default)]
        value: Option<bool>,
    },
    /// Expand every known row, or collapse everything.
    ToggleAllExpanded {
        #[serde(default)]
        value: Option<bool>,
    },
    /// Restore the initial expanded set.
    ResetExpanded,
}

impl Action {
    /// Get a string representation of the action type for logging
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::ToggleSort { .. } => "toggle_sort",
            Self::SetSort { .. } => "set_sort",
            Self::ResetSort => "reset_sort",
            Self::ClearSort { .. } => "clear_sort",
            Self::ToggleExpanded { .. } => "toggle_expanded",
            Self::ToggleAllExpanded { .. } => "toggle_all_expanded",
            Self::ResetExpanded => "reset_expanded",
        }
    }
}

/// What an action did, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The toggle state machine chose this action.
    Sort(SortAction),
    /// The resulting expansion value, echoed even when unchanged.
    Expanded(bool),
    /// The state was replaced or reset.
    Applied,
}
