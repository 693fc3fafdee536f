//! Table state, actions and the reducer that applies them.

mod action;
mod reducer;

pub use action::*;
pub use reducer::*;

use serde::{Deserialize, Serialize};

use crate::expand::ExpandedSet;
use crate::sort::SortSpec;

/// The canonical mutable state of a table.
///
/// Derived rows are not part of the state; they are recomputed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    /// Current sort specification.
    pub sort_by: SortSpec,
    /// Currently expanded rows.
    pub expanded: ExpandedSet,
}

impl TableState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort specification.
    pub fn with_sort_by(mut self, sort_by: impl Into<SortSpec>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Sets the expanded set.
    pub fn with_expanded(mut self, expanded: ExpandedSet) -> Self {
        self.expanded = expanded;
        self
    }
}
