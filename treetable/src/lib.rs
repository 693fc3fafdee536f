//! Sorting and expansion for hierarchical tables.
//!
//! A [`Table`] takes a tree of [`Row`]s that has already been filtered and
//! grouped, orders it by a multi-column [`SortSpec`](sort::SortSpec) driven by
//! a toggle state machine, and flattens it into the list of visible rows
//! according to an [`ExpandedSet`](expand::ExpandedSet). Pagination and
//! rendering consume [`Table::visible_rows`].

pub mod column;
pub mod error;
pub mod expand;
pub mod model;
pub mod options;
pub mod sort;
pub mod state;

mod table;

pub use column::{Column, ColumnSet, SortFn, SortType};
pub use error::{ConfigError, ParseRowIdError};
pub use expand::{ExpandedSet, VisibleRow};
pub use model::{Row, RowData, RowId, Value};
pub use options::TableOptions;
pub use sort::{SortAction, SortDescriptor, SortSpec, SortTypes};
pub use state::{Action, ActionOutcome, TableState};
pub use table::*;
