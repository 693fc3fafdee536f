//! Column registry consumed by the sort engine.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::model::Row;
use crate::options::TableOptions;
use crate::sort::types::ALPHANUMERIC;

/// A comparator between two rows for one column.
///
/// Arguments are `(row_a, row_b, column_id, desc)`. The result must always be
/// in ascending sense; the engine applies the direction. `desc` is passed for
/// comparators that want to place special values (such as nulls) last in
/// either direction.
pub type SortFn<T> = Arc<dyn Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync>;

/// How a column compares rows.
pub enum SortType<T> {
    /// Look the comparator up by name, in the user registry then the
    /// built-in one.
    Named(String),
    /// Use this comparator directly.
    Custom(SortFn<T>),
}

impl<T> SortType<T> {
    /// Wrap a closure as a custom sort type.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync + 'static,
    {
        SortType::Custom(Arc::new(f))
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        match self {
            SortType::Named(name) => name,
            SortType::Custom(_) => "<custom>",
        }
    }
}

impl<T> Default for SortType<T> {
    fn default() -> Self {
        SortType::Named(ALPHANUMERIC.to_string())
    }
}

impl<T> Clone for SortType<T> {
    fn clone(&self) -> Self {
        match self {
            SortType::Named(name) => SortType::Named(name.clone()),
            SortType::Custom(f) => SortType::Custom(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for SortType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortType::Named(name) => f.debug_tuple("Named").field(name).finish(),
            SortType::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Sorting metadata of one table column.
#[derive(Debug)]
pub struct Column<T> {
    /// Unique identifier for this column.
    pub id: String,
    /// Whether the column reads a value from the row. Columns without an
    /// accessor (action buttons, row numbers) are not sortable by default.
    pub has_accessor: bool,
    /// Comparator for this column.
    pub sort_type: SortType<T>,
    /// First click sorts descending instead of ascending.
    pub sort_desc_first: bool,
    /// Swap the meaning of ascending and descending for this column.
    pub sort_inverted: bool,
    /// Opt this column out of sorting.
    pub disable_sort_by: bool,
    /// Explicit sortability for accessor-less columns.
    pub can_sort: Option<bool>,
}

impl<T> Column<T> {
    /// Create a new column with the given id and the default sort type.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            has_accessor: true,
            sort_type: SortType::default(),
            sort_desc_first: false,
            sort_inverted: false,
            disable_sort_by: false,
            can_sort: None,
        }
    }

    /// Create a column that does not read any row value.
    pub fn display(id: impl Into<String>) -> Self {
        Self {
            has_accessor: false,
            ..Self::new(id)
        }
    }

    /// Use a named sort type.
    pub fn sort_type(mut self, name: impl Into<String>) -> Self {
        self.sort_type = SortType::Named(name.into());
        self
    }

    /// Use a custom comparator.
    pub fn sort_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync + 'static,
    {
        self.sort_type = SortType::custom(f);
        self
    }

    /// Sort descending on the first toggle.
    pub fn sort_desc_first(mut self, value: bool) -> Self {
        self.sort_desc_first = value;
        self
    }

    /// Invert the sort direction of this column.
    pub fn sort_inverted(mut self, value: bool) -> Self {
        self.sort_inverted = value;
        self
    }

    /// Disable sorting for this column.
    pub fn disable_sort_by(mut self, value: bool) -> Self {
        self.disable_sort_by = value;
        self
    }

    /// Set explicit sortability (only consulted for accessor-less columns).
    pub fn can_sort(mut self, value: bool) -> Self {
        self.can_sort = Some(value);
        self
    }

    /// Whether this column can be sorted under `options`.
    ///
    /// Accessor columns are sortable unless disabled on the column or the
    /// table. Other columns take the first defined of the table default and
    /// the column's own flag, and are not sortable otherwise.
    pub fn is_sortable(&self, options: &TableOptions) -> bool {
        if self.has_accessor {
            !(self.disable_sort_by || options.disable_sort_by)
        } else {
            options.default_can_sort.or(self.can_sort).unwrap_or(false)
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            has_accessor: self.has_accessor,
            sort_type: self.sort_type.clone(),
            sort_desc_first: self.sort_desc_first,
            sort_inverted: self.sort_inverted,
            disable_sort_by: self.disable_sort_by,
            can_sort: self.can_sort,
        }
    }
}

/// The set of columns known to a table, in definition order.
#[derive(Debug)]
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSet<T> {
    /// Build a column set, rejecting duplicate ids.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ConfigError::duplicate_column(&column.id));
            }
        }
        Ok(Self { columns })
    }

    /// Find a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Check whether a column id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate columns in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> Default for ColumnSet<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}
