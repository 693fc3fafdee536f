//! Configuration errors raised while building or deriving a table.

/// A mistake in the column registry or sort configuration.
///
/// These are programming errors, not data conditions: they are returned
/// immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two columns were registered with the same id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A column's sort type is neither a function nor a registered name.
    #[error("Could not find a valid sort type of '{sort_type}' for column '{column}'")]
    UnknownSortType { column: String, sort_type: String },

    /// An operation referenced a column that is not in the registry.
    #[error("Could not find a column with id '{id}'")]
    UnknownColumn { id: String },
}

impl ConfigError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates a new unknown sort type error.
    pub fn unknown_sort_type(column: impl Into<String>, sort_type: impl Into<String>) -> Self {
        Self::UnknownSortType {
            column: column.into(),
            sort_type: sort_type.into(),
        }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn { id: id.into() }
    }
}
