//! Comparator resolution.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::column::{Column, SortFn, SortType};
use crate::error::ConfigError;
use crate::model::{Row, RowData};

use super::types;

/// User-registered sort types, consulted before the built-in ones.
pub struct SortTypes<T> {
    user: HashMap<String, SortFn<T>>,
}

impl<T> SortTypes<T> {
    /// An empty user registry.
    pub fn new() -> Self {
        Self {
            user: HashMap::new(),
        }
    }

    /// Register (or replace) a named sort type.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync + 'static,
    {
        self.user.insert(name.into(), Arc::new(f));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Row<T>, &Row<T>, &str, bool) -> Ordering + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    /// Check if a user sort type is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.user.contains_key(name)
    }
}

impl<T: RowData + 'static> SortTypes<T> {
    /// Resolve the comparator of a column.
    ///
    /// Lookup order: the column's own function, then its sort type name in
    /// this registry, then in the built-in registry.
    pub fn resolve(&self, column: &Column<T>) -> Result<SortFn<T>, ConfigError> {
        match &column.sort_type {
            SortType::Custom(f) => Ok(Arc::clone(f)),
            SortType::Named(name) => self
                .user
                .get(name)
                .cloned()
                .or_else(|| types::builtin(name))
                .ok_or_else(|| ConfigError::unknown_sort_type(&column.id, name)),
        }
    }
}

impl<T> Default for SortTypes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SortTypes<T> {
    fn clone(&self) -> Self {
        Self {
            user: self.user.clone(),
        }
    }
}

impl<T> fmt::Debug for SortTypes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.user.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SortTypes").field("user", &names).finish()
    }
}
