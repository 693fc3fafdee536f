//! Row tree nodes.

use std::sync::Arc;

use super::RowId;

/// A node in the row tree.
///
/// The payload and the sub-row list are reference counted: cloning a row, or
/// producing a reordered tree, shares every payload and every untouched
/// sub-tree with the input.
#[derive(Debug)]
pub struct Row<T> {
    /// Path id reflecting the row's position in the unsorted tree.
    pub id: RowId,
    /// Original position among siblings, used as the sort tie-break.
    pub index: usize,
    /// Opaque payload. Never mutated by the engines.
    pub original: Arc<T>,
    /// Child rows, in their current order.
    pub sub_rows: Arc<[Row<T>]>,
}

impl<T> Row<T> {
    /// Create a row without children.
    pub fn leaf(id: RowId, index: usize, original: T) -> Self {
        Self {
            id,
            index,
            original: Arc::new(original),
            sub_rows: Arc::from(Vec::new()),
        }
    }

    /// Create a row with children.
    pub fn branch(id: RowId, index: usize, original: T, sub_rows: Vec<Row<T>>) -> Self {
        Self {
            id,
            index,
            original: Arc::new(original),
            sub_rows: Arc::from(sub_rows),
        }
    }

    /// Check if this row has children.
    pub fn has_sub_rows(&self) -> bool {
        !self.sub_rows.is_empty()
    }

    /// Copy of this row with a new child list, sharing the payload.
    pub(crate) fn with_sub_rows(&self, sub_rows: Vec<Row<T>>) -> Self {
        Self {
            id: self.id.clone(),
            index: self.index,
            original: Arc::clone(&self.original),
            sub_rows: Arc::from(sub_rows),
        }
    }

    /// Depth-first pre-order walk of the whole tree: each row followed by all
    /// of its descendants.
    pub fn flatten(rows: &[Row<T>]) -> Vec<Row<T>> {
        let mut out = Vec::new();
        Self::flatten_into(rows, &mut out);
        out
    }

    fn flatten_into(rows: &[Row<T>], out: &mut Vec<Row<T>>) {
        for row in rows {
            out.push(row.clone());
            Self::flatten_into(&row.sub_rows, out);
        }
    }

    /// Find a row by id anywhere in the tree.
    pub fn find<'a>(rows: &'a [Row<T>], id: &RowId) -> Option<&'a Row<T>> {
        for row in rows {
            if &row.id == id {
                return Some(row);
            }
            if row.id.is_ancestor_of(id)
                && let Some(found) = Self::find(&row.sub_rows, id)
            {
                return Some(found);
            }
        }
        None
    }
}

impl<T> Clone for Row<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            index: self.index,
            original: Arc::clone(&self.original),
            sub_rows: Arc::clone(&self.sub_rows),
        }
    }
}
