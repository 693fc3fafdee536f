//! The set of expanded row ids.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::RowId;

/// Row ids currently expanded. Absent ids are collapsed.
///
/// Ids that no longer exist in the tree are kept and ignored by the walk, so
/// expansion state survives a dataset refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandedSet(BTreeSet<RowId>);

impl ExpandedSet {
    /// An empty set (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row is expanded.
    pub fn contains(&self, id: &RowId) -> bool {
        self.0.contains(id)
    }

    /// Expand a row. Returns true if it was collapsed.
    pub fn insert(&mut self, id: RowId) -> bool {
        self.0.insert(id)
    }

    /// Collapse a row. Returns true if it was expanded.
    pub fn remove(&mut self, id: &RowId) -> bool {
        self.0.remove(id)
    }

    /// Set a row's membership to `value`, or flip it when `None`.
    ///
    /// Returns the resulting value, including when nothing changed.
    pub fn toggle(&mut self, id: &RowId, value: Option<bool>) -> bool {
        let value = value.unwrap_or(!self.contains(id));
        if value {
            self.0.insert(id.clone());
        } else {
            self.0.remove(id);
        }
        value
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of expanded ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate expanded ids in path order.
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.0.iter()
    }

    /// Greatest number of path segments over the expanded ids, 0 when empty.
    ///
    /// Derived from the set alone, not from the tree.
    pub fn max_depth(&self) -> usize {
        self.0.iter().map(RowId::depth).max().unwrap_or(0)
    }

    /// True only if `known` is non-empty and every id in it is expanded.
    pub fn is_all_expanded<'a>(&self, known: impl IntoIterator<Item = &'a RowId>) -> bool {
        let mut known = known.into_iter().peekable();
        if known.peek().is_none() || self.is_empty() {
            return false;
        }
        known.all(|id| self.contains(id))
    }
}

impl FromIterator<RowId> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExpandedSet {
    type Item = &'a RowId;
    type IntoIter = std::collections::btree_set::Iter<'a, RowId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
