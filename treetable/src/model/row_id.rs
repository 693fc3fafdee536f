//! Hierarchical row identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseRowIdError;

/// Path-based identifier of a row in the tree.
///
/// Each segment is the row's position among its siblings, starting from the
/// root level. The id `3.1.0` names the first child of the second child of the
/// fourth root row. Ordering is lexicographic by segment, so ancestors always
/// sort before their descendants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(Vec<usize>);

impl RowId {
    /// Id of a root-level row.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Builds an id from its segments. Returns `None` for an empty path.
    pub fn from_segments(segments: impl Into<Vec<usize>>) -> Option<Self> {
        let segments = segments.into();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Id of this row's child at `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(index);
        Self(segments)
    }

    /// Id of the parent row, `None` for root rows.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Number of segments (1 for root rows).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The path segments.
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Position among siblings (the last segment).
    pub fn sibling_index(&self) -> usize {
        self.0.last().copied().unwrap_or_default()
    }

    /// Returns true if `other` lives strictly below this row.
    pub fn is_ancestor_of(&self, other: &RowId) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }

    /// Returns true if this row lives strictly below `other`.
    pub fn is_descendant_of(&self, other: &RowId) -> bool {
        other.is_ancestor_of(self)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for RowId {
    type Err = ParseRowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRowIdError::Empty);
        }
        s.split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| ParseRowIdError::InvalidSegment {
                        input: s.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Serialize for RowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
