//! Sort descriptors and specifications.

use serde::{Deserialize, Serialize};

/// One sorted column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    /// Column id.
    pub id: String,
    /// Sort descending.
    #[serde(default)]
    pub desc: bool,
}

impl SortDescriptor {
    /// Creates an ascending descriptor.
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    /// Creates a descending descriptor.
    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }

    /// Creates a descriptor with an explicit direction.
    pub fn new(id: impl Into<String>, desc: bool) -> Self {
        Self {
            id: id.into(),
            desc,
        }
    }
}

/// Ordered list of sort descriptors. The first entry is the primary key.
///
/// A column appears at most once. Building a spec from a list that repeats a
/// column keeps the first occurrence.
///
/// # Example
///
/// ```
/// use treetable::sort::{SortDescriptor, SortSpec};
///
/// let spec = SortSpec::new(vec![
///     SortDescriptor::desc("revenue"),
///     SortDescriptor::asc("name"),
/// ]);
/// assert_eq!(spec.index_of("name"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SortDescriptor>", into = "Vec<SortDescriptor>")]
pub struct SortSpec(Vec<SortDescriptor>);

impl SortSpec {
    /// Build a spec, dropping later duplicates of a column.
    pub fn new(descriptors: Vec<SortDescriptor>) -> Self {
        let mut deduped: Vec<SortDescriptor> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if deduped.iter().any(|d| d.id == descriptor.id) {
                log::debug!(
                    "[sort] dropping duplicate descriptor for column '{}'",
                    descriptor.id
                );
                continue;
            }
            deduped.push(descriptor);
        }
        Self(deduped)
    }

    /// An empty spec (no sorting).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The descriptor for a column, if sorted.
    pub fn get(&self, id: &str) -> Option<&SortDescriptor> {
        self.0.iter().find(|d| d.id == id)
    }

    /// Priority position of a column, if sorted.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|d| d.id == id)
    }

    /// The descriptors in priority order.
    pub fn descriptors(&self) -> &[SortDescriptor] {
        &self.0
    }

    /// Iterate descriptors in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortDescriptor> {
        self.0.iter()
    }

    /// Number of sorted columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is sorted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Spec without the given column. Order of the rest is kept.
    pub fn without(&self, id: &str) -> Self {
        Self(self.0.iter().filter(|d| d.id != id).cloned().collect())
    }

    /// Spec restricted to descriptors accepted by `keep`.
    pub(crate) fn retain(&self, mut keep: impl FnMut(&SortDescriptor) -> bool) -> Self {
        Self(self.0.iter().filter(|d| keep(d)).cloned().collect())
    }
}

impl From<Vec<SortDescriptor>> for SortSpec {
    fn from(descriptors: Vec<SortDescriptor>) -> Self {
        Self::new(descriptors)
    }
}

impl From<SortSpec> for Vec<SortDescriptor> {
    fn from(spec: SortSpec) -> Self {
        spec.0
    }
}

impl FromIterator<SortDescriptor> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortDescriptor;
    type IntoIter = std::slice::Iter<'a, SortDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
