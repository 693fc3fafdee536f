//! Stable multi-key sort over the row tree.

use std::cmp::Ordering;

use crate::column::{ColumnSet, SortFn};
use crate::error::ConfigError;
use crate::model::{Row, RowData};

use super::{SortSpec, SortTypes};

/// The ordered tree and its depth-first flattening.
#[derive(Debug)]
pub struct SortedRows<T> {
    /// Ordered root rows; sub-rows are ordered recursively.
    pub rows: Vec<Row<T>>,
    /// Pre-order walk of `rows`: each row followed by its ordered descendants.
    pub flat_rows: Vec<Row<T>>,
}

impl<T> SortedRows<T> {
    /// Wrap an already ordered tree.
    pub fn unsorted(rows: &[Row<T>]) -> Self {
        Self {
            rows: rows.to_vec(),
            flat_rows: Row::flatten(rows),
        }
    }
}

impl<T> Clone for SortedRows<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            flat_rows: self.flat_rows.clone(),
        }
    }
}

impl<T> Default for SortedRows<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            flat_rows: Vec::new(),
        }
    }
}

/// Everything the sort needs besides the rows and the spec.
#[derive(Debug)]
pub struct SortContext<'a, T> {
    pub columns: &'a ColumnSet<T>,
    pub sort_types: &'a SortTypes<T>,
    /// Sorting happens outside this crate; rows pass through untouched.
    pub manual_sort_by: bool,
}

/// A resolved sort key.
struct SortKey<T> {
    column_id: String,
    sort_fn: SortFn<T>,
    desc: bool,
    ascending: bool,
}

/// Order `rows` by `spec`.
///
/// Descriptors for columns missing from the registry are dropped first. An
/// empty spec or manual sorting returns the input tree unchanged.
pub fn sort_rows<T: RowData + 'static>(
    rows: &[Row<T>],
    spec: &SortSpec,
    cx: &SortContext<'_, T>,
) -> Result<SortedRows<T>, ConfigError> {
    if cx.manual_sort_by || spec.is_empty() {
        return Ok(SortedRows::unsorted(rows));
    }

    let available = spec.retain(|d| {
        let known = cx.columns.contains(&d.id);
        if !known {
            log::debug!("[sort] ignoring sort on unknown column '{}'", d.id);
        }
        known
    });
    if available.is_empty() {
        return Ok(SortedRows::unsorted(rows));
    }

    let keys = available
        .iter()
        .map(|d| {
            let column = cx
                .columns
                .get(&d.id)
                .ok_or_else(|| ConfigError::unknown_column(&d.id))?;
            Ok(SortKey {
                column_id: d.id.clone(),
                sort_fn: cx.sort_types.resolve(column)?,
                desc: d.desc,
                ascending: if column.sort_inverted { d.desc } else { !d.desc },
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    log::trace!("[sort] sorting {} root rows by {} keys", rows.len(), keys.len());

    let mut flat_rows = Vec::new();
    let rows = sort_level(rows, &keys, &mut flat_rows);
    Ok(SortedRows { rows, flat_rows })
}

fn sort_level<T>(rows: &[Row<T>], keys: &[SortKey<T>], flat: &mut Vec<Row<T>>) -> Vec<Row<T>> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, keys));

    let mut out = Vec::with_capacity(sorted.len());
    for row in sorted {
        let slot = flat.len();
        flat.push(row.clone());

        // A lone child has nothing to be ordered against; its sub-tree is
        // kept as is.
        let row = if row.sub_rows.len() > 1 {
            let sub_rows = sort_level(&row.sub_rows, keys, flat);
            row.with_sub_rows(sub_rows)
        } else {
            flat.extend(Row::flatten(&row.sub_rows));
            row
        };

        flat[slot] = row.clone();
        out.push(row);
    }
    out
}

fn compare_rows<T>(a: &Row<T>, b: &Row<T>, keys: &[SortKey<T>]) -> Ordering {
    for key in keys {
        let ordering = (key.sort_fn)(a, b, &key.column_id, key.desc);
        if ordering != Ordering::Equal {
            return if key.ascending {
                ordering
            } else {
                ordering.reverse()
            };
        }
    }

    // Ties fall back to the original position, in the primary key's direction.
    let by_index = a.index.cmp(&b.index);
    match keys.first() {
        Some(primary) if !primary.ascending => by_index.reverse(),
        _ => by_index,
    }
}
