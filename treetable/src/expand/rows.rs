//! Depth-first visibility walk.

use crate::model::{Row, RowData};

use super::ExpandedSet;

/// A row in the visible list, with its position in the tree.
#[derive(Debug)]
pub struct VisibleRow<T> {
    /// The row itself.
    pub row: Row<T>,
    /// Depth in the walk (0 = root).
    pub depth: usize,
    /// Whether the row is currently expanded.
    pub is_expanded: bool,
    /// Whether the row has sub-rows to expand.
    pub can_expand: bool,
}

impl<T> Clone for VisibleRow<T> {
    fn clone(&self) -> Self {
        Self {
            row: self.row.clone(),
            depth: self.depth,
            is_expanded: self.is_expanded,
            can_expand: self.can_expand,
        }
    }
}

/// Options of the visibility walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Hide collapsed sub-trees. When false the ordered roots pass through.
    pub paginate_expanded_rows: bool,
    /// Emit the children of expanded rows. When false only roots are emitted.
    pub expand_sub_rows: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            paginate_expanded_rows: true,
            expand_sub_rows: true,
        }
    }
}

/// Walk the ordered tree and emit the rows a user can see.
///
/// Every root is emitted. A row's children are visited only while the row is
/// expanded, so collapsing a row hides its whole sub-tree whatever the state
/// of its descendants.
pub fn expand_rows<T: RowData>(
    rows: &[Row<T>],
    expanded: &ExpandedSet,
    options: ExpandOptions,
) -> Vec<VisibleRow<T>> {
    let mut out = Vec::with_capacity(rows.len());

    if !options.paginate_expanded_rows {
        out.extend(rows.iter().map(|row| visible(row, expanded, 0)));
        return out;
    }

    collect_visible(rows, expanded, options.expand_sub_rows, 0, &mut out);
    log::trace!("[expand] {} visible rows from {} roots", out.len(), rows.len());
    out
}

fn visible<T: RowData>(row: &Row<T>, expanded: &ExpandedSet, depth: usize) -> VisibleRow<T> {
    VisibleRow {
        row: row.clone(),
        depth,
        is_expanded: is_expanded(row, expanded),
        can_expand: row.has_sub_rows(),
    }
}

fn is_expanded<T: RowData>(row: &Row<T>, expanded: &ExpandedSet) -> bool {
    row.original.is_manually_expanded() || expanded.contains(&row.id)
}

fn collect_visible<T: RowData>(
    rows: &[Row<T>],
    expanded: &ExpandedSet,
    expand_sub_rows: bool,
    depth: usize,
    out: &mut Vec<VisibleRow<T>>,
) {
    for row in rows {
        let entry = visible(row, expanded, depth);
        let descend = entry.is_expanded && entry.can_expand && expand_sub_rows;
        out.push(entry);

        if descend {
            collect_visible(&row.sub_rows, expanded, expand_sub_rows, depth + 1, out);
        }
    }
}
