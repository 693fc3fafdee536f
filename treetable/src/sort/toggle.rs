//! The sort toggle state machine.

use serde::{Deserialize, Serialize};

use crate::options::TableOptions;

use super::{SortDescriptor, SortSpec};

/// What a toggle did to the sort spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAction {
    /// The spec was replaced by this column alone.
    Replace,
    /// The column was appended as the lowest-priority key.
    Add,
    /// The column's direction was flipped or set in place.
    Toggle,
    /// The column was removed from the spec.
    Remove,
}

/// Options that shape toggle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleRules {
    pub disable_multi_sort: bool,
    pub disable_sort_remove: bool,
    pub disable_multi_remove: bool,
    /// Maximum number of columns kept by a multi-sort add. `None` = unbounded.
    pub max_multi_sort_col_count: Option<usize>,
}

impl From<&TableOptions> for ToggleRules {
    fn from(options: &TableOptions) -> Self {
        Self {
            disable_multi_sort: options.disable_multi_sort,
            disable_sort_remove: options.disable_sort_remove,
            disable_multi_remove: options.disable_multi_remove,
            max_multi_sort_col_count: options.max_multi_sort_col_count,
        }
    }
}

/// One toggle request against a column.
#[derive(Debug, Clone, Copy)]
pub struct SortToggle<'a> {
    pub column_id: &'a str,
    /// The column's first-click direction.
    pub sort_desc_first: bool,
    /// Explicit direction. `None` lets the state machine decide.
    pub desc: Option<bool>,
    /// Multi-sort requested (shift-click).
    pub multi: bool,
}

/// Decide which action a toggle performs on `spec`.
pub fn select_sort_action(
    spec: &SortSpec,
    toggle: &SortToggle<'_>,
    rules: &ToggleRules,
) -> SortAction {
    let existing = spec.get(toggle.column_id);
    let is_last = spec
        .index_of(toggle.column_id)
        .is_some_and(|index| index + 1 == spec.len());

    let action = if !rules.disable_multi_sort && toggle.multi {
        if existing.is_some() {
            SortAction::Toggle
        } else {
            SortAction::Add
        }
    } else if is_last {
        SortAction::Toggle
    } else {
        SortAction::Replace
    };

    // A toggle that has cycled past the column's starting direction removes it.
    if action == SortAction::Toggle
        && !rules.disable_sort_remove
        && toggle.desc.is_none()
        && (!toggle.multi || !rules.disable_multi_remove)
        && let Some(existing) = existing
        && existing.desc != toggle.sort_desc_first
    {
        return SortAction::Remove;
    }

    action
}

/// Apply one toggle to `spec`, returning the new spec and the action taken.
pub fn toggle_sort(
    spec: &SortSpec,
    toggle: &SortToggle<'_>,
    rules: &ToggleRules,
) -> (SortSpec, SortAction) {
    let action = select_sort_action(spec, toggle, rules);
    let first_desc = toggle.desc.unwrap_or(toggle.sort_desc_first);

    let next = match action {
        SortAction::Replace => {
            SortSpec::new(vec![SortDescriptor::new(toggle.column_id, first_desc)])
        }
        SortAction::Add => {
            let mut descriptors = spec.descriptors().to_vec();
            descriptors.push(SortDescriptor::new(toggle.column_id, first_desc));
            if let Some(max) = rules.max_multi_sort_col_count {
                let excess = descriptors.len().saturating_sub(max);
                descriptors.drain(..excess);
            }
            SortSpec::new(descriptors)
        }
        SortAction::Toggle => spec
            .iter()
            .map(|d| {
                if d.id == toggle.column_id {
                    SortDescriptor::new(&d.id, toggle.desc.unwrap_or(!d.desc))
                } else {
                    d.clone()
                }
            })
            .collect(),
        SortAction::Remove => spec.without(toggle.column_id),
    };

    log::debug!(
        "[sort] toggle '{}' (desc: {:?}, multi: {}) -> {:?}",
        toggle.column_id,
        toggle.desc,
        toggle.multi,
        action
    );

    (next, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(column_id: &str) -> SortToggle<'_> {
        SortToggle {
            column_id,
            sort_desc_first: false,
            desc: None,
            multi: false,
        }
    }

    fn multi(column_id: &str) -> SortToggle<'_> {
        SortToggle {
            multi: true,
            ..plain(column_id)
        }
    }

    #[test]
    fn test_replace_when_not_last() {
        let spec = SortSpec::new(vec![SortDescriptor::asc("a"), SortDescriptor::asc("b")]);
        let (next, action) = toggle_sort(&spec, &plain("a"), &ToggleRules::default());
        assert_eq!(action, SortAction::Replace);
        assert_eq!(next.descriptors(), &[SortDescriptor::asc("a")]);
    }

    #[test]
    fn test_toggle_last_in_place() {
        let spec = SortSpec::new(vec![SortDescriptor::asc("a"), SortDescriptor::asc("b")]);
        let (next, action) = toggle_sort(&spec, &plain("b"), &ToggleRules::default());
        assert_eq!(action, SortAction::Toggle);
        assert_eq!(
            next.descriptors(),
            &[SortDescriptor::asc("a"), SortDescriptor::desc("b")]
        );
    }

    #[test]
    fn test_desc_first_cycle() {
        let toggle = SortToggle {
            sort_desc_first: true,
            ..plain("a")
        };
        let rules = ToggleRules::default();

        let (spec, _) = toggle_sort(&SortSpec::empty(), &toggle, &rules);
        assert_eq!(spec.descriptors(), &[SortDescriptor::desc("a")]);
        let (spec, _) = toggle_sort(&spec, &toggle, &rules);
        assert_eq!(spec.descriptors(), &[SortDescriptor::asc("a")]);
        let (spec, action) = toggle_sort(&spec, &toggle, &rules);
        assert_eq!(action, SortAction::Remove);
        assert!(spec.is_empty());
    }

    #[test]
    fn test_explicit_direction_never_removes() {
        let spec = SortSpec::new(vec![SortDescriptor::desc("a")]);
        let toggle = SortToggle {
            desc: Some(true),
            ..plain("a")
        };
        let (next, action) = toggle_sort(&spec, &toggle, &ToggleRules::default());
        assert_eq!(action, SortAction::Toggle);
        assert_eq!(next.descriptors(), &[SortDescriptor::desc("a")]);
    }

    #[test]
    fn test_disable_sort_remove_keeps_flipping() {
        let rules = ToggleRules {
            disable_sort_remove: true,
            ..Default::default()
        };
        let spec = SortSpec::new(vec![SortDescriptor::desc("a")]);
        let (next, action) = toggle_sort(&spec, &plain("a"), &rules);
        assert_eq!(action, SortAction::Toggle);
        assert_eq!(next.descriptors(), &[SortDescriptor::asc("a")]);
    }

    #[test]
    fn test_disable_multi_remove_only_affects_multi() {
        let rules = ToggleRules {
            disable_multi_remove: true,
            ..Default::default()
        };
        let spec = SortSpec::new(vec![SortDescriptor::asc("a"), SortDescriptor::desc("b")]);

        let (next, action) = toggle_sort(&spec, &multi("b"), &rules);
        assert_eq!(action, SortAction::Toggle);
        assert_eq!(next.get("b"), Some(&SortDescriptor::asc("b")));

        let (next, action) = toggle_sort(&spec, &plain("b"), &rules);
        assert_eq!(action, SortAction::Remove);
        assert_eq!(next.descriptors(), &[SortDescriptor::asc("a")]);
    }

    #[test]
    fn test_multi_ignored_when_disabled() {
        let rules = ToggleRules {
            disable_multi_sort: true,
            ..Default::default()
        };
        let spec = SortSpec::new(vec![SortDescriptor::asc("a")]);
        let (next, action) = toggle_sort(&spec, &multi("b"), &rules);
        assert_eq!(action, SortAction::Replace);
        assert_eq!(next.descriptors(), &[SortDescriptor::asc("b")]);
    }

    #[test]
    fn test_multi_toggle_of_middle_column_keeps_order() {
        let spec = SortSpec::new(vec![
            SortDescriptor::asc("a"),
            SortDescriptor::asc("b"),
            SortDescriptor::asc("c"),
        ]);
        let (next, action) = toggle_sort(&spec, &multi("b"), &ToggleRules::default());
        assert_eq!(action, SortAction::Toggle);
        assert_eq!(
            next.descriptors(),
            &[
                SortDescriptor::asc("a"),
                SortDescriptor::desc("b"),
                SortDescriptor::asc("c"),
            ]
        );
    }
}
