mod common;

use common::*;
use serde_json::json;
use treetable::{
    Action, ActionOutcome, Column, ConfigError, ExpandedSet, SortAction, SortDescriptor,
    SortSpec, Table, TableOptions, TableState,
};

fn sample_rows() -> Vec<treetable::Row<Item>> {
    build(vec![
        node("b", 2, vec![leaf("b1", 4), leaf("b0", 1)]),
        leaf("a", 3),
    ])
}

fn sample_table(options: TableOptions) -> Table<Item> {
    Table::with_rows(columns(), sample_rows(), options).unwrap()
}

// ============================================================================
// Auto reset
// ============================================================================

#[test]
fn test_set_rows_resets_state() {
    init_logger();
    let mut table = sample_table(TableOptions::default());
    table.toggle_sort("name", None, false).unwrap();
    table.toggle_expanded(&id("0"), Some(true)).unwrap();

    table.set_rows(sample_rows()).unwrap();

    assert!(table.sort_by().is_empty());
    assert!(table.expanded().is_empty());
    assert_eq!(names(table.ordered_rows()), vec!["b", "a"]);
}

#[test]
fn test_set_rows_resets_to_initial_state() {
    let initial = TableState::new().with_sort_by(vec![SortDescriptor::asc("amount")]);
    let mut table = sample_table(TableOptions::default().with_initial_state(initial.clone()));
    assert_eq!(table.state(), &initial);

    table.toggle_sort("name", None, false).unwrap();
    table.set_rows(sample_rows()).unwrap();
    assert_eq!(table.sort_by(), &initial.sort_by);
    assert_eq!(names(table.ordered_rows()), vec!["b", "a"]);
}

#[test]
fn test_auto_reset_disabled_keeps_state() {
    let options = TableOptions::default()
        .with_auto_reset_sort_by(false)
        .with_auto_reset_expanded(false);
    let mut table = sample_table(options);
    table.toggle_sort("name", None, false).unwrap();
    table.toggle_expanded(&id("0"), Some(true)).unwrap();

    table.set_rows(sample_rows()).unwrap();

    assert_eq!(table.sort_by().len(), 1);
    assert!(table.expanded().contains(&id("0")));
    assert_eq!(names(table.ordered_rows()), vec!["a", "b"]);
}

#[test]
fn test_manual_sort_is_never_reset() {
    let mut table = sample_table(TableOptions::default().with_manual_sort_by(true));
    table.toggle_sort("name", None, false).unwrap();
    table.toggle_expanded(&id("0"), Some(true)).unwrap();

    table.set_rows(sample_rows()).unwrap();

    assert_eq!(table.sort_by().len(), 1);
    assert!(table.expanded().is_empty());
    // Manual sorting passes rows through in input order.
    assert_eq!(names(table.ordered_rows()), vec!["b", "a"]);
}

#[test]
fn test_row_ids_track_new_rows() {
    let mut table = sample_table(TableOptions::default());
    assert_eq!(table.row_ids().len(), 4);
    assert!(table.find_row(&id("0.1")).is_some());

    table.set_rows(build(vec![leaf("x", 1)])).unwrap();
    assert_eq!(table.row_ids(), &[id("0")]);
    assert!(table.find_row(&id("0.1")).is_none());
}

// ============================================================================
// Reset actions
// ============================================================================

#[test]
fn test_reset_actions_restore_initial_state() {
    let expanded: ExpandedSet = vec![id("0")].into_iter().collect();
    let initial = TableState::new()
        .with_sort_by(vec![SortDescriptor::desc("amount")])
        .with_expanded(expanded);
    let mut table = sample_table(TableOptions::default().with_initial_state(initial.clone()));

    table.toggle_sort("name", None, true).unwrap();
    table.toggle_all_expanded(Some(false)).unwrap();
    assert_ne!(table.state(), &initial);

    table.reset_sort().unwrap();
    table.reset_expanded().unwrap();
    assert_eq!(table.state(), &initial);
    assert_eq!(visible_ids(&table), vec!["1", "0", "0.0", "0.1"]);
}

// ============================================================================
// Column status
// ============================================================================

#[test]
fn test_column_status_reflects_sort() {
    let mut table = sample_table(TableOptions::default());
    table.toggle_sort("name", None, false).unwrap();
    table.toggle_sort("amount", Some(true), true).unwrap();

    let amount = table.column_status("amount").unwrap();
    assert!(amount.can_sort);
    assert!(amount.is_sorted);
    assert_eq!(amount.sorted_index, Some(1));
    assert_eq!(amount.is_sorted_desc, Some(true));

    let rank = table.column_status("rank").unwrap();
    assert!(!rank.is_sorted);
    assert_eq!(rank.sorted_index, None);
    assert_eq!(rank.is_sorted_desc, None);

    assert!(table.column_status("missing").is_none());
}

#[test]
fn test_column_can_sort_rules() {
    let columns = vec![
        Column::new("name"),
        Column::new("amount").disable_sort_by(true),
        Column::display("actions"),
        Column::display("tags").can_sort(true),
    ];
    let table: Table<Item> = Table::new(columns.clone(), TableOptions::default()).unwrap();
    assert!(table.column_status("name").unwrap().can_sort);
    assert!(!table.column_status("amount").unwrap().can_sort);
    assert!(!table.column_status("actions").unwrap().can_sort);
    assert!(table.column_status("tags").unwrap().can_sort);

    let options = TableOptions::default()
        .with_disable_sort_by(true)
        .with_default_can_sort(true);
    let table: Table<Item> = Table::new(columns, options).unwrap();
    assert!(!table.column_status("name").unwrap().can_sort);
    assert!(table.column_status("actions").unwrap().can_sort);
}

// ============================================================================
// Transactions
// ============================================================================

#[test]
fn test_failed_action_changes_nothing() {
    let mut table = sample_table(TableOptions::default());
    table.toggle_sort("amount", None, false).unwrap();
    let state = table.state().clone();
    let visible = visible_ids(&table);

    let result = table.dispatch(Action::ToggleSort {
        column_id: "ghost".to_string(),
        desc: None,
        multi: false,
    });

    assert_eq!(result, Err(ConfigError::unknown_column("ghost")));
    assert_eq!(table.state(), &state);
    assert_eq!(visible_ids(&table), visible);
}

#[test]
fn test_same_inputs_same_outputs() {
    let mut table = sample_table(TableOptions::default());
    table.toggle_sort("amount", None, false).unwrap();
    table.toggle_all_expanded(Some(true)).unwrap();
    let before = visible_ids(&table);

    table.set_sort(table.sort_by().clone()).unwrap();
    table.toggle_expanded(&id("0"), Some(true)).unwrap();

    assert_eq!(visible_ids(&table), before);
    assert_eq!(before, vec!["0", "0.1", "0.0", "1"]);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_dispatch_json_actions() {
    let mut table = sample_table(TableOptions::default());

    let action: Action =
        serde_json::from_value(json!({ "type": "toggle_sort", "column_id": "amount" })).unwrap();
    assert_eq!(action.action_type(), "toggle_sort");
    assert_eq!(
        table.dispatch(action).unwrap(),
        ActionOutcome::Sort(SortAction::Replace)
    );

    let action: Action =
        serde_json::from_value(json!({ "type": "toggle_expanded", "id": "0" })).unwrap();
    assert_eq!(table.dispatch(action).unwrap(), ActionOutcome::Expanded(true));

    assert_eq!(visible_ids(&table), vec!["0", "0.1", "0.0", "1"]);
}

#[test]
fn test_state_json_shape() {
    let mut table = sample_table(TableOptions::default());
    table.toggle_sort("amount", Some(true), false).unwrap();
    table.toggle_expanded(&id("0.1"), Some(true)).unwrap();
    table.toggle_expanded(&id("0"), Some(true)).unwrap();

    let value = serde_json::to_value(table.state()).unwrap();
    assert_eq!(
        value,
        json!({
            "sort_by": [{ "id": "amount", "desc": true }],
            "expanded": ["0", "0.1"],
        })
    );

    let parsed: TableState = serde_json::from_value(value).unwrap();
    assert_eq!(&parsed, table.state());
}

#[test]
fn test_options_from_partial_json() {
    let options: TableOptions = serde_json::from_value(json!({
        "max_multi_sort_col_count": 2,
        "initial_state": { "sort_by": [{ "id": "name" }] },
    }))
    .unwrap();

    assert_eq!(options.max_multi_sort_col_count, Some(2));
    assert!(options.auto_reset_sort_by);
    assert_eq!(
        options.initial_state.sort_by,
        SortSpec::from(vec![SortDescriptor::asc("name")])
    );
}
