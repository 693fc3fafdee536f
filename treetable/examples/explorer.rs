// Example: Explorer
//
// Walks a small file tree through a scripted session:
// - multi-column sort with a custom sort type
// - expanding and collapsing folders
// - JSON actions and the resulting state

use std::collections::HashMap;
use std::fs::File;

use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};
use treetable::{Action, Column, Row, RowId, Table, TableOptions, Value};

type Entry = HashMap<String, Value>;

fn entry(name: &str, size: i64, modified: &str) -> Entry {
    HashMap::from([
        ("name".to_string(), Value::from(name)),
        ("size".to_string(), Value::from(size)),
        ("modified".to_string(), Value::String(modified.to_string())),
    ])
}

fn tree() -> Vec<Row<Entry>> {
    let src = RowId::root(0);
    let docs = RowId::root(1);
    vec![
        Row::branch(
            src.clone(),
            0,
            entry("src", 0, "2024-03-01T10:00:00Z"),
            vec![
                Row::leaf(src.child(0), 0, entry("main.rs", 1200, "2024-03-04T09:30:00Z")),
                Row::leaf(src.child(1), 1, entry("lib10.rs", 800, "2024-02-11T16:00:00Z")),
                Row::leaf(src.child(2), 2, entry("lib2.rs", 2400, "2024-03-02T08:15:00Z")),
            ],
        ),
        Row::branch(
            docs.clone(),
            1,
            entry("docs", 0, "2024-01-20T12:00:00Z"),
            vec![Row::leaf(docs.child(0), 0, entry("guide.md", 5300, "2024-01-20T12:00:00Z"))],
        ),
        Row::leaf(RowId::root(2), 2, entry("Cargo.toml", 400, "2024-03-05T11:45:00Z")),
    ]
}

fn print(table: &Table<Entry>, title: &str) {
    println!("== {} (sort: {:?})", title, table.sort_by().descriptors());
    for visible in table.visible_rows() {
        let marker = match (visible.can_expand, visible.is_expanded) {
            (false, _) => " ",
            (true, true) => "v",
            (true, false) => ">",
        };
        println!(
            "{}{} {:<12} {:>6}",
            "  ".repeat(visible.depth),
            marker,
            visible.row.original["name"].to_text(),
            visible.row.original["size"].to_text(),
        );
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("explorer.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("name"),
        Column::new("size").sort_type("number").sort_desc_first(true),
        Column::new("modified").sort_type("newest"),
        Column::display("actions"),
    ];
    let mut table = Table::with_rows(columns, tree(), TableOptions::default())?;
    table.register_sort_type("newest", |a, b, column_id, _| {
        let a = a.original[column_id].to_text();
        let b = b.original[column_id].to_text();
        a.cmp(&b)
    })?;
    print(&table, "initial");

    table.toggle_all_expanded(Some(true))?;
    table.toggle_sort("name", None, false)?;
    print(&table, "expanded, by name");

    table.toggle_sort("size", None, false)?;
    print(&table, "by size, largest first");

    table.toggle_expanded(&RowId::root(0), None)?;
    table.toggle_sort("modified", None, true)?;
    print(&table, "src collapsed, by size then modified");

    let script = json!([
        { "type": "reset_sort" },
        { "type": "toggle_sort", "column_id": "modified", "desc": true },
        { "type": "toggle_expanded", "id": "0", "value": true },
    ]);
    let actions: Vec<Action> = serde_json::from_value(script)?;
    for action in actions {
        let outcome = table.dispatch(action)?;
        println!("applied: {:?}", outcome);
    }
    print(&table, "scripted");

    println!("state: {}", serde_json::to_string_pretty(table.state())?);
    println!("max expanded depth: {}", table.max_expanded_depth());
    Ok(())
}
