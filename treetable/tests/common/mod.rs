#![allow(dead_code)]

use simplelog::{Config, LevelFilter, TestLogger};
use treetable::{Column, Row, RowData, RowId, Table, Value};

/// Payload used across the integration tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub amount: i64,
}

impl RowData for Item {
    fn value(&self, column_id: &str) -> Value {
        match column_id {
            "name" => Value::from(self.name.as_str()),
            "amount" => Value::from(self.amount),
            _ => Value::Null,
        }
    }
}

pub fn item(name: &str, amount: i64) -> Item {
    Item {
        name: name.to_string(),
        amount,
    }
}

/// Shape of a test tree before ids are assigned.
pub struct Node {
    pub name: &'static str,
    pub amount: i64,
    pub children: Vec<Node>,
}

pub fn leaf(name: &'static str, amount: i64) -> Node {
    node(name, amount, vec![])
}

pub fn node(name: &'static str, amount: i64, children: Vec<Node>) -> Node {
    Node {
        name,
        amount,
        children,
    }
}

/// Build rows with path ids and sibling indices from their position.
pub fn build(nodes: Vec<Node>) -> Vec<Row<Item>> {
    build_level(nodes, None)
}

fn build_level(nodes: Vec<Node>, parent: Option<&RowId>) -> Vec<Row<Item>> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(index, n)| {
            let id = parent.map_or_else(|| RowId::root(index), |p| p.child(index));
            let children = build_level(n.children, Some(&id));
            let item = Item {
                name: n.name.to_string(),
                amount: n.amount,
            };
            Row::branch(id, index, item, children)
        })
        .collect()
}

pub fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("name"),
        Column::new("amount").sort_type("number"),
        Column::new("rank").sort_type("basic"),
    ]
}

pub fn id(s: &str) -> RowId {
    s.parse().unwrap()
}

pub fn names(rows: &[Row<Item>]) -> Vec<String> {
    rows.iter().map(|r| r.original.name.clone()).collect()
}

pub fn ids(rows: &[Row<Item>]) -> Vec<String> {
    rows.iter().map(|r| r.id.to_string()).collect()
}

pub fn visible_ids(table: &Table<Item>) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|v| v.row.id.to_string())
        .collect()
}

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
