//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic cell value read from a row payload.
///
/// The built-in sort types compare rows through these values. Payloads that
/// only use custom comparators never need to produce one.
///
/// # Example
///
/// ```
/// use treetable::model::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::DateTime(_) => "datetime",
            Value::String(_) => "string",
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Timestamp view of the value, if it is a date.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Text rendering used by the string-based sort types. Null renders empty.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::DateTime(v) => v.to_rfc3339(),
            Value::String(v) => v.clone(),
        }
    }

    /// Plain comparison of two values.
    ///
    /// Numbers compare numerically across `Bool`, `Int` and `Float`; strings
    /// and dates compare naturally. Values of different kinds order by kind:
    /// null, numbers, dates, then strings. The result is a total order.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => self.kind_rank().cmp(&other.kind_rank()),
            },
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => 1,
            Value::DateTime(_) => 2,
            Value::String(_) => 3,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

// =============================================================================
// RowData
// =============================================================================

/// Access to a row payload from the sort and expansion engines.
///
/// Both methods have defaults, so an opaque payload sorted only by custom
/// comparators can implement the trait with an empty body.
pub trait RowData {
    /// The cell value of this row for `column_id`.
    fn value(&self, _column_id: &str) -> Value {
        Value::Null
    }

    /// Whether the payload itself asks for the row to be shown expanded,
    /// independent of the expanded set.
    fn is_manually_expanded(&self) -> bool {
        false
    }
}

impl RowData for HashMap<String, Value> {
    fn value(&self, column_id: &str) -> Value {
        self.get(column_id).cloned().unwrap_or(Value::Null)
    }
}

impl RowData for BTreeMap<String, Value> {
    fn value(&self, column_id: &str) -> Value {
        self.get(column_id).cloned().unwrap_or(Value::Null)
    }
}
