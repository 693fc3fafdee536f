//! Built-in sort types.
//!
//! Every comparator reads the column's [`Value`] from both rows and answers in
//! ascending sense.

use std::cmp::Ordering;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::column::SortFn;
use crate::model::{Row, RowData, Value};

pub const ALPHANUMERIC: &str = "alphanumeric";
pub const DATETIME: &str = "datetime";
pub const BASIC: &str = "basic";
pub const STRING: &str = "string";
pub const NUMBER: &str = "number";

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern"));
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("non-numeric pattern"));

/// Look up a built-in comparator by name.
pub fn builtin<T: RowData + 'static>(name: &str) -> Option<SortFn<T>> {
    let f: fn(&Row<T>, &Row<T>, &str, bool) -> Ordering = match name {
        ALPHANUMERIC => alphanumeric::<T>,
        DATETIME => datetime::<T>,
        BASIC => basic::<T>,
        STRING => string::<T>,
        NUMBER => number::<T>,
        _ => return None,
    };
    Some(Arc::new(f))
}

fn values<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str) -> (Value, Value) {
    (a.original.value(column_id), b.original.value(column_id))
}

/// Natural ordering: digit runs compare numerically, text runs compare as
/// strings, and a text run sorts before a digit run.
pub fn alphanumeric<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str, _desc: bool) -> Ordering {
    let (a, b) = values(a, b, column_id);
    compare_alphanumeric(&a.to_text(), &b.to_text())
}

/// Chronological ordering of date values. Non-dates sort first.
pub fn datetime<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str, _desc: bool) -> Ordering {
    let (a, b) = values(a, b, column_id);
    a.as_datetime().cmp(&b.as_datetime())
}

/// Plain value comparison.
pub fn basic<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str, _desc: bool) -> Ordering {
    let (a, b) = values(a, b, column_id);
    a.compare(&b)
}

/// Character-wise, case-insensitive first, then case-sensitive, then by
/// length.
pub fn string<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str, _desc: bool) -> Ordering {
    let (a, b) = values(a, b, column_id);
    compare_string(&a.to_text(), &b.to_text())
}

/// Numeric ordering after stripping everything but digits and dots.
/// Unparseable values sort after every number.
pub fn number<T: RowData>(a: &Row<T>, b: &Row<T>, column_id: &str, _desc: bool) -> Ordering {
    let (a, b) = values(a, b, column_id);
    to_number(&a).total_cmp(&to_number(&b))
}

fn to_number(value: &Value) -> f64 {
    if let Some(n) = value.as_f64() {
        return n;
    }
    let cleaned = NON_NUMERIC.replace_all(&value.to_text(), "").into_owned();
    if cleaned.is_empty() {
        0.0
    } else {
        cleaned.parse().unwrap_or(f64::NAN)
    }
}

/// Split into alternating text and digit chunks, dropping empty ones.
fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in DIGIT_RUN.find_iter(s) {
        if m.start() > last {
            out.push(&s[last..m.start()]);
        }
        out.push(m.as_str());
        last = m.end();
    }
    if last < s.len() {
        out.push(&s[last..]);
    }
    out
}

fn is_digit_run(chunk: &str) -> bool {
    chunk.bytes().all(|b| b.is_ascii_digit())
}

fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let a = chunks(a);
    let b = chunks(b);

    for (aa, bb) in a.iter().zip(b.iter()) {
        let ordering = match (is_digit_run(aa), is_digit_run(bb)) {
            (false, false) => aa.cmp(bb),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => {
                // Digit runs can exceed any integer type.
                let an: f64 = aa.parse().unwrap_or(0.0);
                let bn: f64 = bb.parse().unwrap_or(0.0);
                an.total_cmp(&bn)
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a.len().cmp(&b.len())
}

fn compare_string(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    for (aa, bb) in a.iter().zip(b.iter()) {
        let ordering = aa
            .to_lowercase()
            .cmp(bb.to_lowercase())
            .then_with(|| aa.cmp(bb));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_orders_digit_runs_numerically() {
        assert_eq!(compare_alphanumeric("item2", "item10"), Ordering::Less);
        assert_eq!(compare_alphanumeric("10", "9"), Ordering::Greater);
        assert_eq!(compare_alphanumeric("a1b", "a1b"), Ordering::Equal);
    }

    #[test]
    fn test_alphanumeric_text_before_digits() {
        assert_eq!(compare_alphanumeric("abc", "123"), Ordering::Less);
        assert_eq!(compare_alphanumeric("1", "x"), Ordering::Greater);
    }

    #[test]
    fn test_alphanumeric_shorter_prefix_first() {
        assert_eq!(compare_alphanumeric("v1", "v1.2"), Ordering::Less);
        assert_eq!(compare_alphanumeric("", "a"), Ordering::Less);
    }

    #[test]
    fn test_chunks() {
        assert_eq!(chunks("ab12cd3"), vec!["ab", "12", "cd", "3"]);
        assert_eq!(chunks("42"), vec!["42"]);
        assert!(chunks("").is_empty());
    }

    #[test]
    fn test_string_is_case_insensitive_first() {
        assert_eq!(compare_string("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_string("B", "b"), Ordering::Less);
        assert_eq!(compare_string("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_number_strips_formatting() {
        assert_eq!(to_number(&Value::from("$1,200.50")), 1200.5);
        assert_eq!(to_number(&Value::from("")), 0.0);
        assert_eq!(to_number(&Value::from(7i64)), 7.0);
        assert!(to_number(&Value::from("1.2.3")).is_nan());
    }

    #[test]
    fn test_builtin_lookup() {
        use std::collections::HashMap;
        type Data = HashMap<String, Value>;

        assert!(builtin::<Data>(ALPHANUMERIC).is_some());
        assert!(builtin::<Data>(NUMBER).is_some());
        assert!(builtin::<Data>("fuzzy").is_none());
    }
}
