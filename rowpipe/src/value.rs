//! Cell values for grid rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Rows hold cells as an open mapping from column key to `Value`. The grid
/// never interprets a value beyond the three views defined here: a numeric
/// view for aggregation, a display string for filtering and grouping, and
/// an ordering for sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty cell.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value.
    ///
    /// Only `Int` and `Float` are numeric; booleans and numeric-looking
    /// strings are not. Aggregation excludes everything else rather than
    /// coercing it to zero.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The string rendition used by filtering, grouping, and global search.
    ///
    /// `Null` renders as the empty string.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    /// Total order between two defined (non-null) values.
    ///
    /// Numeric pairs compare by IEEE total ordering (NaN has a fixed
    /// position after all other numbers). Numbers order before
    /// non-numbers, so a column mixing numeric and string cells still has
    /// a total order and a stable sort result. Everything else compares
    /// by display string, case-insensitively, with a case-sensitive
    /// tiebreak. Null handling (nulls always sort last, regardless of
    /// direction) lives in the sort unit.
    pub fn cmp_defined(&self, other: &Value) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => {
                let a = self.to_display_string();
                let b = other.to_display_string();
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(&b))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
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

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
