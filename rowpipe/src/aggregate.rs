//! Per-column aggregates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;

/// Aggregate kind a column can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregate {
    /// Arithmetic total of the column's numeric values.
    Sum,
    /// Arithmetic mean of the column's numeric values.
    Avg,
    /// Count of numeric values in the column.
    Count,
}

/// A computed aggregate for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AggregateValue {
    Sum(f64),
    Avg(f64),
    Count(usize),
}

/// Computes every declared column aggregate over `rows`.
///
/// Non-numeric cells (strings, booleans, nulls, missing fields) are
/// excluded from the computation, not treated as zero. An empty numeric
/// set yields `Sum(0.0)`, `Avg(0.0)` (never a division by zero), or
/// `Count(0)`.
///
/// The orchestrator feeds this the post-filter, pre-pagination row set:
/// aggregates reflect everything the user has filtered down to, not just
/// the current page.
pub fn aggregate_rows(columns: &[Column], rows: &[Row]) -> HashMap<String, AggregateValue> {
    let mut out = HashMap::new();
    for column in columns {
        let Some(aggregate) = column.aggregate else {
            continue;
        };
        let numeric: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.get(&column.key).and_then(|v| v.as_f64()))
            .collect();
        let value = match aggregate {
            Aggregate::Sum => AggregateValue::Sum(numeric.iter().sum()),
            Aggregate::Avg => {
                let sum: f64 = numeric.iter().sum();
                if numeric.is_empty() {
                    AggregateValue::Avg(0.0)
                } else {
                    AggregateValue::Avg(sum / numeric.len() as f64)
                }
            }
            Aggregate::Count => AggregateValue::Count(numeric.len()),
        };
        out.insert(column.key.clone(), value);
    }
    out
}
