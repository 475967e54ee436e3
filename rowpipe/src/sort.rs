//! Stable single-column ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;
use crate::value::Value;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The grid's sort state: at most one active column.
///
/// `direction: None` means no active sort and the rows keep their original
/// order as received, whatever `key` holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Active sort column key.
    pub key: Option<String>,
    /// Active direction. `None` = unsorted.
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sort is in effect.
    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.direction.is_some()
    }

    /// Header-click semantics: the same column cycles
    /// none -> ascending -> descending -> none; a different column resets
    /// to ascending on that column.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = match self.direction {
                None => Some(SortDirection::Ascending),
                Some(SortDirection::Ascending) => Some(SortDirection::Descending),
                Some(SortDirection::Descending) => {
                    self.key = None;
                    None
                }
            };
        } else {
            self.key = Some(key.to_string());
            self.direction = Some(SortDirection::Ascending);
        }
    }
}

/// Returns `rows` ordered by the active sort column.
///
/// The input slice is never mutated; callers may keep the pre-sort
/// sequence. An inactive state or a sort key matching no column returns an
/// identity copy. The sort is stable: equal keys preserve their relative
/// input order. Null and missing cells sort after all defined values in
/// both directions.
pub fn sort_rows(columns: &[Column], rows: &[Row], state: &SortState) -> Vec<Row> {
    let mut out = rows.to_vec();
    let (Some(key), Some(direction)) = (state.key.as_deref(), state.direction) else {
        return out;
    };
    if !columns.iter().any(|c| c.key == key) {
        return out;
    }
    out.sort_by(|a, b| compare_cells(a.get(key), b.get(key), direction));
    out
}

/// Direction applies only between defined values; nulls stay last either
/// way.
fn compare_cells(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    match (defined(a), defined(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = a.cmp_defined(b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

fn defined(cell: Option<&Value>) -> Option<&Value> {
    cell.filter(|v| !v.is_null())
}
