//! Per-column and global substring filtering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;

/// Filter inputs: per-column filter texts plus one global search string.
///
/// An absent or empty per-column entry imposes no constraint on that
/// column. `enabled = false` short-circuits the per-column pass entirely;
/// the global search still applies when non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Column key -> filter text.
    pub columns: HashMap<String, String>,
    /// Global search string, matched against every column.
    pub search: String,
    /// Whether the per-column pass runs.
    pub enabled: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            columns: HashMap::new(),
            search: String::new(),
            enabled: true,
        }
    }
}

impl FilterState {
    /// No filters, per-column pass enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one column's filter text; empty text removes the entry.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        if text.is_empty() {
            self.columns.remove(&key);
        } else {
            self.columns.insert(key, text);
        }
    }

    /// Whether any constraint is currently in effect.
    pub fn is_active(&self) -> bool {
        (self.enabled && !self.columns.is_empty()) || !self.search.is_empty()
    }
}

/// Returns the subsequence of `rows` satisfying all active filters.
///
/// Matching is case-insensitive substring over each cell's display string
/// (null and missing cells read as the empty string). Per-column filters
/// AND together and only apply to columns marked `filterable`; filter text
/// for an unknown column key is a no-op. The global search matches a row
/// when ANY column's display string contains it, and ANDs with the
/// per-column result.
pub fn filter_rows(columns: &[Column], rows: &[Row], state: &FilterState) -> Vec<Row> {
    // Resolve filter texts against the column set once, not per row.
    let column_needles: Vec<(&str, String)> = if state.enabled {
        columns
            .iter()
            .filter(|c| c.filterable)
            .filter_map(|c| {
                state
                    .columns
                    .get(&c.key)
                    .filter(|t| !t.is_empty())
                    .map(|t| (c.key.as_str(), t.to_lowercase()))
            })
            .collect()
    } else {
        Vec::new()
    };
    let search = (!state.search.is_empty()).then(|| state.search.to_lowercase());

    if column_needles.is_empty() && search.is_none() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            let column_match = column_needles
                .iter()
                .all(|(key, needle)| row.display(key).to_lowercase().contains(needle));
            let search_match = search.as_deref().is_none_or(|needle| {
                columns
                    .iter()
                    .any(|c| row.display(&c.key).to_lowercase().contains(needle))
            });
            column_match && search_match
        })
        .cloned()
        .collect()
}
