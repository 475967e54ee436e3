//! Row grouping by column value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// One bucket of rows sharing a grouping value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowGroup {
    /// The stringified grouping value. Missing/null cells bucket under the
    /// empty-string key.
    pub key: String,
    /// The group's rows, in input order.
    pub rows: Vec<Row>,
}

/// Partitions `rows` into groups by the value of `group_key`.
///
/// Returns an empty sequence when no grouping column is specified. Group
/// order is first-seen order in the input, not alphabetical; a stable UI
/// depends on that. An unknown column key still groups (every row lands in
/// the empty-string group), consistent with missing cells reading as
/// empty.
pub fn group_rows(rows: &[Row], group_key: Option<&str>) -> Vec<RowGroup> {
    let Some(key) = group_key else {
        return Vec::new();
    };

    let mut groups: Vec<RowGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let group = row.display(key);
        match index_by_key.get(&group) {
            Some(&i) => groups[i].rows.push(row.clone()),
            None => {
                index_by_key.insert(group.clone(), groups.len());
                groups.push(RowGroup {
                    key: group,
                    rows: vec![row.clone()],
                });
            }
        }
    }
    groups
}

/// Per-group collapse flags, keyed by group key.
///
/// Display state orthogonal to the grouping computation itself: absent
/// entries default to expanded, and flags persist across re-grouping as
/// long as the group keys are unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollapseState {
    collapsed: HashMap<String, bool>,
}

impl CollapseState {
    /// All groups expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the group is collapsed. Unknown keys are expanded.
    pub fn is_collapsed(&self, key: &str) -> bool {
        self.collapsed.get(key).copied().unwrap_or(false)
    }

    /// Flips one group's flag and returns the new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let flag = !self.is_collapsed(key);
        self.collapsed.insert(key.to_string(), flag);
        flag
    }

    /// Sets one group's flag explicitly.
    pub fn set(&mut self, key: impl Into<String>, collapsed: bool) {
        self.collapsed.insert(key.into(), collapsed);
    }
}
