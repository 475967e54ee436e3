//! Dynamic grid rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One record in the grid's row collection.
///
/// A row is an open mapping from column key to [`Value`]; columns the row
/// has no entry for read as [`Value::Null`]. Rows are immutable from the
/// pipeline's perspective: every derivation unit copies, none mutates in
/// place.
///
/// # Example
///
/// ```
/// use rowpipe::Row;
///
/// let row = Row::new().set("id", 1).set("name", "Contoso");
/// assert_eq!(row.display("name"), "Contoso");
/// assert_eq!(row.display("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Inserts a field value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Gets a field value by column key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The display string for a column, empty when the field is absent or
    /// null.
    pub fn display(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(Value::to_display_string)
            .unwrap_or_default()
    }

    /// The row's identity value, read from the caller-designated row-key
    /// field (`"id"` by default at the grid level).
    ///
    /// Identity is only used by rendering layers for list reconciliation
    /// (selection, expansion across rerenders). Rows with a missing or
    /// duplicated key value degrade that reconciliation; the derivations
    /// themselves never depend on row identity and stay correct.
    pub fn key(&self, row_key_field: &str) -> Option<&Value> {
        self.fields.get(row_key_field)
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no populated fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
