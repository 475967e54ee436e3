//! Committed-change notifications.
//!
//! The grid notifies subscribers on committed state changes only, never on
//! transient interaction state: a pointer-move during a column resize
//! emits nothing, and column drag/resize emit nothing even on commit
//! (layout is readable through accessors for callers that persist it).

use std::collections::HashMap;

use rowpipe::SortDirection;

/// A committed grid state change.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// The active sort changed. `direction: None` means sorting was
    /// cleared.
    SortChanged {
        /// Active sort column, if any.
        key: Option<String>,
        /// Active direction, if any.
        direction: Option<SortDirection>,
    },
    /// The per-column filter map changed.
    FilterChanged(HashMap<String, String>),
    /// The global search text changed.
    SearchChanged(String),
    /// The served page number changed.
    PageChanged(usize),
    /// A group was collapsed or expanded.
    GroupToggled {
        /// The group key.
        key: String,
        /// New collapsed flag.
        collapsed: bool,
    },
}

/// Subscriber callback. Handlers run synchronously on the mutating call.
pub(crate) type EventHandler = Box<dyn FnMut(&GridEvent)>;
