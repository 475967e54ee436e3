//! Column descriptors.

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;

/// Default column width in pixels.
pub const DEFAULT_WIDTH: u16 = 120;

/// Default minimum width a column can be resized down to.
pub const DEFAULT_MIN_WIDTH: u16 = 40;

/// Configuration for one displayed column.
///
/// The `key` is the stable identifier every lookup goes through: sort key,
/// filter key, group key, and all per-column interaction state (width,
/// filter text) in the orchestrator. Columns arrive as an ordered sequence
/// and the order is mutable at runtime, so nothing may be keyed by
/// position.
///
/// # Examples
///
/// ```
/// use rowpipe::{Aggregate, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").width(60),
///     Column::new("name", "Name").filterable(),
///     Column::new("qty", "Quantity").aggregate(Aggregate::Sum),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Stable unique identifier.
    pub key: String,
    /// Display label. Opaque to the pipeline.
    pub title: String,
    /// Current width in pixels.
    pub width: u16,
    /// Floor for drag-resize.
    pub min_width: u16,
    /// Whether the per-column filter pass includes this column.
    pub filterable: bool,
    /// Whether drag-resize is allowed on this column.
    pub resizable: bool,
    /// Whether the column is pinned. Opaque to the pipeline.
    pub pinned: bool,
    /// Whether the column is currently shown. Opaque to the pipeline.
    pub visible: bool,
    /// Aggregate computed for this column, if any.
    pub aggregate: Option<Aggregate>,
}

impl Column {
    /// Creates a column with defaults: filterable off, resizable on,
    /// visible, no aggregate.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: DEFAULT_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            filterable: false,
            resizable: true,
            pinned: false,
            visible: true,
            aggregate: None,
        }
    }

    /// Sets the initial width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Sets the resize floor.
    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = min_width;
        self
    }

    /// Includes this column in the per-column filter pass.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Disallows drag-resize on this column.
    pub fn fixed(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// Pins the column.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Hides the column initially.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Declares an aggregate for this column.
    pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }
}
