//! Header drag interaction state.
//!
//! Two pointer-driven state machines, each `idle -> active -> idle`:
//! drag-resize commits continuously and cannot be cancelled mid-drag;
//! drag-reorder swaps the dragged column with the drop target on drop.
//! Only one interaction can be active at a time; starting one while the
//! other is active is ignored.

/// An in-progress column resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDrag {
    /// Column being resized.
    pub key: String,
    /// Pointer x at pointer-down.
    pub start_x: i32,
    /// Column width at pointer-down.
    pub start_width: u16,
}

/// An in-progress column reorder drag.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderDrag {
    /// Column being dragged.
    pub key: String,
}

/// The single active header interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    /// No drag in progress.
    #[default]
    Idle,
    /// A resize handle is held down.
    Resizing(ResizeDrag),
    /// A header is being dragged for reorder.
    Dragging(HeaderDrag),
}

impl Interaction {
    /// Whether no interaction is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}
