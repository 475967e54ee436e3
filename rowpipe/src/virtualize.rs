//! Viewport windowing for scroll-driven display.

use serde::{Deserialize, Serialize};

/// A live viewport measurement in pixels.
///
/// Windowing has no dependency on the rest of the pipeline: it is a pure
/// function of this measurement and the length of whatever row set is
/// currently materialized for display. Its trigger is the scroll event, so
/// [`visible_range`] is plain index arithmetic, never a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scroll offset from the top of the content, in pixels.
    pub scroll_offset: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Fixed row height in pixels. 0 is treated as 1.
    pub row_height: u32,
    /// Extra rows rendered beyond each edge of the visible window to mask
    /// fast-scroll repaint.
    pub overscan: u32,
}

impl Viewport {
    /// A viewport at scroll offset 0 with no overscan.
    pub fn new(height: u32, row_height: u32) -> Self {
        Self {
            scroll_offset: 0,
            height,
            row_height,
            overscan: 0,
        }
    }

    /// Sets the overscan row count.
    pub fn overscan(mut self, overscan: u32) -> Self {
        self.overscan = overscan;
        self
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            height: 0,
            row_height: 1,
            overscan: 0,
        }
    }
}

/// The contiguous index range that must be rendered, end exclusive.
///
/// Invariant: `0 <= start <= end <= row_count` for the `row_count` the
/// range was computed against, and every row geometrically visible at the
/// scroll position is inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    /// First index to render (inclusive).
    pub start: usize,
    /// One past the last index to render.
    pub end: usize,
}

impl VisibleRange {
    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `index` falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Computes the minimal window keeping the viewport filled, padded by
/// `overscan` rows on each side and clamped to `[0, row_count]`.
///
/// Safe to call on every scroll frame: each invocation is independent and
/// O(1).
pub fn visible_range(viewport: &Viewport, row_count: usize) -> VisibleRange {
    let row_height = viewport.row_height.max(1) as usize;
    let offset = viewport.scroll_offset as usize;
    let overscan = viewport.overscan as usize;

    let end = (offset + viewport.height as usize)
        .div_ceil(row_height)
        .saturating_add(overscan)
        .min(row_count);
    let start = (offset / row_height).saturating_sub(overscan).min(end);

    VisibleRange { start, end }
}
