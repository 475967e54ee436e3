//! Grid orchestrator.
//!
//! Owns every piece of interaction state for one grid instance and
//! composes the pure `rowpipe` units into the fixed pipeline:
//!
//! ```text
//! rows -> sort -> filter -> group -> paginate | virtualize -> visible rows
//!                              \-> aggregates (filtered, pre-pagination)
//! ```
//!
//! Derivations run synchronously on the mutating call. Each stage is
//! memoized on its own inputs, so a filter keystroke re-derives the filter
//! stage and downstream only, a page change re-slices only, and new rows
//! invalidate everything. Side effects (state mutation, event emission)
//! are confined to this type; the units stay pure.

use std::collections::HashMap;

use log::{debug, trace};
use rowpipe::{
    aggregate_rows, filter_rows, group_rows, paginate, sort_rows, visible_range, AggregateValue,
    CollapseState, Column, FilterState, Page, Row, RowGroup, SortState, Viewport, VisibleRange,
};

use crate::config::{DisplayMode, GridConfig};
use crate::error::GridError;
use crate::events::{EventHandler, GridEvent};
use crate::interaction::{HeaderDrag, Interaction, ResizeDrag};
use crate::memo::Memo;

type SortKey = (u64, SortState);
type FilterKey = (u64, SortState, FilterState);
type GroupKey = (FilterKey, Option<String>);
type DisplayKey = (GroupKey, CollapseState);
type PageKey = (DisplayKey, usize, usize);

/// Derived state handed to a rendering layer in one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    /// The rows to actually render, already windowed.
    pub rows: Vec<Row>,
    /// Page currently served (always 1-based, always in range).
    pub current_page: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
    /// Declared aggregates over the filtered row set, by column key.
    pub aggregates: HashMap<String, AggregateValue>,
    /// Group structure when grouping is active, in first-seen order.
    pub groups: Vec<RowGroup>,
    /// Index window into the materialized row list.
    pub visible_range: VisibleRange,
}

/// A single grid instance.
///
/// Created on mount with caller-supplied columns and configuration,
/// discarded on unmount; no state persists across instances. The row and
/// column collections are read-only inputs to the pipeline — derivations
/// copy, they never mutate.
pub struct Grid {
    columns: Vec<Column>,
    rows: Vec<Row>,
    rows_rev: u64,
    row_key: String,

    sort: SortState,
    filter: FilterState,
    page_size: usize,
    requested_page: usize,
    group_by: Option<String>,
    collapse: CollapseState,
    viewport: Viewport,
    display_mode: DisplayMode,

    /// Per-column widths keyed by column key. Reordering the positional
    /// column sequence never touches this map.
    widths: HashMap<String, u16>,
    interaction: Interaction,
    handlers: Vec<EventHandler>,

    sorted: Memo<SortKey, Vec<Row>>,
    filtered: Memo<FilterKey, Vec<Row>>,
    grouped: Memo<GroupKey, Vec<RowGroup>>,
    display: Memo<DisplayKey, Vec<Row>>,
    page: Memo<PageKey, Page>,
    aggregates: Memo<FilterKey, HashMap<String, AggregateValue>>,
}

impl Grid {
    /// Creates a grid over `columns` with the given initial state.
    ///
    /// Fails on duplicate column keys or zero page size / row height; an
    /// initial sort or group key matching no column degrades to no-op
    /// instead of failing.
    pub fn new(columns: Vec<Column>, config: GridConfig) -> Result<Self, GridError> {
        config.validate(&columns)?;
        let widths = columns
            .iter()
            .map(|c| (c.key.clone(), c.width))
            .collect();
        let group_by = config
            .group_by
            .filter(|key| columns.iter().any(|c| &c.key == key));
        Ok(Self {
            columns,
            rows: Vec::new(),
            rows_rev: 0,
            row_key: config.row_key,
            sort: config.sort,
            filter: config.filter,
            page_size: config.page_size,
            requested_page: 1,
            group_by,
            collapse: CollapseState::new(),
            viewport: config.viewport,
            display_mode: config.display_mode,
            widths,
            interaction: Interaction::Idle,
            handlers: Vec::new(),
            sorted: Memo::new(),
            filtered: Memo::new(),
            grouped: Memo::new(),
            display: Memo::new(),
            page: Memo::new(),
            aggregates: Memo::new(),
        })
    }

    /// Creates a grid with default configuration.
    pub fn with_columns(columns: Vec<Column>) -> Result<Self, GridError> {
        Self::new(columns, GridConfig::default())
    }

    /// Subscribes to committed state changes.
    pub fn on_event(&mut self, handler: impl FnMut(&GridEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    fn emit(&mut self, event: GridEvent) {
        for handler in &mut self.handlers {
            handler(&event);
        }
    }

    // -------------------------------------------------------------------------
    // Row collection
    // -------------------------------------------------------------------------

    /// Replaces the row collection, invalidating every derivation stage.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let previous_page = self.current_page();
        self.rows = rows;
        self.rows_rev = self.rows_rev.wrapping_add(1);
        debug!("set_rows: {} rows", self.rows.len());
        self.commit_page_shift(previous_page);
    }

    /// Number of rows handed to the grid, before any filtering.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The field name used for stable row identity.
    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    /// Header-click entry point: cycles the sort state on `key`.
    ///
    /// A key matching no column is a no-op.
    pub fn toggle_sort(&mut self, key: &str) {
        if !self.has_column(key) {
            return;
        }
        self.sort.toggle(key);
        debug!("sort: {:?} {:?}", self.sort.key, self.sort.direction);
        self.emit(GridEvent::SortChanged {
            key: self.sort.key.clone(),
            direction: self.sort.direction,
        });
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Sets one column's filter text; empty text clears it.
    pub fn set_filter(&mut self, key: &str, text: &str) {
        let previous_page = self.current_page();
        self.filter.set(key, text);
        debug!("filter[{key}] = {text:?}");
        self.emit(GridEvent::FilterChanged(self.filter.columns.clone()));
        self.commit_page_shift(previous_page);
    }

    /// Enables or disables the per-column filter pass. The global search
    /// is unaffected.
    pub fn set_filter_enabled(&mut self, enabled: bool) {
        let previous_page = self.current_page();
        self.filter.enabled = enabled;
        self.commit_page_shift(previous_page);
    }

    /// Sets the global search text.
    pub fn set_search(&mut self, text: &str) {
        let previous_page = self.current_page();
        self.filter.search = text.to_string();
        debug!("search = {text:?}");
        self.emit(GridEvent::SearchChanged(text.to_string()));
        self.commit_page_shift(previous_page);
    }

    /// Current filter state.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Number of rows surviving the filter stage.
    pub fn filtered_count(&mut self) -> usize {
        self.ensure_filtered();
        self.filtered.value().len()
    }

    // -------------------------------------------------------------------------
    // Grouping
    // -------------------------------------------------------------------------

    /// Sets or clears the grouping column. Collapse flags are kept: they
    /// persist across re-grouping as long as group keys are unchanged.
    ///
    /// A key matching no column is a no-op, leaving the grid ungrouped
    /// rather than bucketing every row under the empty-string key.
    pub fn set_group_by(&mut self, key: Option<&str>) {
        if let Some(key) = key
            && !self.has_column(key)
        {
            return;
        }
        let previous_page = self.current_page();
        self.group_by = key.map(str::to_string);
        debug!("group_by = {:?}", self.group_by);
        self.commit_page_shift(previous_page);
    }

    /// Current grouping column.
    pub fn group_by(&self) -> Option<&str> {
        self.group_by.as_deref()
    }

    /// Collapses or expands one group.
    pub fn toggle_group(&mut self, key: &str) {
        let previous_page = self.current_page();
        let collapsed = self.collapse.toggle(key);
        self.emit(GridEvent::GroupToggled {
            key: key.to_string(),
            collapsed,
        });
        self.commit_page_shift(previous_page);
    }

    /// Whether a group is collapsed. Unknown keys are expanded.
    pub fn is_group_collapsed(&self, key: &str) -> bool {
        self.collapse.is_collapsed(key)
    }

    /// Group structure over the filtered rows; empty when grouping is off.
    pub fn groups(&mut self) -> &[RowGroup] {
        self.ensure_grouped();
        self.grouped.value()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Requests a page. Out-of-range numbers clamp silently.
    pub fn set_page(&mut self, page: usize) {
        let previous_page = self.current_page();
        self.requested_page = page;
        self.commit_page_shift(previous_page);
    }

    /// Sets the page size. 0 is treated as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        let previous_page = self.current_page();
        self.page_size = page_size.max(1);
        self.commit_page_shift(previous_page);
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The page actually served, always within `[1, total_pages]`.
    pub fn current_page(&mut self) -> usize {
        self.ensure_page();
        self.page.value().current_page
    }

    /// Total page count for the current filtered row set, at least 1.
    pub fn total_pages(&mut self) -> usize {
        self.ensure_page();
        self.page.value().total_pages
    }

    /// Emits `PageChanged` when a mutation moved the served page, whether
    /// directly requested or re-clamped after the row set shrank.
    fn commit_page_shift(&mut self, previous_page: usize) {
        let current = self.current_page();
        if current != previous_page {
            debug!("page: {previous_page} -> {current}");
            self.emit(GridEvent::PageChanged(current));
        }
    }

    // -------------------------------------------------------------------------
    // Virtualization
    // -------------------------------------------------------------------------

    /// Replaces the viewport measurement (resize).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Updates the scroll offset. Called at scroll frequency; does no
    /// derivation work by itself.
    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.viewport.scroll_offset = offset;
    }

    /// Current viewport measurement.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switches between paginated and virtualized windowing.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Current windowing strategy.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    // -------------------------------------------------------------------------
    // Column layout
    // -------------------------------------------------------------------------

    /// The columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column keys in display order.
    pub fn column_order(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    /// The columns currently shown, in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.visible)
    }

    /// Current width of a column.
    pub fn column_width(&self, key: &str) -> Option<u16> {
        self.widths.get(key).copied()
    }

    /// Shows or hides a column. Hiding leaves its keyed state (width,
    /// filter text) intact for when it comes back.
    pub fn set_column_visible(&mut self, key: &str, visible: bool) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.visible = visible;
        }
    }

    /// Swaps two columns' positions in the display order.
    ///
    /// A positional swap, not an insert; all keyed per-column state
    /// (widths, filter texts, collapse flags) is untouched. Unknown keys
    /// are a no-op.
    pub fn reorder_column(&mut self, a: &str, b: &str) {
        let Some(i) = self.columns.iter().position(|c| c.key == a) else {
            return;
        };
        let Some(j) = self.columns.iter().position(|c| c.key == b) else {
            return;
        };
        if i != j {
            self.columns.swap(i, j);
            debug!("reorder: swapped {a:?} and {b:?}");
        }
    }

    /// Sets a column's width directly, clamped to its minimum.
    pub fn resize_column(&mut self, key: &str, width: u16) {
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            return;
        };
        self.widths.insert(key.to_string(), width.max(column.min_width));
    }

    fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    // -------------------------------------------------------------------------
    // Drag-resize state machine
    // -------------------------------------------------------------------------

    /// Pointer-down on a resize handle. Ignored unless idle and the
    /// column is resizable.
    pub fn begin_resize(&mut self, key: &str, pointer_x: i32) {
        if !self.interaction.is_idle() {
            return;
        }
        let resizable = self
            .columns
            .iter()
            .find(|c| c.key == key)
            .is_some_and(|c| c.resizable);
        let Some(start_width) = self.column_width(key) else {
            return;
        };
        if resizable {
            self.interaction = Interaction::Resizing(ResizeDrag {
                key: key.to_string(),
                start_x: pointer_x,
                start_width,
            });
        }
    }

    /// Pointer-move during a resize: width tracks the pointer delta,
    /// floored at the column minimum, committed continuously.
    pub fn resize_to(&mut self, pointer_x: i32) {
        let Interaction::Resizing(drag) = &self.interaction else {
            return;
        };
        let key = drag.key.clone();
        let width = (drag.start_width as i32 + (pointer_x - drag.start_x)).clamp(0, u16::MAX as i32);
        self.resize_column(&key, width as u16);
    }

    /// Pointer-up: the last tracked width stands (resize is not
    /// cancelable mid-drag).
    pub fn end_resize(&mut self) {
        if matches!(self.interaction, Interaction::Resizing(_)) {
            self.interaction = Interaction::Idle;
        }
    }

    // -------------------------------------------------------------------------
    // Drag-reorder state machine
    // -------------------------------------------------------------------------

    /// Drag-start on a header. Ignored unless idle.
    pub fn begin_drag(&mut self, key: &str) {
        if self.interaction.is_idle() && self.has_column(key) {
            self.interaction = Interaction::Dragging(HeaderDrag {
                key: key.to_string(),
            });
        }
    }

    /// Drop on a header: swaps the dragged column with the target.
    /// Dropping on the dragged column itself or an unknown key ends the
    /// drag without reordering.
    pub fn drop_on(&mut self, target: &str) {
        let Interaction::Dragging(drag) = &self.interaction else {
            return;
        };
        let dragged = drag.key.clone();
        self.interaction = Interaction::Idle;
        if dragged != target {
            self.reorder_column(&dragged, target);
        }
    }

    /// Current interaction state.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    // -------------------------------------------------------------------------
    // Derived output
    // -------------------------------------------------------------------------

    /// Rows surviving sort and filter, before any windowing.
    pub fn filtered_rows(&mut self) -> &[Row] {
        self.ensure_filtered();
        self.filtered.value()
    }

    /// Declared aggregates over the filtered, pre-pagination rows.
    pub fn aggregates(&mut self) -> &HashMap<String, AggregateValue> {
        self.ensure_aggregates();
        self.aggregates.value()
    }

    /// The index window into the materialized row list for the current
    /// display mode. In paginated mode this covers the whole served page.
    pub fn visible_window(&mut self) -> VisibleRange {
        match self.display_mode {
            DisplayMode::Paginated => {
                self.ensure_page();
                VisibleRange {
                    start: 0,
                    end: self.page.value().rows.len(),
                }
            }
            DisplayMode::Virtualized => {
                self.ensure_display();
                visible_range(&self.viewport, self.display.value().len())
            }
        }
    }

    /// The rows a rendering layer should draw right now.
    ///
    /// Paginated mode serves the current page; virtualized mode serves the
    /// viewport window over the full filtered (and group-expanded) list.
    pub fn visible_rows(&mut self) -> &[Row] {
        match self.display_mode {
            DisplayMode::Paginated => {
                self.ensure_page();
                &self.page.value().rows
            }
            DisplayMode::Virtualized => {
                self.ensure_display();
                let rows = self.display.value();
                let range = visible_range(&self.viewport, rows.len());
                &rows[range.start..range.end]
            }
        }
    }

    /// Captures all derived state for rendering in one call.
    pub fn snapshot(&mut self) -> GridSnapshot {
        let visible_range = self.visible_window();
        GridSnapshot {
            rows: self.visible_rows().to_vec(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            aggregates: self.aggregates().clone(),
            groups: self.groups().to_vec(),
            visible_range,
        }
    }

    // -------------------------------------------------------------------------
    // Pipeline stages
    // -------------------------------------------------------------------------

    fn sort_key(&self) -> SortKey {
        (self.rows_rev, self.sort.clone())
    }

    fn filter_key(&self) -> FilterKey {
        (self.rows_rev, self.sort.clone(), self.filter.clone())
    }

    fn group_key(&self) -> GroupKey {
        (self.filter_key(), self.group_by.clone())
    }

    fn display_key(&self) -> DisplayKey {
        (self.group_key(), self.collapse.clone())
    }

    fn ensure_sorted(&mut self) {
        let key = self.sort_key();
        if self.sorted.is_stale(&key) {
            trace!("re-deriving sort stage");
            let out = sort_rows(&self.columns, &self.rows, &self.sort);
            self.sorted.store(key, out);
        }
    }

    fn ensure_filtered(&mut self) {
        self.ensure_sorted();
        let key = self.filter_key();
        if self.filtered.is_stale(&key) {
            trace!("re-deriving filter stage");
            let out = filter_rows(&self.columns, self.sorted.value(), &self.filter);
            self.filtered.store(key, out);
        }
    }

    fn ensure_grouped(&mut self) {
        self.ensure_filtered();
        let key = self.group_key();
        if self.grouped.is_stale(&key) {
            trace!("re-deriving group stage");
            let out = group_rows(self.filtered.value(), self.group_by.as_deref());
            self.grouped.store(key, out);
        }
    }

    /// The row list windowing operates on: the filtered rows, or with
    /// grouping active, the expanded groups' rows in group order.
    fn ensure_display(&mut self) {
        self.ensure_grouped();
        let key = self.display_key();
        if self.display.is_stale(&key) {
            let out = if self.group_by.is_some() {
                self.grouped
                    .value()
                    .iter()
                    .filter(|g| !self.collapse.is_collapsed(&g.key))
                    .flat_map(|g| g.rows.iter().cloned())
                    .collect()
            } else {
                self.filtered.value().to_vec()
            };
            self.display.store(key, out);
        }
    }

    fn ensure_page(&mut self) {
        self.ensure_display();
        let key = (self.display_key(), self.page_size, self.requested_page);
        if self.page.is_stale(&key) {
            let out = paginate(self.display.value(), self.page_size, self.requested_page);
            self.page.store(key, out);
        }
    }

    fn ensure_aggregates(&mut self) {
        self.ensure_filtered();
        let key = self.filter_key();
        if self.aggregates.is_stale(&key) {
            trace!("re-deriving aggregates");
            let out = aggregate_rows(&self.columns, self.filtered.value());
            self.aggregates.store(key, out);
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("filter", &self.filter)
            .field("page_size", &self.page_size)
            .field("group_by", &self.group_by)
            .field("display_mode", &self.display_mode)
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}
