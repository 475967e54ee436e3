//! Initial grid configuration.

use std::collections::HashSet;

use log::warn;
use rowpipe::{Column, FilterState, SortState, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Which windowing strategy materializes the visible rows.
///
/// Pagination and virtualization are two alternative windows over the same
/// row set, never nested: a grid is either paginated or
/// virtualized-infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Discrete pages of `page_size` rows.
    #[default]
    Paginated,
    /// One continuous list windowed by the viewport.
    Virtualized,
}

/// Caller-supplied initial state for one grid instance.
///
/// The whole struct round-trips through serde so callers that want layout
/// persistence can store it; the grid itself persists nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Row field used for stable row identity.
    pub row_key: String,
    /// Initial sort state.
    pub sort: SortState,
    /// Initial filter state.
    pub filter: FilterState,
    /// Rows per page in [`DisplayMode::Paginated`].
    pub page_size: usize,
    /// Initial grouping column, if any.
    pub group_by: Option<String>,
    /// Initial viewport measurement for [`DisplayMode::Virtualized`].
    pub viewport: Viewport,
    /// Windowing strategy.
    pub display_mode: DisplayMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_key: "id".to_string(),
            sort: SortState::default(),
            filter: FilterState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            group_by: None,
            viewport: Viewport::default(),
            display_mode: DisplayMode::default(),
        }
    }
}

impl GridConfig {
    /// Checks the configuration against a column set.
    ///
    /// Duplicate column keys and zero sizes are hard errors. An initial
    /// sort or group key matching no column is not: per the grid's
    /// degradation policy it acts as no sort / no grouping, so it is only
    /// logged here.
    pub fn validate(&self, columns: &[Column]) -> Result<(), GridError> {
        let mut seen = HashSet::new();
        for column in columns {
            if !seen.insert(column.key.as_str()) {
                return Err(GridError::DuplicateColumnKey {
                    key: column.key.clone(),
                });
            }
        }
        if self.page_size == 0 {
            return Err(GridError::InvalidPageSize);
        }
        if self.viewport.row_height == 0 {
            return Err(GridError::InvalidRowHeight);
        }
        if let Some(key) = self.sort.key.as_deref()
            && !seen.contains(key)
        {
            warn!("initial sort key {key:?} matches no column; starting unsorted");
        }
        if let Some(key) = self.group_by.as_deref()
            && !seen.contains(key)
        {
            warn!("initial group key {key:?} matches no column");
        }
        Ok(())
    }
}
