//! Page slicing.

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// The result of slicing a row set into one bounded page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    /// The page actually served, clamped into `[1, total_pages]`.
    pub current_page: usize,
    /// `max(1, ceil(row_count / page_size))`. An empty row set reports 1.
    pub total_pages: usize,
    /// The rows on the served page.
    pub rows: Vec<Row>,
}

/// Slices `rows` into the requested page.
///
/// `requested_page` is clamped into `[1, total_pages]` before slicing;
/// out-of-range requests never error and never yield a silently empty
/// page. `total_pages` is recomputed fresh from the row count on every
/// call, so a shrunk row set (after a filter change) or a new page size
/// re-clamps a stale page number by construction. A `page_size` of 0 is
/// treated as 1.
pub fn paginate(rows: &[Row], page_size: usize, requested_page: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = rows.len().div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    let rows = if start < rows.len() {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        current_page,
        total_pages,
        rows,
    }
}
