//! Grid construction errors.
//!
//! The derivation pipeline itself never errors: unknown keys degrade to
//! no-ops, out-of-range pages clamp, empty inputs flow through. The only
//! fallible surface is validating caller-supplied columns and
//! configuration at construction time.

use thiserror::Error;

/// Errors from [`GridConfig::validate`](crate::config::GridConfig::validate).
#[derive(Debug, Error)]
pub enum GridError {
    /// Two columns share a key. All per-column state is keyed by column
    /// key, so duplicates would silently misattribute widths and filters.
    #[error("duplicate column key: {key}")]
    DuplicateColumnKey {
        /// The offending key.
        key: String,
    },

    /// `page_size` was 0.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// `viewport.row_height` was 0.
    #[error("row height must be at least 1")]
    InvalidRowHeight,
}
