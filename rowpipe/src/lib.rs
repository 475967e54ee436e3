pub mod aggregate;
pub mod column;
pub mod filter;
pub mod group;
pub mod paginate;
pub mod row;
pub mod sort;
pub mod value;
pub mod virtualize;

pub use aggregate::{aggregate_rows, Aggregate, AggregateValue};
pub use column::Column;
pub use filter::{filter_rows, FilterState};
pub use group::{group_rows, CollapseState, RowGroup};
pub use paginate::{paginate, Page};
pub use row::Row;
pub use sort::{sort_rows, SortDirection, SortState};
pub use value::Value;
pub use virtualize::{visible_range, Viewport, VisibleRange};
