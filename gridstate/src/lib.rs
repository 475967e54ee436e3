pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod interaction;
mod memo;

pub use config::{DisplayMode, GridConfig};
pub use error::GridError;
pub use events::GridEvent;
pub use grid::{Grid, GridSnapshot};
pub use interaction::{HeaderDrag, Interaction, ResizeDrag};

pub mod prelude {
    pub use crate::config::{DisplayMode, GridConfig};
    pub use crate::error::GridError;
    pub use crate::events::GridEvent;
    pub use crate::grid::{Grid, GridSnapshot};
    pub use rowpipe::{
        Aggregate, AggregateValue, CollapseState, Column, FilterState, Page, Row, RowGroup,
        SortDirection, SortState, Value, Viewport, VisibleRange,
    };
}
