//! Data table component: fixed columns over opaque rows, with optional
//! per-column sorting and per-row checkbox selection.

pub mod events;
pub mod item;
pub mod render;
mod state;

pub use events::TableEvent;
pub use item::{CellValue, Column, TableRow};
pub use render::render;
pub use state::{DataTable, SortState, TableId};
