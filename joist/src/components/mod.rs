//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `render.rs` - rendering logic
//! - `events.rs` - event routing
//! - `mod.rs` - public exports

pub mod field;
pub mod selection;
pub mod table;

pub use field::{Field, FieldEvent, FieldId, FieldKind, FieldMode, FieldSize, Variant};
pub use selection::{Selection, SelectionMode};
pub use table::{CellValue, Column, DataTable, SortState, TableEvent, TableId, TableRow};
