//! Presentational UI components built on the `griddom` element tree.
//!
//! Components are state stores with a pure projection function: each owns
//! its view state behind a shared handle, and `render()` maps the current
//! state to an element subtree. Event handlers return typed component
//! events for the host page to consume.

pub mod components;
pub mod error;

pub use error::HarnessError;

pub mod prelude {
    pub use crate::components::field::{
        self, Field, FieldEvent, FieldKind, FieldMode, FieldSize, Variant,
    };
    pub use crate::components::selection::{Selection, SelectionMode};
    pub use crate::components::table::{
        self, CellValue, Column, DataTable, SortState, TableEvent, TableRow,
    };
    pub use crate::error::HarnessError;

    pub use griddom::{
        Color, DefaultTheme, Edges, Element, Event, FocusState, Key, Modifiers, Size, Style,
        Terminal, TextAlign, Theme,
    };
}
