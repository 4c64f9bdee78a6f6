//! Field component: a single-line text control with visual variants, size
//! presets, optional clear/reveal affordances, and validation display.

pub mod events;
pub mod render;
mod state;

pub use events::FieldEvent;
pub use render::render;
pub use state::{Field, FieldId, FieldKind, FieldMode, FieldSize, Variant};
