//! Event routing for the data table.

use griddom::Event;

use super::state::{DataTable, SortState};
use super::TableRow;

/// Notifications emitted by the table in response to user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The active sort changed.
    SortChanged(SortState),
    /// The selection changed; carries the full ordered selection, not a
    /// delta.
    SelectionChanged(Vec<String>),
}

impl<T: TableRow> DataTable<T> {
    /// Route a targeted event into the table.
    ///
    /// Header-cell clicks toggle sorting, checkbox-cell clicks toggle
    /// selection. Everything else is ignored. The returned event is the
    /// synchronous notification for the host to consume.
    pub fn on_event(&self, event: &Event) -> Option<TableEvent> {
        let Event::Click {
            target: Some(target),
            ..
        } = event
        else {
            return None;
        };

        let id = self.id_string();

        if let Some(column_key) = target.strip_prefix(&format!("{id}-hdr-")) {
            log::trace!("table {id}: header click on {column_key:?}");
            return self.toggle_sort(column_key).map(TableEvent::SortChanged);
        }

        if let Some(row_key) = target.strip_prefix(&format!("{id}-sel-")) {
            log::trace!("table {id}: checkbox click on {row_key:?}");
            return self
                .toggle_select(row_key)
                .map(TableEvent::SelectionChanged);
        }

        None
    }
}
