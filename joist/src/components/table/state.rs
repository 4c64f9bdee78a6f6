//! Data table component state.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

use crate::components::selection::{Selection, SelectionMode};

use super::item::{CellValue, Column, TableRow};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, AtomicOrdering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// The active sort: which field, and in which direction.
///
/// There is no path back to "unsorted" once a column has been sorted; a
/// header click can only pick a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

/// Internal state for the DataTable component.
#[derive(Debug)]
struct TableInner<T: TableRow> {
    /// Column definitions.
    columns: Vec<Column>,
    /// The rows, in the caller's original order. Sorting never mutates
    /// this; display order is derived per render.
    rows: Vec<T>,
    /// Selection state (by row key).
    selection: Selection,
    /// Selection mode.
    selection_mode: SelectionMode,
    /// Current sort state.
    sort: Option<SortState>,
    /// Whether the table shows a loading placeholder instead of rows.
    loading: bool,
}

/// A sortable, selectable data table.
///
/// `DataTable<T>` owns two pieces of derived view state: the active sort
/// (field + direction) and the ordered selection. Rows and columns are
/// plain data supplied by the caller.
///
/// Handles are cheap clones sharing one store; the dirty flag tells a host
/// loop when a re-render is due.
#[derive(Debug)]
pub struct DataTable<T: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                rows: Vec::new(),
                selection: Selection::new(),
                selection_mode: SelectionMode::None,
                sort: None,
                loading: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let table = Self::new(columns);
        if let Ok(mut guard) = table.inner.write() {
            guard.rows = rows;
        }
        table
    }

    /// Set the selection mode (builder style).
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        self.set_selection_mode(mode);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string (prefix for element IDs).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in their original order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace all rows.
    ///
    /// Selection is deliberately not cleared: keys are stable identifiers,
    /// so rows surviving the replacement stay selected and keys that no
    /// longer match any row become inert.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.loading != loading
        {
            guard.loading = loading;
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Check the loading flag.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// Set the selection mode. Turning selection off clears it.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
            if mode == SelectionMode::None {
                guard.selection.clear();
            }
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Get all selected keys in selection order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.snapshot())
            .unwrap_or_default()
    }

    /// Get all selected rows, in selection order.
    ///
    /// Keys with no matching row (left over from a row replacement) are
    /// skipped.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.selection
                    .snapshot()
                    .iter()
                    .filter_map(|key| g.rows.iter().find(|row| row.key() == *key).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check if a row is selected by key.
    pub fn is_selected(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Toggle selection of a row by key.
    ///
    /// No-op (returns `None`) when selection is off or the key does not
    /// match any current row. Otherwise returns the full ordered selection
    /// after the change - the payload of the selection-changed
    /// notification.
    pub fn toggle_select(&self, key: &str) -> Option<Vec<String>> {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection_mode == SelectionMode::Multiple
            && guard.rows.iter().any(|row| row.key() == key)
        {
            let now_selected = guard.selection.toggle(key);
            self.dirty.store(true, AtomicOrdering::SeqCst);
            let snapshot = guard.selection.snapshot();
            log::debug!(
                "table {}: {} {key:?}, {} selected",
                self.id,
                if now_selected { "selected" } else { "deselected" },
                snapshot.len()
            );
            return Some(snapshot);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<SortState> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Toggle sort for a column by key.
    ///
    /// No-op for unknown or unsortable columns. If the column's field is
    /// already the active sort field and the direction is ascending, flips
    /// to descending; in every other case the clicked field becomes active,
    /// ascending. Returns the new sort state.
    pub fn toggle_sort(&self, column_key: &str) -> Option<SortState> {
        if let Ok(mut guard) = self.inner.write() {
            let Some(column) = guard.columns.iter().find(|c| c.key == column_key) else {
                return None;
            };
            if !column.sortable {
                return None;
            }
            let field = column.field.clone();

            let next = match &guard.sort {
                Some(current) if current.field == field && current.ascending => SortState {
                    field,
                    ascending: false,
                },
                _ => SortState {
                    field,
                    ascending: true,
                },
            };
            log::debug!(
                "table {}: sort by {:?} {}",
                self.id,
                next.field,
                if next.ascending { "ascending" } else { "descending" }
            );
            guard.sort = Some(next.clone());
            self.dirty.store(true, AtomicOrdering::SeqCst);
            return Some(next);
        }
        None
    }

    /// Get the rows in display order.
    ///
    /// A pure projection of (rows, sort): the stored row order is never
    /// mutated. `sort_by` is stable, so rows whose values compare equal
    /// keep their original relative order; a row missing the sort field
    /// compares equal to everything.
    pub fn sorted_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                let mut rows = g.rows.clone();
                if let Some(sort) = &g.sort {
                    rows.sort_by(|a, b| {
                        let ord = match (a.field(&sort.field), b.field(&sort.field)) {
                            (Some(av), Some(bv)) => CellValue::compare(&av, &bv),
                            _ => Ordering::Equal,
                        };
                        if sort.ascending { ord } else { ord.reverse() }
                    });
                }
                rows
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(AtomicOrdering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, AtomicOrdering::SeqCst);
    }
}

impl<T: TableRow> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Default for DataTable<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
