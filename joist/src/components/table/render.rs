//! Data table rendering.

use griddom::{Color, Edges, Element, Size, Style, TextAlign};

use crate::components::selection::SelectionMode;

use super::item::Column;
use super::state::{DataTable, SortState};
use super::TableRow;

/// Width of the checkbox column, sized for its "Select" header.
const SELECT_COLUMN_WIDTH: u16 = 6;

/// Project the table state to an element subtree.
///
/// Loading wins over everything; an empty row collection renders the empty
/// placeholder; otherwise one header row plus one body row per record, in
/// sorted order when a sort is active.
pub fn render<T: TableRow>(table: &DataTable<T>) -> Element {
    let id = table.id_string();

    if table.loading() {
        return placeholder(&id, "Loading...");
    }

    let rows = table.sorted_rows();
    if rows.is_empty() {
        return placeholder(&id, "No data available");
    }

    let columns = table.columns();
    let selectable = table.selection_mode() == SelectionMode::Multiple;
    let sort = table.sort();

    let mut children = Vec::with_capacity(rows.len() + 1);
    children.push(header_row(&id, &columns, selectable, sort.as_ref()));

    for row in &rows {
        children.push(body_row(&id, &columns, selectable, table, row));
    }

    Element::col().id(id).children(children)
}

fn placeholder(id: &str, message: &str) -> Element {
    Element::col()
        .id(id.to_string())
        .padding(Edges::all(1))
        .child(
            Element::text(message)
                .id(format!("{id}-placeholder"))
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn header_row(
    id: &str,
    columns: &[Column],
    selectable: bool,
    sort: Option<&SortState>,
) -> Element {
    let mut header = Element::row()
        .id(format!("{id}-header"))
        .gap(1)
        .style(Style::new().background(Color::var("surface")));

    if selectable {
        header = header.child(
            Element::text("Select")
                .id(format!("{id}-hdr-select"))
                .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                .style(Style::new().bold()),
        );
    }

    for col in columns {
        let mut title = col.title.clone();
        if let Some(sort) = sort
            && sort.field == col.field
        {
            title.push_str(if sort.ascending { " ▲" } else { " ▼" });
        }
        header = header.child(
            Element::text(title)
                .id(format!("{id}-hdr-{}", col.key))
                .width(Size::Fixed(col.width))
                .style(Style::new().bold())
                .clickable(col.sortable),
        );
    }

    header
}

fn body_row<T: TableRow>(
    id: &str,
    columns: &[Column],
    selectable: bool,
    table: &DataTable<T>,
    row: &T,
) -> Element {
    let key = row.key();
    let selected = table.is_selected(&key);

    let mut line = Element::row().id(format!("{id}-row-{key}")).gap(1);
    if selected {
        line = line.style(Style::new().background(Color::var("selection")));
    }

    if selectable {
        line = line.child(
            Element::text(if selected { "■" } else { "□" })
                .id(format!("{id}-sel-{key}"))
                .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                .text_align(TextAlign::Center)
                .clickable(true),
        );
    }

    for col in columns {
        // A field the row does not have displays as a blank cell
        let text = row
            .field(&col.field)
            .map(|value| value.to_string())
            .unwrap_or_default();
        line = line.child(
            Element::text(text)
                .id(format!("{id}-cell-{key}-{}", col.key))
                .width(Size::Fixed(col.width))
                .text_align(col.align),
        );
    }

    line
}
