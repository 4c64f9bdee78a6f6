//! Demo showcase: wires the data table and a controlled field together.
//!
//! Esc quits. Click column headers to sort, checkboxes to select, Tab to
//! reach the input.

use std::fs::File;

use joist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// A user record for the table.
#[derive(Clone, Debug)]
struct User {
    name: String,
    age: i64,
    email: String,
}

impl User {
    fn new(name: &str, age: i64, email: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }
}

impl TableRow for User {
    fn key(&self) -> String {
        self.email.clone()
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "age" => Some(CellValue::Int(self.age)),
            "email" => Some(self.email.as_str().into()),
            _ => None,
        }
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new("John Doe", 28, "john@example.com"),
        User::new("Jane Smith", 34, "jane@example.com"),
        User::new("Alice Brown", 22, "alice@example.com"),
    ]
}

fn main() -> Result<(), HarnessError> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("demo.log")?,
    );

    let columns = vec![
        Column::new("name", "Name").width(14).sortable(),
        Column::new("age", "Age").width(6).sortable(),
        Column::new("email", "Email").width(22),
    ];
    let table = DataTable::with_rows(columns, sample_users())
        .with_selection_mode(SelectionMode::Multiple);

    let input = Field::controlled()
        .with_label("Input Component")
        .with_placeholder("Type here...")
        .clearable(true);

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let theme = DefaultTheme::new();

    let mut typed = String::new();

    loop {
        let input_focused = focus.focused() == Some(input.input_id().as_str());
        let root = build_page(&table, &input, input_focused, &typed);

        term.render(&root, &theme)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                return Ok(());
            }

            if let Some(table_event) = table.on_event(event) {
                match table_event {
                    TableEvent::SelectionChanged(keys) => {
                        log::debug!("selection now {keys:?}");
                    }
                    TableEvent::SortChanged(sort) => {
                        log::debug!("sorting by {sort:?}");
                    }
                }
            }

            if let Some(field_event) = input.on_event(event) {
                match field_event {
                    FieldEvent::Changed(value) => {
                        input.set_value(&value);
                        typed = value;
                    }
                    FieldEvent::Submitted => {
                        log::debug!("submitted {typed:?}");
                    }
                }
            }
        }
    }
}

fn build_page(table: &DataTable<User>, input: &Field, input_focused: bool, typed: &str) -> Element {
    let selected_names: Vec<String> = table
        .selected_rows()
        .iter()
        .map(|user| user.name.clone())
        .collect();

    let mut page = Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .child(Element::text("Demo Showcase").style(Style::new().bold()))
        .child(field::render(input, input_focused))
        .child(Element::text(format!("You typed: {typed}")))
        .child(
            Element::text("DataTable Component")
                .style(Style::new().bold()),
        )
        .child(table::render(table));

    if !selected_names.is_empty() {
        page = page.child(
            Element::text(format!("Selected: {}", selected_names.join(", ")))
                .style(Style::new().foreground(Color::var("muted"))),
        );
    }

    page
}
