use joist::components::selection::SelectionMode;
use joist::components::table::{self, CellValue, Column, DataTable, TableEvent, TableRow};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: &'static str,
    age: i64,
}

impl TableRow for Person {
    fn key(&self) -> String {
        self.name.to_string()
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "name" => Some(self.name.into()),
            "age" => Some(CellValue::Int(self.age)),
            _ => None,
        }
    }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "Jane",
            age: 34,
        },
        Person {
            name: "Alice",
            age: 22,
        },
        Person {
            name: "John",
            age: 28,
        },
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("age", "Age").width(6).sortable(),
        Column::new("notes", "Notes"),
    ]
}

fn names<T: TableRow>(rows: &[T]) -> Vec<String> {
    rows.iter().map(|r| r.key()).collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_unsorted_rows_keep_original_order() {
    let table = DataTable::with_rows(columns(), people());
    assert_eq!(names(&table.sorted_rows()), ["Jane", "Alice", "John"]);
}

#[test]
fn test_toggle_sort_ascending_then_descending() {
    let table = DataTable::with_rows(columns(), people());

    let sort = table.toggle_sort("age").unwrap();
    assert!(sort.ascending);
    assert_eq!(names(&table.sorted_rows()), ["Alice", "John", "Jane"]);

    let sort = table.toggle_sort("age").unwrap();
    assert!(!sort.ascending);
    assert_eq!(names(&table.sorted_rows()), ["Jane", "John", "Alice"]);
}

#[test]
fn test_third_toggle_returns_to_ascending() {
    let table = DataTable::with_rows(columns(), people());

    table.toggle_sort("age");
    table.toggle_sort("age");
    let sort = table.toggle_sort("age").unwrap();

    assert!(sort.ascending, "descending toggles back to ascending");
    assert_eq!(names(&table.sorted_rows()), ["Alice", "John", "Jane"]);
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let table = DataTable::with_rows(columns(), people());

    table.toggle_sort("age");
    table.toggle_sort("age"); // age descending
    let sort = table.toggle_sort("name").unwrap();

    assert_eq!(sort.field, "name");
    assert!(sort.ascending, "a different column always starts ascending");
    assert_eq!(names(&table.sorted_rows()), ["Alice", "Jane", "John"]);
}

#[test]
fn test_unsortable_column_is_a_noop() {
    let table = DataTable::with_rows(columns(), people());

    assert!(table.toggle_sort("notes").is_none());
    assert!(table.sort().is_none());
    assert_eq!(names(&table.sorted_rows()), ["Jane", "Alice", "John"]);

    assert!(table.toggle_sort("no_such_column").is_none());
}

#[test]
fn test_sort_does_not_mutate_stored_rows() {
    let table = DataTable::with_rows(columns(), people());

    table.toggle_sort("age");
    let _ = table.sorted_rows();

    assert_eq!(names(&table.rows()), ["Jane", "Alice", "John"]);
}

#[test]
fn test_stable_sort_keeps_equal_rows_in_input_order() {
    let rows = vec![
        Person {
            name: "first",
            age: 30,
        },
        Person {
            name: "second",
            age: 30,
        },
        Person {
            name: "third",
            age: 20,
        },
    ];
    let table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("age");
    assert_eq!(names(&table.sorted_rows()), ["third", "first", "second"]);
}

#[test]
fn test_rows_missing_the_sort_field_compare_equal() {
    #[derive(Clone, Debug)]
    struct Sparse {
        id: &'static str,
        age: Option<i64>,
    }

    impl TableRow for Sparse {
        fn key(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, name: &str) -> Option<CellValue> {
            match name {
                "age" => self.age.map(CellValue::Int),
                _ => None,
            }
        }
    }

    let table = DataTable::with_rows(
        vec![Column::new("age", "Age").sortable()],
        vec![
            Sparse {
                id: "a",
                age: Some(2),
            },
            Sparse { id: "b", age: None },
            Sparse {
                id: "c",
                age: Some(1),
            },
        ],
    );

    table.toggle_sort("age");
    // The comparator treats a missing value as equal to anything, so the
    // stable sort only reorders comparable neighbours
    assert_eq!(names(&table.sorted_rows()), ["a", "b", "c"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_toggle_select_appends_and_removes_in_order() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    let snapshot = table.toggle_select("John").unwrap();
    assert_eq!(snapshot, ["John"]);

    let snapshot = table.toggle_select("Alice").unwrap();
    assert_eq!(snapshot, ["John", "Alice"], "appends in selection order");

    let snapshot = table.toggle_select("Jane").unwrap();
    assert_eq!(snapshot.len(), 3);

    let snapshot = table.toggle_select("Alice").unwrap();
    assert_eq!(
        snapshot,
        ["John", "Jane"],
        "deselection preserves the order of the rest"
    );
}

#[test]
fn test_select_noop_without_selection_mode() {
    let table = DataTable::with_rows(columns(), people());

    assert!(table.toggle_select("John").is_none());
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_select_noop_for_unknown_key() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    assert!(table.toggle_select("nobody").is_none());
}

#[test]
fn test_selected_rows_follow_selection_order() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_select("Alice");
    table.toggle_select("Jane");

    let selected = table.selected_rows();
    assert_eq!(names(&selected), ["Alice", "Jane"]);
}

#[test]
fn test_set_rows_keeps_selection_for_surviving_keys() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_select("Jane");
    table.toggle_select("John");

    // Replace rows wholesale; John is gone, Jane survives
    table.set_rows(vec![
        Person {
            name: "Jane",
            age: 35,
        },
        Person {
            name: "Bob",
            age: 40,
        },
    ]);

    assert_eq!(table.selected_keys(), ["Jane", "John"], "state keeps keys");
    assert_eq!(
        names(&table.selected_rows()),
        ["Jane"],
        "stale keys do not resolve to rows"
    );
}

#[test]
fn test_disabling_selection_clears_it() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    table.toggle_select("Jane");
    table.set_selection_mode(SelectionMode::None);

    assert!(table.selected_keys().is_empty());
}

// ============================================================================
// Event routing
// ============================================================================

fn click(target: &str) -> griddom::Event {
    griddom::Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: griddom::MouseButton::Left,
    }
}

#[test]
fn test_header_click_toggles_sort() {
    let table = DataTable::with_rows(columns(), people());
    let id = table.id_string();

    let event = table.on_event(&click(&format!("{id}-hdr-age"))).unwrap();
    match event {
        TableEvent::SortChanged(sort) => {
            assert_eq!(sort.field, "age");
            assert!(sort.ascending);
        }
        other => panic!("expected SortChanged, got {other:?}"),
    }
}

#[test]
fn test_header_click_on_unsortable_column_is_ignored() {
    let table = DataTable::with_rows(columns(), people());
    let id = table.id_string();

    assert!(table.on_event(&click(&format!("{id}-hdr-notes"))).is_none());
}

#[test]
fn test_checkbox_click_notifies_with_full_selection() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);
    let id = table.id_string();

    let event = table.on_event(&click(&format!("{id}-sel-Jane"))).unwrap();
    assert_eq!(event, TableEvent::SelectionChanged(vec!["Jane".to_string()]));

    let event = table.on_event(&click(&format!("{id}-sel-John"))).unwrap();
    assert_eq!(
        event,
        TableEvent::SelectionChanged(vec!["Jane".to_string(), "John".to_string()])
    );
}

#[test]
fn test_foreign_clicks_are_ignored() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);

    assert!(table.on_event(&click("someone-elses-button")).is_none());
}

// ============================================================================
// Rendering
// ============================================================================

fn collect_text(element: &griddom::Element, out: &mut Vec<String>) {
    match &element.content {
        griddom::Content::Text(text) => out.push(text.clone()),
        griddom::Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

fn texts(element: &griddom::Element) -> Vec<String> {
    let mut out = Vec::new();
    collect_text(element, &mut out);
    out
}

#[test]
fn test_loading_renders_placeholder_only() {
    let table = DataTable::with_rows(columns(), people());
    table.set_loading(true);

    assert_eq!(texts(&table::render(&table)), ["Loading..."]);
}

#[test]
fn test_empty_renders_placeholder() {
    let table: DataTable<Person> = DataTable::new(columns());

    assert_eq!(texts(&table::render(&table)), ["No data available"]);
}

#[test]
fn test_render_header_shows_sort_indicator() {
    let table = DataTable::with_rows(columns(), people());
    table.toggle_sort("age");

    let all = texts(&table::render(&table));
    assert!(all.contains(&"Age ▲".to_string()), "got {all:?}");

    table.toggle_sort("age");
    let all = texts(&table::render(&table));
    assert!(all.contains(&"Age ▼".to_string()), "got {all:?}");
}

#[test]
fn test_render_body_follows_sorted_order() {
    let table = DataTable::with_rows(columns(), people());
    table.toggle_sort("age");

    let all = texts(&table::render(&table));
    let jane = all.iter().position(|t| t == "Jane").unwrap();
    let alice = all.iter().position(|t| t == "Alice").unwrap();
    let john = all.iter().position(|t| t == "John").unwrap();

    assert!(alice < john && john < jane, "ascending by age: {all:?}");
}

#[test]
fn test_render_selectable_table_has_checkboxes() {
    let table = DataTable::with_rows(columns(), people())
        .with_selection_mode(SelectionMode::Multiple);
    table.toggle_select("Alice");

    let all = texts(&table::render(&table));
    assert!(all.contains(&"Select".to_string()));
    assert_eq!(all.iter().filter(|t| *t == "■").count(), 1);
    assert_eq!(all.iter().filter(|t| *t == "□").count(), 2);
}

#[test]
fn test_render_missing_field_is_blank() {
    let table = DataTable::with_rows(columns(), people());

    let all = texts(&table::render(&table));
    // The "notes" column has no backing field on Person
    assert_eq!(all.iter().filter(|t| t.is_empty()).count(), 3);
}
