use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use griddom::{collect_focusable, hit_test, hit_test_any, Element, Event, FocusState, Key, Rect};

fn layout_of(root: &Element, width: u16, height: u16) -> griddom::LayoutResult {
    griddom::layout(root, Rect::from_size(width, height))
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn sample_tree() -> Element {
    Element::col()
        .id("root")
        .width(griddom::Size::Fixed(40))
        .height(griddom::Size::Fixed(10))
        .child(Element::text_input("").id("first").width(griddom::Size::Fixed(20)))
        .child(Element::text_input("").id("second").width(griddom::Size::Fixed(20)))
        .child(Element::text("press").id("btn").clickable(true))
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_finds_clickable() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);

    // "btn" is the third child, at y = 2
    assert_eq!(hit_test(&layout, &root, 1, 2), Some("btn".to_string()));
}

#[test]
fn test_hit_test_ignores_non_clickable() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);

    // inputs are focusable but not clickable
    assert_eq!(hit_test(&layout, &root, 1, 0), None);
    assert_eq!(
        hit_test_any(&layout, &root, 1, 0),
        Some("first".to_string())
    );
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    let root = sample_tree();
    assert_eq!(collect_focusable(&root), vec!["first", "second"]);
}

#[test]
fn test_disabled_elements_not_focusable() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("a").disabled(true))
        .child(Element::text_input("").id("b"));
    assert_eq!(collect_focusable(&root), vec!["b"]);
}

#[test]
fn test_tab_cycles_and_wraps() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);
    let mut focus = FocusState::new();

    focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(focus.focused(), Some("first"));

    focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(focus.focused(), Some("second"));

    focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(focus.focused(), Some("first"), "wraps to start");
}

#[test]
fn test_backtab_cycles_backwards() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);
    let mut focus = FocusState::new();

    focus.process_events(&[key(KeyCode::BackTab)], &root, &layout);
    assert_eq!(focus.focused(), Some("second"));
}

#[test]
fn test_escape_blurs_before_reaching_app() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);
    let mut focus = FocusState::new();

    focus.focus("first");
    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "first".to_string()
        }]
    );
    assert_eq!(focus.focused(), None);

    // Second escape reaches the app as a key event
    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert!(matches!(
        events.as_slice(),
        [Event::Key {
            key: Key::Escape,
            ..
        }]
    ));
}

#[test]
fn test_key_events_target_focused_element() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);
    let mut focus = FocusState::new();

    focus.focus("second");
    let events = focus.process_events(&[key(KeyCode::Char('x'))], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("second".to_string()),
            key: Key::Char('x'),
            modifiers: griddom::Modifiers::new(),
        }]
    );
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_click_focuses_and_targets() {
    let root = sample_tree();
    let layout = layout_of(&root, 40, 10);
    let mut focus = FocusState::new();

    let events = focus.process_events(&[click(1, 1)], &root, &layout);
    assert_eq!(focus.focused(), Some("second"));
    assert!(events.contains(&Event::Focus {
        target: "second".to_string()
    }));

    // Clicking the non-focusable button blurs and produces a click
    let events = focus.process_events(&[click(1, 2)], &root, &layout);
    assert_eq!(focus.focused(), None);
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Click {
            target: Some(t),
            ..
        } if t == "btn"
    )));
}
