use griddom::{Align, Border, Edges, Element, Justify, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> griddom::LayoutResult {
    griddom::layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Column flow
// ============================================================================

#[test]
fn test_column_stacks_fixed_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .child(Element::box_().id("a").height(Size::Fixed(3)))
        .child(Element::box_().id("b").height(Size::Fixed(5)))
        .child(Element::box_().id("c").height(Size::Fixed(2)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().y, 0);
    assert_eq!(layout.get("b").unwrap().y, 3);
    assert_eq!(layout.get("c").unwrap().y, 8);
}

#[test]
fn test_column_gap_between_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .gap(2)
        .child(Element::box_().id("a").height(Size::Fixed(3)))
        .child(Element::box_().id("b").height(Size::Fixed(3)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().y, 0);
    assert_eq!(layout.get("b").unwrap().y, 5, "3 rows + 2 gap");
}

#[test]
fn test_fill_child_absorbs_remaining_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .child(Element::box_().id("header").height(Size::Fixed(2)))
        .child(Element::box_().id("body").height(Size::Fill))
        .child(Element::box_().id("footer").height(Size::Fixed(1)));

    let layout = layout_root(&root, 80, 24);

    let body = layout.get("body").unwrap();
    assert_eq!(body.y, 2);
    assert_eq!(body.height, 17, "20 - 2 header - 1 footer");
}

// ============================================================================
// Row flow
// ============================================================================

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Fixed(10)))
        .child(Element::box_().id("b").width(Size::Fixed(8)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().x, 0);
    assert_eq!(layout.get("b").unwrap().x, 10);
}

#[test]
fn test_auto_width_from_text_content() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(1))
        .child(Element::text("hello").id("a"))
        .child(Element::text("world!").id("b"));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().width, 5);
    assert_eq!(layout.get("b").unwrap().x, 5);
    assert_eq!(layout.get("b").unwrap().width, 6);
}

// ============================================================================
// Padding and borders
// ============================================================================

#[test]
fn test_padding_offsets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .padding(Edges::all(2))
        .child(Element::box_().id("child").height(Size::Fixed(3)));

    let layout = layout_root(&root, 80, 24);

    let child = layout.get("child").unwrap();
    assert_eq!(child.x, 2);
    assert_eq!(child.y, 2);
}

#[test]
fn test_border_reserves_one_cell() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .style(Style::new().border(Border::Single))
        .child(Element::box_().id("child").height(Size::Fixed(3)));

    let layout = layout_root(&root, 80, 24);

    let child = layout.get("child").unwrap();
    assert_eq!(child.x, 1);
    assert_eq!(child.y, 1);
}

// ============================================================================
// Justify and align
// ============================================================================

#[test]
fn test_justify_end_pushes_children_down() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .justify(Justify::End)
        .child(Element::box_().id("a").height(Size::Fixed(2)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().y, 8);
}

#[test]
fn test_align_center_in_cross_axis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .align(Align::Center)
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fixed(10))
                .height(Size::Fixed(2)),
        );

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().x, 5);
}

#[test]
fn test_stretch_fills_cross_axis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .align(Align::Stretch)
        .child(Element::box_().id("a").height(Size::Fixed(2)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout.get("a").unwrap().width, 20);
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_children_clamped_to_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .child(Element::box_().id("a").height(Size::Fixed(3)))
        .child(Element::box_().id("b").height(Size::Fixed(10)));

    let layout = layout_root(&root, 80, 24);

    let b = layout.get("b").unwrap();
    assert_eq!(b.y, 3);
    assert_eq!(b.height, 1, "clamped to remaining space");
}
