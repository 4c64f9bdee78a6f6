//! Field rendering.

use griddom::{Border, Color, Edges, Element, Size, Style};

use super::state::{Field, FieldKind, FieldMode, FieldSize, Variant};

/// Mask character for password entry.
const MASK: char = '•';

/// Project the field state to an element subtree.
///
/// `focused` tells the input line to show its cursor; the host derives it
/// from its focus state.
pub fn render(field: &Field, focused: bool) -> Element {
    let Ok(guard) = field.inner.read() else {
        return Element::box_();
    };

    let mut column = Element::col().id(field.id_string()).width(Size::Auto);

    if let Some(label) = &guard.label {
        column = column.child(
            Element::text(label.clone())
                .id(format!("{}-label", field.id()))
                .style(Style::new().bold()),
        );
    }

    // Input line with optional affordances to its right
    let mut line = Element::row().gap(1);

    let base_style = input_style(guard.variant, guard.invalid);
    let mut input = Element::text_input(guard.data.text.clone())
        .id(field.input_id())
        .width(Size::Fixed(input_width(guard.size)))
        .padding(Edges::horizontal(input_padding(guard.size)))
        .cursor(guard.data.cursor)
        .input_focused(focused)
        .disabled(guard.disabled)
        .style(base_style.clone())
        .style_disabled(base_style.dim());

    if let Some(placeholder) = &guard.placeholder {
        input = input.placeholder(placeholder.clone());
    }

    if guard.kind == FieldKind::Password && !guard.show_password {
        input = input.masked(MASK);
    }

    if guard.variant == Variant::Outlined {
        input = input.height(Size::Fixed(3));
    }

    line = line.child(input);

    // Clear affordance: needs a value to clear, an enabled control, and a
    // controlled wiring to notify
    let show_clear = guard.clearable
        && !guard.data.text.is_empty()
        && !guard.disabled
        && guard.mode == FieldMode::Controlled;
    if show_clear {
        line = line.child(
            Element::text("✕")
                .id(field.clear_id())
                .clickable(true)
                .style(Style::new().foreground(Color::var("muted"))),
        );
    }

    if guard.kind == FieldKind::Password && !guard.disabled {
        line = line.child(
            Element::text(if guard.show_password { "◉" } else { "◎" })
                .id(field.reveal_id())
                .clickable(true)
                .style(Style::new().foreground(Color::var("muted"))),
        );
    }

    column = column.child(line);

    // Error text replaces helper text; they are never shown together
    if guard.invalid
        && let Some(error) = &guard.error_message
    {
        column = column.child(
            Element::text(error.clone())
                .id(format!("{}-error", field.id()))
                .style(Style::new().foreground(Color::var("error"))),
        );
    } else if let Some(helper) = &guard.helper_text {
        column = column.child(
            Element::text(helper.clone())
                .id(format!("{}-helper", field.id()))
                .style(Style::new().foreground(Color::var("muted"))),
        );
    }

    column
}

fn input_width(size: FieldSize) -> u16 {
    match size {
        FieldSize::Small => 24,
        FieldSize::Medium => 32,
        FieldSize::Large => 44,
    }
}

fn input_padding(size: FieldSize) -> u16 {
    match size {
        FieldSize::Small => 1,
        FieldSize::Medium => 2,
        FieldSize::Large => 3,
    }
}

fn input_style(variant: Variant, invalid: bool) -> Style {
    let style = match variant {
        Variant::Filled => Style::new().background(Color::var("surface")),
        Variant::Outlined => Style::new()
            .background(Color::var("background"))
            .border(Border::Single),
        Variant::Ghost => Style::new().underline(),
    };

    if invalid {
        style.foreground(Color::var("error"))
    } else {
        style
    }
}
