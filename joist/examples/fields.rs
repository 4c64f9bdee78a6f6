//! Field showcase: variants, sizes, password masking, clearing, and
//! validation display. Tab between the inputs, Esc quits.

use std::fs::File;

use joist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), HarnessError> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("fields.log")?,
    );

    let filled = Field::uncontrolled("prefilled")
        .with_label("Filled")
        .with_variant(Variant::Filled)
        .with_helper_text("An uncontrolled field owning its value");

    let outlined = Field::controlled()
        .with_label("Outlined (clearable)")
        .with_placeholder("Type, then hit the ✕")
        .clearable(true);

    let ghost = Field::uncontrolled("")
        .with_label("Ghost, small")
        .with_variant(Variant::Ghost)
        .with_size(FieldSize::Small)
        .with_placeholder("underlined");

    let password = Field::uncontrolled("hunter2")
        .with_label("Password")
        .with_kind(FieldKind::Password)
        .with_helper_text("Click the eye to reveal");

    let invalid = Field::controlled()
        .with_label("Validated")
        .with_size(FieldSize::Large)
        .invalid(true)
        .with_error_message("This value is not acceptable")
        .with_helper_text("Never shown while invalid");

    let disabled = Field::uncontrolled("can't touch this")
        .with_label("Disabled")
        .disabled(true);

    let fields = [&filled, &outlined, &ghost, &password, &invalid, &disabled];

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let theme = DefaultTheme::new();

    loop {
        let mut page = Element::col()
            .id("page")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(2))
            .gap(1)
            .child(Element::text("Field Showcase").style(Style::new().bold()));

        for f in fields {
            let focused = focus.focused() == Some(f.input_id().as_str());
            page = page.child(field::render(f, focused));
        }

        term.render(&page, &theme)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &page, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                return Ok(());
            }

            for f in fields {
                if let Some(FieldEvent::Changed(value)) = f.on_event(event) {
                    f.set_value(value);
                }
            }
        }
    }
}
