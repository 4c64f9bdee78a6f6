use griddom::{
    Border, Color, DefaultTheme, Edges, Element, Event, FocusState, Key, Size, Style, Terminal,
    TextInputState,
};

fn main() -> std::io::Result<()> {
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut text_inputs = TextInputState::new();
    let theme = DefaultTheme::new();

    text_inputs.set("input", "");

    loop {
        let is_focused = focus.focused() == Some("input");
        let cursor = text_inputs
            .get_data("input")
            .map(|d| d.cursor)
            .unwrap_or(0);

        let root = Element::col()
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
            .padding(Edges::all(2))
            .gap(1)
            .child(Element::text("Text Input Demo - type something, Esc to quit"))
            .child(Element::text(""))
            .child(
                Element::text_input(text_inputs.get("input"))
                    .id("input")
                    .width(Size::Fixed(40))
                    .height(Size::Fixed(3))
                    .placeholder("Type here...")
                    .cursor(cursor)
                    .input_focused(is_focused)
                    .style(
                        Style::new()
                            .background(Color::oklch(0.2, 0.02, 250.0))
                            .border(Border::Single),
                    ),
            )
            .child(Element::text(""))
            .child(Element::text(format!(
                "You typed: {}",
                text_inputs.get("input")
            )));

        term.render(&root, &theme)?;

        let raw_events = term.poll(None)?;
        let events = focus.process_events(&raw_events, &root, term.layout());
        let events = text_inputs.process_events(&events, &root, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                return Ok(());
            }
        }
    }
}
