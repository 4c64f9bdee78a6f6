use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and translates raw terminal
/// events into targeted high-level events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::trace!("focus -> {id}");
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) => focusable[focusable.len() - 1].clone(),
                Some(i) => focusable[i - 1].clone(),
                None => focusable[focusable.len() - 1].clone(),
            },
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab/BackTab cycle focus, Escape blurs, clicks focus the focusable
    /// element under the pointer and produce a targeted `Click` for the
    /// deepest clickable one. Remaining key presses are targeted at the
    /// focused element.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab {
                        self.cycle(root, true, &mut events);
                        continue;
                    }

                    if key == Key::BackTab {
                        self.cycle(root, false, &mut events);
                        continue;
                    }

                    // Escape blurs a focused element; only reaches the app
                    // as a key event when nothing is focused
                    if key == Key::Escape {
                        if let Some(old) = self.focused.take() {
                            events.push(Event::Blur { target: old });
                            continue;
                        }
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let (x, y) = (mouse_event.column, mouse_event.row);

                        // Click-to-focus
                        match hit_test_focusable(layout, root, x, y) {
                            Some(id) => {
                                if self.focused.as_deref() != Some(&id) {
                                    if let Some(old) = self.focused.take() {
                                        events.push(Event::Blur { target: old });
                                    }
                                    self.focused = Some(id.clone());
                                    events.push(Event::Focus { target: id });
                                }
                            }
                            None => {
                                if let Some(old) = self.focused.take() {
                                    events.push(Event::Blur { target: old });
                                }
                            }
                        }

                        events.push(Event::Click {
                            target: hit_test(layout, root, x, y),
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }

    fn cycle(&mut self, root: &Element, forward: bool, events: &mut Vec<Event>) {
        let old = self.focused.clone();
        let new = if forward {
            self.focus_next(root)
        } else {
            self.focus_prev(root)
        };
        if let Some(new) = new {
            if let Some(old) = old {
                events.push(Event::Blur { target: old });
            }
            events.push(Event::Focus { target: new });
        }
    }
}

/// Collect the IDs of all focusable, enabled elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect(element: &Element, out: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        out.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, out);
        }
    }
}
