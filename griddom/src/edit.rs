use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};
use crate::layout::LayoutResult;

/// Text content and cursor for a single input element.
///
/// The cursor is a character index into the text (0..=char count).
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.cursor = 0;
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                self.cursor = self.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Tracks text input state for multiple elements, keyed by element ID.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text and cursor).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Set the text value for an input, placing the cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Process events and handle text editing.
    /// Returns the events that were generated (Change, Submit) or passed
    /// through unhandled.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        _layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let captures = find_element(root, target)
                    .map(|el| el.captures_input && !el.disabled)
                    .unwrap_or(false);
                if captures {
                    match self.get_data_mut(target).handle_key(*key, *modifiers) {
                        TextEditResult::Changed => {
                            output.push(Event::Change {
                                target: target.clone(),
                                text: self.get(target).to_string(),
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            output.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert a character index to a byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
