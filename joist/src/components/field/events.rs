//! Event routing for the field component.

use griddom::{Event, Key, Modifiers, TextEditResult};

use super::state::{Field, FieldMode};

/// Notifications emitted by the field in response to user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed (controlled mode only; carries the full new
    /// value for the caller to store and feed back in).
    Changed(String),
    /// Enter was pressed in the input.
    Submitted,
}

impl Field {
    /// Route a targeted event into the field.
    ///
    /// Key events aimed at the input line are edited per the field's mode;
    /// clicks on the clear/reveal affordances invoke them.
    pub fn on_event(&self, event: &Event) -> Option<FieldEvent> {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.input_id() => self.on_key(*key, *modifiers),

            Event::Click {
                target: Some(target),
                ..
            } => {
                if *target == self.clear_id() {
                    self.clear()
                } else if *target == self.reveal_id() {
                    self.toggle_visibility();
                    None
                } else {
                    None
                }
            }

            _ => None,
        }
    }

    /// Handle a key press aimed at the input line.
    ///
    /// In controlled mode the edit is applied to a scratch copy: the
    /// stored value stays untouched and the result is only reported, so a
    /// caller that drops the event keeps the field unchanged. The cursor
    /// still tracks the edit so the caller's `set_value` round-trip lands
    /// where the user typed. Uncontrolled mode applies the edit in place
    /// and reports nothing.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> Option<FieldEvent> {
        if self.is_disabled() {
            return None;
        }

        let Ok(mut guard) = self.inner.write() else {
            return None;
        };

        match guard.mode {
            FieldMode::Controlled => {
                let mut scratch = guard.data.clone();
                match scratch.handle_key(key, modifiers) {
                    TextEditResult::Changed => {
                        guard.data.cursor = scratch.cursor;
                        drop(guard);
                        self.mark_dirty();
                        Some(FieldEvent::Changed(scratch.text))
                    }
                    TextEditResult::Submitted => Some(FieldEvent::Submitted),
                    TextEditResult::Handled => {
                        guard.data.cursor = scratch.cursor;
                        drop(guard);
                        self.mark_dirty();
                        None
                    }
                    TextEditResult::Ignored => None,
                }
            }
            FieldMode::Uncontrolled => match guard.data.handle_key(key, modifiers) {
                TextEditResult::Changed | TextEditResult::Handled => {
                    drop(guard);
                    self.mark_dirty();
                    None
                }
                TextEditResult::Submitted => Some(FieldEvent::Submitted),
                TextEditResult::Ignored => None,
            },
        }
    }

    /// Invoke the clear affordance.
    ///
    /// Only reachable when the field is clearable, holds a value, is not
    /// disabled, and is controlled (an uncontrolled field has no change
    /// notifier, so the affordance is never rendered). Notifies with the
    /// empty value; the stored value itself is caller-owned.
    pub fn clear(&self) -> Option<FieldEvent> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };

        if !guard.clearable || guard.disabled || guard.data.text.is_empty() {
            return None;
        }

        match guard.mode {
            FieldMode::Controlled => {
                guard.data.cursor = 0;
                drop(guard);
                self.mark_dirty();
                log::debug!("field {}: cleared", self.id());
                Some(FieldEvent::Changed(String::new()))
            }
            FieldMode::Uncontrolled => None,
        }
    }
}
