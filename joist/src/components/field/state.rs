//! Field component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use griddom::TextInputData;

/// Unique identifier for a Field instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Who owns the displayed value.
///
/// The mode is a construction-time choice (`Field::controlled` /
/// `Field::uncontrolled`), never inferred from how the field is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// The displayed value is fully driven by the caller: key edits are
    /// reported as change events but only `set_value` updates the value.
    Controlled,
    /// The field owns its value after initialization; external
    /// `set_value` calls are ignored.
    Uncontrolled,
}

/// Visual variant presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

/// Size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Input kind: plain text or masked password entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
}

/// Internal state for a Field.
#[derive(Debug)]
pub(super) struct FieldInner {
    pub mode: FieldMode,
    /// Current text and cursor.
    pub data: TextInputData,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub clearable: bool,
    pub variant: Variant,
    pub size: FieldSize,
    pub kind: FieldKind,
    /// Whether a password field currently shows plain text.
    pub show_password: bool,
}

/// A single-line text control.
///
/// Beyond the text itself the field has exactly two pieces of view state:
/// the password-visibility toggle and, in controlled mode, the pass-through
/// of the caller-owned value. Everything else is presentation.
#[derive(Debug)]
pub struct Field {
    id: FieldId,
    pub(super) inner: Arc<RwLock<FieldInner>>,
    dirty: Arc<AtomicBool>,
}

impl Field {
    fn with_mode(mode: FieldMode, initial: String) -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner {
                mode,
                data: TextInputData::new(initial),
                label: None,
                placeholder: None,
                helper_text: None,
                error_message: None,
                disabled: false,
                invalid: false,
                clearable: false,
                variant: Variant::default(),
                size: FieldSize::default(),
                kind: FieldKind::default(),
                show_password: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a controlled field: the displayed value is owned by the
    /// caller and updated only through [`Field::set_value`].
    pub fn controlled() -> Self {
        Self::with_mode(FieldMode::Controlled, String::new())
    }

    /// Create an uncontrolled field that owns its value, starting from
    /// `initial`.
    pub fn uncontrolled(initial: impl Into<String>) -> Self {
        Self::with_mode(FieldMode::Uncontrolled, initial.into())
    }

    // -------------------------------------------------------------------------
    // Builder configuration
    // -------------------------------------------------------------------------

    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = Some(placeholder.into());
        }
        self
    }

    pub fn with_helper_text(self, helper: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = Some(helper.into());
        }
        self
    }

    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
        }
        self
    }

    pub fn with_variant(self, variant: Variant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    pub fn with_size(self, size: FieldSize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
        }
        self
    }

    pub fn with_kind(self, kind: FieldKind) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
        }
        self
    }

    pub fn clearable(self, clearable: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.clearable = clearable;
        }
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn invalid(self, invalid: bool) -> Self {
        self.set_invalid(invalid);
        self
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Element ID of the input line (the focus target).
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// Element ID of the clear affordance.
    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    /// Element ID of the password reveal affordance.
    pub fn reveal_id(&self) -> String {
        format!("{}-reveal", self.id)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> FieldMode {
        self.inner
            .read()
            .map(|g| g.mode)
            .unwrap_or(FieldMode::Controlled)
    }

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.data.text.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.data.text.is_empty())
            .unwrap_or(true)
    }

    pub fn kind(&self) -> FieldKind {
        self.inner.read().map(|g| g.kind).unwrap_or_default()
    }

    pub fn variant(&self) -> Variant {
        self.inner.read().map(|g| g.variant).unwrap_or_default()
    }

    pub fn size(&self) -> FieldSize {
        self.inner.read().map(|g| g.size).unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|g| g.disabled).unwrap_or(false)
    }

    pub fn is_invalid(&self) -> bool {
        self.inner.read().map(|g| g.invalid).unwrap_or(false)
    }

    pub fn is_clearable(&self) -> bool {
        self.inner.read().map(|g| g.clearable).unwrap_or(false)
    }

    /// Whether a password field currently shows its plain text.
    pub fn password_visible(&self) -> bool {
        self.inner.read().map(|g| g.show_password).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the value of a controlled field.
    ///
    /// The cursor is clamped into the new value. On an uncontrolled field
    /// this is ignored: the field owns its value after initialization.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            match guard.mode {
                FieldMode::Controlled => {
                    let value = value.into();
                    let char_count = value.chars().count();
                    guard.data.cursor = guard.data.cursor.min(char_count);
                    guard.data.text = value;
                    self.dirty.store(true, Ordering::SeqCst);
                }
                FieldMode::Uncontrolled => {
                    log::debug!("field {}: set_value ignored in uncontrolled mode", self.id);
                }
            }
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.disabled != disabled
        {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.invalid != invalid
        {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_error_message(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip password visibility. Has no effect for non-password kinds.
    /// Returns whether the value is shown after the call.
    pub fn toggle_visibility(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.kind == FieldKind::Password {
                guard.show_password = !guard.show_password;
                self.dirty.store(true, Ordering::SeqCst);
                log::debug!(
                    "field {}: password {}",
                    self.id,
                    if guard.show_password { "shown" } else { "masked" }
                );
            }
            return guard.show_password;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst)
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst)
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
