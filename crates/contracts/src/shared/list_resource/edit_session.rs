use serde_json::Value;

use super::draft::{DraftValue, FormDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update,
}

/// Draft state behind the create/edit dialog.
///
/// `Idle` → `Open(mode)` → `Submitting` → back to `Idle` on success or to `Open(mode)`
/// with `error` set on failure. Cancel is refused while a save is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    mode: Option<EditMode>,
    target_id: Option<String>,
    fields: FormDraft,
    baseline: Option<Value>,
    submitting: bool,
    error: Option<String>,
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<EditMode> {
        self.mode
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn fields(&self) -> &FormDraft {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&DraftValue> {
        self.fields.get(name)
    }

    /// Original row JSON of an update, `None` for a create
    pub fn baseline(&self) -> Option<&Value> {
        self.baseline.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_create(&mut self, defaults: FormDraft) {
        *self = Self {
            mode: Some(EditMode::Create),
            fields: defaults,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, target_id: String, fields: FormDraft, baseline: Value) {
        *self = Self {
            mode: Some(EditMode::Update),
            target_id: Some(target_id),
            fields,
            baseline: Some(baseline),
            ..Self::default()
        };
    }

    /// Ignored while idle or submitting
    pub fn set_field(&mut self, name: &str, value: DraftValue) -> bool {
        if !self.is_open() || self.submitting {
            return false;
        }
        self.fields.insert(name.to_string(), value);
        true
    }

    /// Inline error without leaving the open state (client-side validation)
    pub fn reject(&mut self, message: String) {
        if self.is_open() {
            self.error = Some(message);
        }
    }

    /// Enter `Submitting`; `false` if nothing is open or a save is already running
    pub fn begin_submit(&mut self) -> bool {
        if !self.is_open() || self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        *self = Self::default();
    }

    /// Back to the originating open state with the form intact
    pub fn fail(&mut self, message: String) {
        if self.is_open() {
            self.submitting = false;
            self.error = Some(message);
        }
    }

    /// Discard the draft. Refused while submitting.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        *self = Self::default();
        true
    }
}
