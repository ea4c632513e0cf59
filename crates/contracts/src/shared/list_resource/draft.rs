//! Form drafts backing the create/edit dialog

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::filter::value_text;

/// Value of one form input
#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue {
    Text(String),
    Flag(bool),
}

impl DraftValue {
    pub fn as_text(&self) -> String {
        match self {
            DraftValue::Text(s) => s.clone(),
            DraftValue::Flag(b) => b.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            DraftValue::Flag(b) => *b,
            DraftValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            DraftValue::Text(s) => s.trim().is_empty(),
            DraftValue::Flag(_) => false,
        }
    }
}

/// Field name (wire name) → draft value
pub type FormDraft = BTreeMap<String, DraftValue>;

/// How a form field is edited and sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string; blank is sent as `""`
    Text,
    /// Nullable string; blank is sent as `null`
    OptionalText,
    /// Numeric input parsed with parse-or-zero
    Number,
    /// Checkbox
    Flag,
    /// `YYYY-MM-DD`; blank is sent as `null`
    Date,
}

/// Initial value of a field in a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Empty,
    Text(&'static str),
    Flag(bool),
    /// Current user name from the session
    Actor,
}

/// One input of the create/edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: FieldDefault::Empty,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::OptionalText)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Checkbox, checked by default
    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self {
            default: FieldDefault::Flag(true),
            ..Self::new(name, label, FieldKind::Flag)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: FieldDefault) -> Self {
        Self { default, ..self }
    }

    fn initial_value(&self, actor: Option<&str>) -> DraftValue {
        match (self.kind, self.default) {
            (FieldKind::Flag, FieldDefault::Flag(b)) => DraftValue::Flag(b),
            (FieldKind::Flag, _) => DraftValue::Flag(false),
            (_, FieldDefault::Text(s)) => DraftValue::Text(s.to_string()),
            (_, FieldDefault::Flag(b)) => DraftValue::Text(b.to_string()),
            (_, FieldDefault::Actor) => DraftValue::Text(actor.unwrap_or_default().to_string()),
            (FieldKind::Number, FieldDefault::Empty) => DraftValue::Text("0".to_string()),
            (_, FieldDefault::Empty) => DraftValue::Text(String::new()),
        }
    }
}

/// `Number(value) || 0`: blank, malformed, NaN and infinite input all become 0
pub fn parse_or_zero(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Blank form for a new record
pub fn default_draft(fields: &[FieldSpec], actor: Option<&str>) -> FormDraft {
    fields
        .iter()
        .map(|spec| (spec.name.to_string(), spec.initial_value(actor)))
        .collect()
}

/// Form seeded from an existing row (JSON projection).
///
/// Numbers become strings for input binding, booleans stay booleans, `null` becomes `""`.
pub fn draft_from_row(fields: &[FieldSpec], row: &Value) -> FormDraft {
    fields
        .iter()
        .map(|spec| {
            let raw = row.get(spec.name).unwrap_or(&Value::Null);
            let value = match spec.kind {
                FieldKind::Flag => DraftValue::Flag(match raw {
                    Value::Bool(b) => *b,
                    other => DraftValue::Text(value_text(other)).as_flag(),
                }),
                FieldKind::Date => DraftValue::Text(date_part(&value_text(raw))),
                _ => DraftValue::Text(value_text(raw)),
            };
            (spec.name.to_string(), value)
        })
        .collect()
}

/// JSON value sent for one field
pub fn wire_value(spec: &FieldSpec, value: &DraftValue) -> Value {
    match spec.kind {
        FieldKind::Flag => Value::Bool(value.as_flag()),
        FieldKind::Number => number_value(parse_or_zero(&value.as_text())),
        FieldKind::Text => Value::String(value.as_text()),
        FieldKind::OptionalText | FieldKind::Date => {
            if value.is_blank() {
                Value::Null
            } else {
                Value::String(value.as_text())
            }
        }
    }
}

/// Request body: the draft laid over `baseline` (the original row on update, empty on create).
///
/// Fields of the baseline that the form does not edit are carried over untouched.
pub fn payload_from_draft(fields: &[FieldSpec], draft: &FormDraft, baseline: Option<&Value>) -> Value {
    let mut body = match baseline {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };
    for spec in fields {
        if let Some(value) = draft.get(spec.name) {
            body.insert(spec.name.to_string(), wire_value(spec, value));
        }
    }
    Value::Object(body)
}

fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or_else(|| Value::from(0))
    }
}

fn date_part(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}
