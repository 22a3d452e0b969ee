// File: src/value.rs
// Purpose: Raw values held by rendered controls

use crate::schema::FieldType;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Current value of one control.
///
/// Checkboxes hold a boolean, every other control holds the raw string it
/// would post (numbers included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Empty means an unchecked box, an empty string, or (with `trim`) a
    /// whitespace-only string.
    pub fn is_empty(&self, trim: bool) -> bool {
        match self {
            FieldValue::Bool(checked) => !checked,
            FieldValue::Text(text) if trim => formcraft_validation::is_blank(text),
            FieldValue::Text(text) => text.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(checked) => Some(*checked),
            FieldValue::Text(_) => None,
        }
    }

    /// Convert to the shape a control of `field_type` holds.
    ///
    /// HTML posts checkbox state as text ("on", "true"); everything that is
    /// not a checkbox is read back as text.
    pub fn coerce_for(self, field_type: &FieldType) -> Self {
        match (field_type, self) {
            (FieldType::Checkbox, FieldValue::Text(text)) => FieldValue::Bool(matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "on" | "true" | "1" | "yes" | "checked"
            )),
            (FieldType::Checkbox, value) => value,
            (_, FieldValue::Bool(checked)) => FieldValue::Text(checked.to_string()),
            (_, value) => value,
        }
    }

    /// Read a value from arbitrary JSON. `null`, arrays and objects have no
    /// control representation.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Bool(checked) => Some(FieldValue::Bool(*checked)),
            JsonValue::String(text) => Some(FieldValue::Text(text.clone())),
            JsonValue::Number(number) => Some(FieldValue::Text(number.to_string())),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Bool(checked)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(checked) => write!(f, "{}", checked),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}
