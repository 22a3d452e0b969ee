// File: src/schema.rs
// Purpose: Form schema model exchanged between builders and the renderer

use crate::error::SchemaError;
use crate::styling::Styling;
use crate::validation::pattern_syntax_error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Declared type of a form field.
///
/// Serialized as the builder's string tag (`"text"`, `"credit-card"`,
/// `"submit-button"`, ...). Tags this crate does not know survive a round trip
/// through [`FieldType::Unknown`] and render as an "unsupported" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Email,
    Textarea,
    Number,
    Date,
    Phone,
    Url,
    Select,
    Checkbox,
    Radio,
    File,
    Rating,
    Address,
    CreditCard,
    SubmitButton,
    Unknown(String),
}

impl FieldType {
    /// The wire tag for this type
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Phone => "phone",
            FieldType::Url => "url",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::File => "file",
            FieldType::Rating => "rating",
            FieldType::Address => "address",
            FieldType::CreditCard => "credit-card",
            FieldType::SubmitButton => "submit-button",
            FieldType::Unknown(tag) => tag,
        }
    }

    /// Types whose values are free text and take length bounds
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldType::Text
                | FieldType::Email
                | FieldType::Textarea
                | FieldType::Phone
                | FieldType::Url
                | FieldType::Address
                | FieldType::CreditCard
        )
    }

    /// Types that show a placeholder hint
    pub fn takes_placeholder(&self) -> bool {
        self.is_text_like()
            || matches!(self, FieldType::Number | FieldType::Date | FieldType::Select)
    }

    /// Types that pick from `options`
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }

    pub fn is_action(&self) -> bool {
        matches!(self, FieldType::SubmitButton)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "textarea" => FieldType::Textarea,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "phone" => FieldType::Phone,
            "url" => FieldType::Url,
            "select" => FieldType::Select,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "file" => FieldType::File,
            "rating" => FieldType::Rating,
            "address" => FieldType::Address,
            "credit-card" => FieldType::CreditCard,
            "submit-button" => FieldType::SubmitButton,
            _ => FieldType::Unknown(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        FieldType::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation rules attached to a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Lower numeric bound, `number` fields only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper numeric bound, `number` fields only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Regular expression tested against the whole value, unanchored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Replaces every generated message for the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

static NO_RULES: ValidationRules = ValidationRules {
    min_length: None,
    max_length: None,
    min: None,
    max: None,
    pattern: None,
    custom_message: None,
};

/// One schema entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Submission key and control name
    pub id: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display label; button text for `submit-button`
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<Styling>,
}

impl FormField {
    /// Create a field with no rules, styling or options
    pub fn new(id: impl Into<String>, field_type: impl Into<FieldType>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type: field_type.into(),
            label: label.into(),
            placeholder: None,
            required: false,
            options: Vec::new(),
            validation: None,
            styling: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_validation(mut self, rules: ValidationRules) -> Self {
        self.validation = Some(rules);
        self
    }

    pub fn with_styling(mut self, styling: Styling) -> Self {
        self.styling = Some(styling);
        self
    }

    /// Rules, or an empty rule set
    pub fn rules(&self) -> &ValidationRules {
        self.validation.as_ref().unwrap_or(&NO_RULES)
    }

    /// Whether `required` is in effect; never for action fields
    pub fn is_required(&self) -> bool {
        self.required && !self.field_type.is_action()
    }

    /// Whether the field renders a control that contributes to the submission.
    ///
    /// False for the submit button and for unknown types, which render a
    /// placeholder with nothing to fill in.
    pub fn carries_value(&self) -> bool {
        !matches!(
            self.field_type,
            FieldType::SubmitButton | FieldType::Unknown(_)
        )
    }

    pub fn custom_message(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|rules| rules.custom_message.as_deref())
    }

    pub fn pattern(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|rules| rules.pattern.as_deref())
    }
}

/// A problem that leaves the form renderable but is worth fixing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// A select or radio group with nothing to choose
    NoOptions { field_id: String, field_type: FieldType },
    UnsupportedType { field_id: String, tag: String },
    InvalidPattern {
        field_id: String,
        pattern: String,
        reason: String,
    },
    NoSubmitButton,
    MultipleSubmitButtons { count: usize },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::NoOptions { field_id, field_type } => {
                write!(f, "`{}` is a {} with no options", field_id, field_type)
            }
            SchemaWarning::UnsupportedType { field_id, tag } => {
                write!(f, "`{}` has unsupported type `{}`", field_id, tag)
            }
            SchemaWarning::InvalidPattern { field_id, pattern, .. } => {
                write!(f, "`{}` has invalid pattern {:?}", field_id, pattern)
            }
            SchemaWarning::NoSubmitButton => f.write_str("no submit button; the form cannot be submitted"),
            SchemaWarning::MultipleSubmitButtons { count } => {
                write!(f, "{} submit buttons; expected exactly one", count)
            }
        }
    }
}

/// A named, ordered collection of fields.
///
/// Field order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(default)]
    pub form_name: String,

    #[serde(default)]
    pub form_fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(form_name: impl Into<String>, form_fields: Vec<FormField>) -> Self {
        Self {
            form_name: form_name.into(),
            form_fields,
        }
    }

    /// Parse a schema from JSON and run [`check`](Self::check) on it,
    /// logging any warnings
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: FormSchema = serde_json::from_str(json)?;
        for warning in schema.check()? {
            // Each session's validator reports its own broken patterns
            if !matches!(warning, SchemaWarning::InvalidPattern { .. }) {
                warn!("Form `{}`: {}", schema.form_name, warning);
            }
        }
        Ok(schema)
    }

    /// Load a schema from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check load-time invariants.
    ///
    /// Empty and duplicate ids are rejected: they would silently overwrite
    /// each other in the submission payload. Problems that still leave a
    /// renderable form come back as warnings, in schema order with the
    /// submit button count last.
    pub fn check(&self) -> Result<Vec<SchemaWarning>, SchemaError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut warnings = Vec::new();

        for (index, field) in self.form_fields.iter().enumerate() {
            if field.id.trim().is_empty() {
                return Err(SchemaError::EmptyId { index });
            }
            if let Some(&first) = seen.get(field.id.as_str()) {
                return Err(SchemaError::DuplicateId {
                    id: field.id.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(&field.id, index);

            if field.field_type.has_options() && field.options.is_empty() {
                warnings.push(SchemaWarning::NoOptions {
                    field_id: field.id.clone(),
                    field_type: field.field_type.clone(),
                });
            }
            if let FieldType::Unknown(tag) = &field.field_type {
                warnings.push(SchemaWarning::UnsupportedType {
                    field_id: field.id.clone(),
                    tag: tag.clone(),
                });
            }
            if let Some(pattern) = field.pattern() {
                if let Some(reason) = pattern_syntax_error(pattern) {
                    warnings.push(SchemaWarning::InvalidPattern {
                        field_id: field.id.clone(),
                        pattern: pattern.to_string(),
                        reason,
                    });
                }
            }
        }

        match self.submit_buttons().count() {
            0 => warnings.push(SchemaWarning::NoSubmitButton),
            1 => {}
            count => warnings.push(SchemaWarning::MultipleSubmitButtons { count }),
        }

        Ok(warnings)
    }

    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.form_fields.iter().find(|field| field.id == id)
    }

    pub fn submit_buttons(&self) -> impl Iterator<Item = &FormField> {
        self.form_fields
            .iter()
            .filter(|field| field.field_type.is_action())
    }

    /// The first submit button, if any
    pub fn submit_button(&self) -> Option<&FormField> {
        self.submit_buttons().next()
    }

    /// Fields that are validated and submitted, in schema order
    pub fn value_fields(&self) -> impl Iterator<Item = &FormField> {
        self.form_fields.iter().filter(|field| field.carries_value())
    }
}
