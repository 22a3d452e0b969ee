// File: src/validation/mod.rs
// Purpose: Validation engine deciding whether a field value is acceptable

use crate::schema::{FormField, FormSchema};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

mod pattern;
mod rules;

use pattern::CompiledPattern;

pub use pattern::PatternPolicy;
pub(crate) use pattern::syntax_error as pattern_syntax_error;

/// Which rule a value broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Length,
    Range,
    Pattern,
}

/// A failed check together with the message shown beneath the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_id: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    /// Build an error for `field`, preferring its custom message over `default`
    pub(crate) fn new(field: &FormField, kind: ViolationKind, default: impl FnOnce() -> String) -> Self {
        let message = match field.custom_message() {
            Some(custom) => custom.to_string(),
            None => default(),
        };

        Self {
            field_id: field.id.clone(),
            kind,
            message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Knobs for the validation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub pattern_policy: PatternPolicy,
    /// Treat whitespace-only text as empty
    pub trim_values: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            pattern_policy: PatternPolicy::Skip,
            trim_values: true,
        }
    }
}

/// Validate one value against one field with default options.
///
/// The field's pattern is compiled on every call; an invalid pattern is
/// logged and the pattern check skipped. Use a [`Validator`] to compile a
/// schema's patterns once.
pub fn validate(field: &FormField, value: Option<&FieldValue>) -> Result<(), FieldError> {
    let compiled = field.pattern().map(|source| pattern::compile(&field.id, source));
    rules::evaluate(field, value, &ValidatorOptions::default(), compiled.as_ref())
}

/// Validation engine bound to one schema.
///
/// Patterns are compiled once at construction, so an invalid pattern is
/// reported once rather than on every keystroke.
#[derive(Debug, Clone)]
pub struct Validator {
    options: ValidatorOptions,
    /// Compiled patterns keyed by their source text
    patterns: HashMap<String, CompiledPattern>,
}

impl Validator {
    pub fn new(schema: &FormSchema, options: ValidatorOptions) -> Self {
        let mut patterns = HashMap::new();

        for field in &schema.form_fields {
            if let Some(source) = field.pattern() {
                if !patterns.contains_key(source) {
                    patterns.insert(source.to_string(), pattern::compile(&field.id, source));
                }
            }
        }

        Self { options, patterns }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Patterns in the schema that failed to compile
    pub fn invalid_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(|(_, compiled)| !compiled.is_valid())
            .map(|(source, _)| source.as_str())
    }

    /// Validate a value. Pure for a given validator.
    pub fn validate(&self, field: &FormField, value: Option<&FieldValue>) -> Result<(), FieldError> {
        match field.pattern() {
            Some(source) => match self.patterns.get(source) {
                Some(compiled) => rules::evaluate(field, value, &self.options, Some(compiled)),
                None => {
                    // Field from outside the schema this validator was built for
                    let compiled = pattern::compile(&field.id, source);
                    rules::evaluate(field, value, &self.options, Some(&compiled))
                }
            },
            None => rules::evaluate(field, value, &self.options, None),
        }
    }
}
