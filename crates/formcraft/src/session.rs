// File: src/session.rs
// Purpose: Per-render form session tracking values and errors, and submission

use crate::config::FormcraftConfig;
use crate::error::SessionError;
use crate::schema::{FieldType, FormField, FormSchema};
use crate::validation::{FieldError, Validator, ValidatorOptions};
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Where a session is in its lifecycle.
///
/// Submission is synchronous, so there is no observable "submitting" state:
/// [`FormSession::on_submit`] ends in `SubmittedClean` or back in `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No field touched yet
    Pristine,
    Editing,
    /// The submit callback ran for the last attempt
    SubmittedClean,
}

/// Values handed to the submit callback, keyed by field id in schema order.
///
/// Checkboxes map to booleans, everything else to strings. Radio groups with
/// nothing selected are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    data: IndexMap<String, FieldValue>,
}

impl Submission {
    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.data.get(field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.data.contains_key(field_id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.data.iter()
    }

    pub fn into_inner(self) -> IndexMap<String, FieldValue> {
        self.data
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// Every field passed and the callback received this payload
    Submitted(Submission),
    /// At least one field failed; errors in schema order
    Rejected(Vec<FieldError>),
}

impl SubmissionResult {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionResult::Submitted(_))
    }
}

/// One rendering session of a schema.
///
/// Owns the current values and error messages; the schema itself is never
/// modified. Sessions share nothing, so separate sessions can live on
/// separate threads without locking.
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: FormSchema,
    validator: Validator,
    values: HashMap<String, FieldValue>,
    errors: HashMap<String, FieldError>,
    state: SessionState,
}

impl FormSession {
    /// Start a session with default validation options
    pub fn new(schema: FormSchema) -> Self {
        Self::with_options(schema, ValidatorOptions::default())
    }

    pub fn with_options(schema: FormSchema, options: ValidatorOptions) -> Self {
        let validator = Validator::new(&schema, options);

        Self {
            schema,
            validator,
            values: HashMap::new(),
            errors: HashMap::new(),
            state: SessionState::Pristine,
        }
    }

    pub fn from_config(schema: FormSchema, config: &FormcraftConfig) -> Self {
        Self::with_options(schema, config.validator_options())
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Value explicitly set through [`on_change`](Self::on_change)
    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn error(&self, field_id: &str) -> Option<&FieldError> {
        self.errors.get(field_id)
    }

    pub fn errors(&self) -> &HashMap<String, FieldError> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Value the field's control currently holds, including untouched
    /// controls: unchecked for checkboxes, nothing for radio groups, an empty
    /// string otherwise.
    pub fn current_value(&self, field: &FormField) -> Option<FieldValue> {
        if let Some(value) = self.values.get(&field.id) {
            return Some(value.clone());
        }

        match field.field_type {
            FieldType::Checkbox => Some(FieldValue::Bool(false)),
            FieldType::Radio | FieldType::Rating => None,
            _ => Some(FieldValue::Text(String::new())),
        }
    }

    /// Record a new raw value for one field and re-validate that field only.
    ///
    /// Returns the field's error after the change, if any. Other fields'
    /// errors are untouched.
    pub fn on_change(
        &mut self,
        field_id: &str,
        raw_value: impl Into<FieldValue>,
    ) -> Result<Option<&FieldError>, SessionError> {
        let field = self
            .schema
            .field(field_id)
            .ok_or_else(|| SessionError::UnknownField(field_id.to_string()))?;

        if !field.carries_value() {
            return Err(SessionError::NoValue(field_id.to_string()));
        }

        let value = raw_value.into().coerce_for(&field.field_type);

        match self.validator.validate(field, Some(&value)) {
            Ok(()) => {
                debug!("Field `{}` is valid", field_id);
                self.errors.remove(field_id);
            }
            Err(err) => {
                debug!("Field `{}` is invalid: {}", field_id, err);
                self.errors.insert(field_id.to_string(), err);
            }
        }

        self.values.insert(field_id.to_string(), value);
        self.state = SessionState::Editing;

        Ok(self.errors.get(field_id))
    }

    /// Validate every value field and, if all pass, hand the payload to
    /// `submit` exactly once.
    ///
    /// On failure the error map is replaced by the full set of current errors,
    /// entered values are kept and `submit` is not called. On success the
    /// error map is cleared.
    pub fn on_submit<F>(&mut self, submit: F) -> Result<SubmissionResult, SessionError>
    where
        F: FnOnce(&Submission),
    {
        if self.schema.submit_button().is_none() {
            return Err(SessionError::NoSubmitAction);
        }

        let mut errors = Vec::new();
        let mut data = IndexMap::new();

        for field in self.schema.value_fields() {
            let value = self.current_value(field);

            if let Err(err) = self.validator.validate(field, value.as_ref()) {
                errors.push(err);
                continue;
            }

            if let Some(value) = value {
                data.insert(field.id.clone(), value);
            }
        }

        if !errors.is_empty() {
            debug!(
                "Submission of `{}` rejected with {} invalid field(s)",
                self.schema.form_name,
                errors.len()
            );
            self.errors = errors
                .iter()
                .map(|err| (err.field_id.clone(), err.clone()))
                .collect();
            self.state = SessionState::Editing;
            return Ok(SubmissionResult::Rejected(errors));
        }

        let submission = Submission { data };
        info!(
            "Submitting `{}` with {} field(s)",
            self.schema.form_name,
            submission.len()
        );
        submit(&submission);

        self.errors.clear();
        self.state = SessionState::SubmittedClean;
        Ok(SubmissionResult::Submitted(submission))
    }
}
