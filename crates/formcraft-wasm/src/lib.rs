//! formcraft validation for the browser
//!
//! WebAssembly bindings exposing the same validation engine the server uses,
//! so controls can be checked on every change without a round trip.

use formcraft::{FieldError, FieldValue, FormField, FormSchema, FormSession, Submission, SubmissionResult};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of validating a whole schema against a set of values
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaReport {
    pub valid: bool,
    /// Field id to message in schema order, empty when valid
    pub errors: IndexMap<String, String>,
    /// Submission payload, present when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Submission>,
}

/// Validate one value against one field definition.
///
/// Returns `null` when valid, or `{ fieldId, kind, message }`.
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField(
///     { id: 'email', type: 'email', label: 'Email', required: true },
///     'someone@example.com'
/// );
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: JsValue, value: JsValue) -> Result<JsValue, JsValue> {
    let field: FormField = serde_wasm_bindgen::from_value(field)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse field: {}", e)))?;
    let value: JsonValue = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse value: {}", e)))?;

    let error = check_field(&field, &value);
    Ok(serde_wasm_bindgen::to_value(&error)?)
}

/// Validate every field of a schema and build the submission payload.
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateSchema(schemaJson, { email: 'a@b.com', terms: true });
/// if (report.valid) submit(report.data);
/// ```
#[wasm_bindgen(js_name = validateSchema)]
pub fn validate_schema(schema_json: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let values: JsonValue = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    let report = check_schema(schema_json, &values).map_err(|e| JsValue::from_str(&e))?;
    // Maps become plain objects, keys in schema order
    Ok(report.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validate a field against a JSON value, after coercing it to the field's
/// control shape
pub fn check_field(field: &FormField, value: &JsonValue) -> Option<FieldError> {
    let value = FieldValue::from_json(value).map(|v| v.coerce_for(&field.field_type));
    formcraft::validate(field, value.as_ref()).err()
}

/// Run a full session over `values`: each value is applied as a change, then
/// the form is submitted.
pub fn check_schema(schema_json: &str, values: &JsonValue) -> Result<SchemaReport, String> {
    let schema = FormSchema::from_json(schema_json).map_err(|e| e.to_string())?;
    let mut session = FormSession::new(schema);

    let ids: Vec<String> = session
        .schema()
        .value_fields()
        .map(|field| field.id.clone())
        .collect();
    for id in ids {
        if let Some(value) = values.get(&id).and_then(FieldValue::from_json) {
            session.on_change(&id, value).map_err(|e| e.to_string())?;
        }
    }

    // Without a submit button there is nothing to submit, but the values can
    // still be checked field by field
    if session.schema().submit_button().is_none() {
        let errors: IndexMap<String, String> = session
            .schema()
            .value_fields()
            .filter_map(|field| {
                let value = session.current_value(field);
                formcraft::validate(field, value.as_ref())
                    .err()
                    .map(|e| (e.field_id, e.message))
            })
            .collect();
        return Ok(SchemaReport {
            valid: errors.is_empty(),
            errors,
            data: None,
        });
    }

    match session.on_submit(|_| {}).map_err(|e| e.to_string())? {
        SubmissionResult::Submitted(payload) => Ok(SchemaReport {
            valid: true,
            errors: IndexMap::new(),
            data: Some(payload),
        }),
        SubmissionResult::Rejected(errors) => Ok(SchemaReport {
            valid: false,
            errors: errors.into_iter().map(|e| (e.field_id, e.message)).collect(),
            data: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft::{FieldType, ViolationKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SCHEMA: &str = r#"{
        "formName": "signup",
        "formFields": [
            {"id": "email", "type": "email", "label": "Email", "required": true,
             "validation": {"pattern": "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$"}},
            {"id": "terms", "type": "checkbox", "label": "Terms", "required": true},
            {"id": "go", "type": "submit-button", "label": "Go"}
        ]
    }"#;

    #[test]
    fn test_check_field_coerces_checkbox_text() {
        let field = FormField::new("terms", FieldType::Checkbox, "Terms").required();

        assert!(check_field(&field, &json!("on")).is_none());
        let err = check_field(&field, &json!(false)).unwrap();
        assert_eq!(err.kind, ViolationKind::Required);
    }

    #[test]
    fn test_check_field_null_is_empty() {
        let field = FormField::new("name", FieldType::Text, "Name").required();
        assert_eq!(check_field(&field, &json!(null)).unwrap().message, "Name is required");
    }

    #[test]
    fn test_check_schema_valid() {
        let report = check_schema(SCHEMA, &json!({"email": "a@b.com", "terms": true})).unwrap();

        assert!(report.valid);
        let data = report.data.unwrap();
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({"email": "a@b.com", "terms": true}));
        assert_eq!(data.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(), vec!["email", "terms"]);
    }

    #[test]
    fn test_check_schema_invalid() {
        let report = check_schema(SCHEMA, &json!({"email": "a@b"})).unwrap();

        assert!(!report.valid);
        assert_eq!(report.errors.keys().collect::<Vec<_>>(), vec!["email", "terms"]);
        assert_eq!(report.errors.get("email").map(String::as_str), Some("Email format is invalid"));
        assert_eq!(report.errors.get("terms").map(String::as_str), Some("Terms is required"));
        assert!(report.data.is_none());
    }

    #[test]
    fn test_check_schema_without_submit_button() {
        let schema = r#"{"formName": "f", "formFields": [
            {"id": "name", "type": "text", "label": "Name", "required": true}
        ]}"#;
        let report = check_schema(schema, &json!({})).unwrap();

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_check_schema_rejects_bad_json() {
        assert!(check_schema("not json", &json!({})).is_err());
    }
}
