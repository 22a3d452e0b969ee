use anyhow::{bail, Context, Result};
use colored::Colorize;
use formcraft::{FieldValue, FormSchema, FormSession, FormcraftConfig, SubmissionResult};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Returns whether the form was submitted
pub fn execute(schema_path: &Path, values_path: &Path, config: &FormcraftConfig) -> Result<bool> {
    let schema = FormSchema::load(schema_path)
        .with_context(|| format!("Failed to load schema: {:?}", schema_path))?;

    let content = fs::read_to_string(values_path)
        .with_context(|| format!("Failed to read values file: {:?}", values_path))?;
    let values: JsonValue = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse values file: {:?}", values_path))?;

    let mut session = FormSession::from_config(schema, config);
    let result = fill_and_submit(&mut session, &values, |data| {
        // Payload goes to stdout so it can be piped; everything else to stderr
        match data.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to encode submission: {}", e),
        }
    })?;

    match result {
        SubmissionResult::Submitted(payload) => {
            eprintln!("{} {} field(s)", "Submitted".green().bold(), payload.len());
            Ok(true)
        }
        SubmissionResult::Rejected(errors) => {
            eprintln!("{}", "Submission rejected".red().bold());
            for error in errors {
                eprintln!("  {} {}", format!("{}:", error.field_id).yellow(), error.message);
            }
            Ok(false)
        }
    }
}

/// Apply every value through `on_change`, in schema order, then submit
pub fn fill_and_submit<F>(session: &mut FormSession, values: &JsonValue, submit: F) -> Result<SubmissionResult>
where
    F: FnOnce(&formcraft::Submission),
{
    let object = match values.as_object() {
        Some(object) => object,
        None => bail!("values must be a JSON object of field id to value"),
    };

    let ids: Vec<String> = session
        .schema()
        .value_fields()
        .map(|field| field.id.clone())
        .collect();

    for key in object.keys() {
        if !ids.contains(key) {
            tracing::warn!("Ignoring value for unknown or non-input field `{}`", key);
        }
    }

    for id in ids {
        let value = match object.get(&id).and_then(FieldValue::from_json) {
            Some(value) => value,
            None => continue,
        };
        session.on_change(&id, value)?;
    }

    Ok(session.on_submit(submit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft::{FieldType, FormField, ValidationRules};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schema() -> FormSchema {
        FormSchema::new(
            "signup",
            vec![
                FormField::new("name", FieldType::Text, "Name").required(),
                FormField::new("age", FieldType::Number, "Age").with_validation(ValidationRules {
                    min: Some(18.0),
                    ..ValidationRules::default()
                }),
                FormField::new("news", FieldType::Checkbox, "News"),
                FormField::new("go", FieldType::SubmitButton, "Go"),
            ],
        )
    }

    #[test]
    fn test_fill_and_submit_accepts_numbers() {
        let mut session = FormSession::new(schema());
        let mut payload = None;
        let result = fill_and_submit(
            &mut session,
            &json!({ "name": "Ada", "age": 36, "news": true, "go": "ignored" }),
            |data| payload = Some(data.clone()),
        )
        .unwrap();

        assert!(result.is_submitted());
        assert_eq!(
            serde_json::to_value(payload.unwrap()).unwrap(),
            json!({ "name": "Ada", "age": "36", "news": true })
        );
    }

    #[test]
    fn test_fill_and_submit_reports_errors() {
        let mut session = FormSession::new(schema());
        let result = fill_and_submit(&mut session, &json!({ "age": "17" }), |_| {
            panic!("must not submit")
        })
        .unwrap();

        match result {
            SubmissionResult::Rejected(errors) => {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                assert_eq!(messages, vec!["Name is required", "Age must be at least 18"]);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_values_must_be_an_object() {
        let mut session = FormSession::new(schema());
        assert!(fill_and_submit(&mut session, &json!(["Ada"]), |_| {}).is_err());
    }
}
