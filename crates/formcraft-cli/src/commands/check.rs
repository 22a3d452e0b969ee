use anyhow::{Context, Result};
use colored::Colorize;
use formcraft::{FormSchema, SchemaWarning};
use std::fs;
use std::path::Path;

pub fn execute(schema_path: &Path) -> Result<()> {
    let content = fs::read_to_string(schema_path)
        .with_context(|| format!("Failed to read schema: {:?}", schema_path))?;
    let (schema, warnings) = parse(&content)
        .with_context(|| format!("Failed to load schema: {:?}", schema_path))?;

    println!("{} {}", "Form:".green().bold(), schema.form_name.cyan());
    println!();

    for field in &schema.form_fields {
        let marker = if field.is_required() { "*" } else { " " };
        println!("  {} {:<20} {}", marker, field.id, field.field_type.to_string().dimmed());
    }
    println!();

    for warning in &warnings {
        println!("{} {}", "⚠".yellow(), warning);
    }

    println!("{}", "Schema is usable".green().bold());
    Ok(())
}

/// Parse a schema and collect its warnings without logging them
pub fn parse(json: &str) -> Result<(FormSchema, Vec<SchemaWarning>)> {
    let schema: FormSchema = serde_json::from_str(json)?;
    let warnings = schema.check()?;
    Ok((schema, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_schema_has_no_warnings() {
        let json = r#"{"formName": "ok", "formFields": [
            {"id": "name", "type": "text", "label": "Name"},
            {"id": "go", "type": "submit-button", "label": "Go"}
        ]}"#;

        let (schema, warnings) = parse(json).unwrap();
        assert_eq!(schema.form_fields.len(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_reports_schema_warnings() {
        let json = r#"{"formName": "messy", "formFields": [
            {"id": "pick", "type": "select", "label": "Pick"},
            {"id": "sig", "type": "signature", "label": "Signature"},
            {"id": "code", "type": "text", "label": "Code", "validation": {"pattern": "("}}
        ]}"#;

        let (_, warnings) = parse(json).unwrap();
        assert_eq!(
            warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "`pick` is a select with no options".to_string(),
                "`sig` has unsupported type `signature`".to_string(),
                "`code` has invalid pattern \"(\"".to_string(),
                "no submit button; the form cannot be submitted".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_an_error() {
        let json = r#"{"formName": "dup", "formFields": [
            {"id": "a", "type": "text", "label": "A"},
            {"id": "a", "type": "text", "label": "A"}
        ]}"#;
        assert!(parse(json).is_err());
    }
}
