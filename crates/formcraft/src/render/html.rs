// File: src/render/html.rs
// Purpose: Maud markup for controls and whole forms

use super::{render_field, Control};
use crate::config::RenderConfig;
use crate::error::SessionError;
use crate::schema::FormField;
use crate::session::FormSession;
use crate::value::FieldValue;
use maud::{html, Markup, Render};

/// Render a control holding `value`.
///
/// Styling is emitted as an inline `style` attribute when `inline_styles` is
/// set; it never changes the control type or its constraints.
pub fn render_control(control: &Control, value: Option<&FieldValue>, inline_styles: bool) -> Markup {
    let text = value.and_then(FieldValue::as_text);

    match control {
        Control::Input {
            name,
            input_type,
            placeholder,
            input_mode,
            autocomplete,
            hints,
            style,
        } => {
            let style = inline_styles.then(|| style.to_inline_css());
            // Browsers never accept a preset value on file inputs
            let text = text.filter(|_| *input_type != super::InputType::File);
            html! {
                input type=(input_type.as_str()) id=(name) name=(name)
                    value=[text]
                    placeholder=[placeholder.as_deref()]
                    inputmode=[*input_mode]
                    autocomplete=[*autocomplete]
                    required[hints.required]
                    minlength=[hints.min_length]
                    maxlength=[hints.max_length]
                    min=[hints.min]
                    max=[hints.max]
                    style=[style];
            }
        }
        Control::TextArea {
            name,
            placeholder,
            hints,
            style,
        } => {
            let style = inline_styles.then(|| style.to_inline_css());
            html! {
                textarea id=(name) name=(name)
                    placeholder=[placeholder.as_deref()]
                    required[hints.required]
                    minlength=[hints.min_length]
                    maxlength=[hints.max_length]
                    style=[style] {
                    @if let Some(text) = text { (text) }
                }
            }
        }
        Control::Select {
            name,
            placeholder,
            options,
            required,
            style,
        } => {
            let style = inline_styles.then(|| style.to_inline_css());
            let selected = text.unwrap_or("");
            html! {
                select id=(name) name=(name) required[*required] style=[style] {
                    @if let Some(placeholder) = placeholder {
                        option value="" disabled selected[selected.is_empty()] { (placeholder) }
                    }
                    @for option in options {
                        option value=(option) selected[option == selected] { (option) }
                    }
                }
            }
        }
        Control::Checkbox {
            name,
            label,
            required,
        } => {
            let checked = value.and_then(FieldValue::as_bool).unwrap_or(false);
            html! {
                label.checkbox for=(name) {
                    input type="checkbox" id=(name) name=(name) value="true"
                        checked[checked] required[*required];
                    " " (label)
                }
            }
        }
        Control::RadioGroup {
            name,
            label,
            options,
            required,
        } => {
            html! {
                fieldset.radio-group {
                    legend { (label) }
                    @for (index, option) in options.iter().enumerate() {
                        @let id = format!("{}-{}", name, index);
                        label for=(id) {
                            input type="radio" id=(id) name=(name) value=(option)
                                checked[text == Some(option.as_str())]
                                required[*required && index == 0];
                            " " (option)
                        }
                    }
                }
            }
        }
        Control::Submit { label, style } => {
            let style = inline_styles.then(|| style.to_inline_css());
            html! {
                button type="submit" style=[style] { (label) }
            }
        }
        Control::Unsupported { name, tag } => {
            html! {
                div.unsupported-field data-field=(name) {
                    "Unsupported field type: " (tag)
                }
            }
        }
    }
}

impl Render for Control {
    fn render(&self) -> Markup {
        render_control(self, None, true)
    }
}

/// Label, control and error annotation for one field
fn render_field_block(session: &FormSession, field: &FormField, config: &RenderConfig) -> Markup {
    let control = render_field(field);
    let value = session.current_value(field);
    let error = session.error(&field.id);

    html! {
        div.form-field data-field=(field.id) {
            @if !control.labels_itself() {
                label for=(field.id) {
                    (field.label)
                    @if field.is_required() { span.required-mark { " *" } }
                }
            }
            (render_control(&control, value.as_ref(), config.inline_styles))
            @if let Some(error) = error {
                p class=(config.error_class) id=(format!("{}-error", field.id)) role="alert" {
                    (error.message)
                }
            }
        }
    }
}

/// Render the whole form with the session's current values and errors
pub fn render_form(session: &FormSession, config: &RenderConfig) -> Markup {
    let schema = session.schema();

    html! {
        form name=(schema.form_name) method=(config.form_method) action=[config.form_action.as_deref()] {
            @for field in &schema.form_fields {
                (render_field_block(session, field, config))
            }
        }
    }
}

/// Render one field block, e.g. to swap in after [`FormSession::on_change`]
pub fn render_field_fragment(
    session: &FormSession,
    field_id: &str,
    config: &RenderConfig,
) -> Result<Markup, SessionError> {
    let field = session
        .schema()
        .field(field_id)
        .ok_or_else(|| SessionError::UnknownField(field_id.to_string()))?;

    Ok(render_field_block(session, field, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormSchema, ValidationRules};

    fn schema() -> FormSchema {
        FormSchema::new(
            "contact",
            vec![
                FormField::new("email", FieldType::Email, "Email")
                    .required()
                    .with_placeholder("you@example.com"),
                FormField::new("topic", FieldType::Select, "Topic")
                    .with_placeholder("Choose")
                    .with_options(["Sales", "Support"]),
                FormField::new("plan", FieldType::Radio, "Plan").with_options(["Free", "Pro"]),
                FormField::new("agree", FieldType::Checkbox, "I agree"),
                FormField::new("sig", "signature", "Signature"),
                FormField::new("send", FieldType::SubmitButton, "Send"),
            ],
        )
    }

    #[test]
    fn test_input_markup() {
        let field = FormField::new("code", FieldType::Text, "Code")
            .required()
            .with_validation(ValidationRules {
                min_length: Some(3),
                ..ValidationRules::default()
            });

        let html = render_control(&render_field(&field), Some(&FieldValue::from("ab")), false).into_string();
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"name="code""#));
        assert!(html.contains(r#"value="ab""#));
        assert!(html.contains("required"));
        assert!(html.contains(r#"minlength="3""#));
        assert!(!html.contains("style="));
    }

    #[test]
    fn test_pattern_stays_out_of_markup() {
        let field = FormField::new("code", FieldType::Text, "Code").with_validation(ValidationRules {
            pattern: Some("[0-9]{3}".to_string()),
            ..ValidationRules::default()
        });
        let value = FieldValue::from("abc123def");
        assert!(crate::validation::validate(&field, Some(&value)).is_ok());

        let html = render_control(&render_field(&field), Some(&value), false).into_string();
        assert!(!html.contains("pattern="));
        assert!(!html.contains("[0-9]{3}"));
    }

    #[test]
    fn test_values_are_escaped() {
        let field = FormField::new("q", FieldType::Text, "Q");
        let html = render_control(&render_field(&field), Some(&FieldValue::from("\"><script>")), true)
            .into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_form_renders_every_field_in_order() {
        let session = FormSession::new(schema());
        let html = render_form(&session, &RenderConfig::default()).into_string();

        let positions: Vec<usize> = ["email", "topic", "plan", "agree", "sig"]
            .iter()
            .map(|id| html.find(&format!(r#"data-field="{}""#, id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains(r#"<form name="contact" method="post">"#));
        assert!(html.contains(r#"<button type="submit""#));
        assert!(html.contains("Unsupported field type: signature"));
        assert!(html.contains(r#"<option value="" disabled selected>Choose</option>"#));
    }

    #[test]
    fn test_radio_buttons_share_name() {
        let session = FormSession::new(schema());
        let html = render_form(&session, &RenderConfig::default()).into_string();
        assert_eq!(html.matches(r#"type="radio" id="plan-"#).count(), 2);
        assert_eq!(html.matches(r#"name="plan""#).count(), 2);
    }

    #[test]
    fn test_error_annotation_beneath_invalid_field() {
        let mut session = FormSession::new(schema());
        session.on_change("email", "").unwrap();

        let config = RenderConfig::default();
        let html = render_field_fragment(&session, "email", &config).unwrap().into_string();
        assert!(html.contains(r#"<p class="field-error" id="email-error" role="alert">Email is required</p>"#));

        let other = render_field_fragment(&session, "topic", &config).unwrap().into_string();
        assert!(!other.contains("field-error"));
    }

    #[test]
    fn test_fragment_unknown_field() {
        let session = FormSession::new(schema());
        assert!(render_field_fragment(&session, "missing", &RenderConfig::default()).is_err());
    }

    #[test]
    fn test_selected_values_round_trip_into_markup() {
        let mut session = FormSession::new(schema());
        session.on_change("topic", "Support").unwrap();
        session.on_change("plan", "Pro").unwrap();
        session.on_change("agree", true).unwrap();

        let html = render_form(&session, &RenderConfig::default()).into_string();
        assert!(html.contains(r#"<option value="Support" selected>Support</option>"#));
        assert!(html.contains(r#"value="Pro" checked"#));
        assert!(html.contains(r#"value="true" checked"#));
    }
}
