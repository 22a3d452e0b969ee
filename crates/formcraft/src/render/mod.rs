// File: src/render/mod.rs
// Purpose: Dispatch from field type to the control that renders it

use crate::schema::{FieldType, FormField};
use crate::styling::ResolvedStyle;
use tracing::debug;

mod html;

pub use html::{render_control, render_field_fragment, render_form};

/// Scale offered by a `rating` field with no options of its own
const DEFAULT_RATING_SCALE: [&str; 5] = ["1", "2", "3", "4", "5"];

/// `type` attribute of a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Number,
    Tel,
    Url,
    Date,
    File,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Date => "date",
            InputType::File => "file",
        }
    }
}

/// HTML5 constraint attributes mirroring a field's rules.
///
/// Browsers may enforce these before the engine runs; the engine remains the
/// source of truth for messages. `pattern` is never mirrored: browsers anchor
/// the attribute to the whole value and the engine does not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hints {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Hints {
    fn for_field(field: &FormField) -> Self {
        let rules = field.rules();
        let text_like = field.field_type.is_text_like();
        let numeric = field.field_type == FieldType::Number;

        Self {
            required: field.is_required(),
            min_length: rules.min_length.filter(|_| text_like),
            max_length: rules.max_length.filter(|_| text_like),
            min: rules.min.filter(|_| numeric),
            max: rules.max.filter(|_| numeric),
        }
    }
}

/// One interactive control, ready to be rendered.
///
/// Every value-carrying variant is bound to the field id through `name`.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Input {
        name: String,
        input_type: InputType,
        placeholder: Option<String>,
        input_mode: Option<&'static str>,
        autocomplete: Option<&'static str>,
        hints: Hints,
        style: ResolvedStyle,
    },
    TextArea {
        name: String,
        placeholder: Option<String>,
        hints: Hints,
        style: ResolvedStyle,
    },
    Select {
        name: String,
        /// Shown as a disabled first option with an empty value
        placeholder: Option<String>,
        options: Vec<String>,
        required: bool,
        style: ResolvedStyle,
    },
    Checkbox {
        name: String,
        label: String,
        required: bool,
    },
    /// Mutually exclusive options sharing `name`, so one value per group
    RadioGroup {
        name: String,
        label: String,
        options: Vec<String>,
        required: bool,
    },
    Submit {
        label: String,
        style: ResolvedStyle,
    },
    Unsupported {
        name: String,
        tag: String,
    },
}

impl Control {
    /// Binding key, `None` for the submit action
    pub fn name(&self) -> Option<&str> {
        match self {
            Control::Input { name, .. }
            | Control::TextArea { name, .. }
            | Control::Select { name, .. }
            | Control::Checkbox { name, .. }
            | Control::RadioGroup { name, .. }
            | Control::Unsupported { name, .. } => Some(name),
            Control::Submit { .. } => None,
        }
    }

    /// Whether the control renders its own label
    pub fn labels_itself(&self) -> bool {
        matches!(
            self,
            Control::Checkbox { .. } | Control::RadioGroup { .. } | Control::Submit { .. }
        )
    }
}

/// Map a field to its control. Total over [`FieldType`]; unknown tags yield
/// [`Control::Unsupported`] and the rest of the form is unaffected.
pub fn render_field(field: &FormField) -> Control {
    let name = field.id.clone();
    let style = ResolvedStyle::for_field(field);
    let placeholder = field
        .placeholder
        .clone()
        .filter(|_| field.field_type.takes_placeholder());

    let input = |input_type: InputType| Control::Input {
        name: name.clone(),
        input_type,
        placeholder: placeholder.clone(),
        input_mode: None,
        autocomplete: None,
        hints: Hints::for_field(field),
        style: style.clone(),
    };

    match &field.field_type {
        FieldType::Text => input(InputType::Text),
        FieldType::Email => input(InputType::Email),
        FieldType::Number => input(InputType::Number),
        FieldType::Date => input(InputType::Date),
        FieldType::Phone => input(InputType::Tel),
        FieldType::Url => input(InputType::Url),
        FieldType::File => input(InputType::File),
        FieldType::CreditCard => Control::Input {
            name,
            input_type: InputType::Text,
            placeholder,
            input_mode: Some("numeric"),
            autocomplete: Some("cc-number"),
            hints: Hints::for_field(field),
            style,
        },
        FieldType::Textarea | FieldType::Address => Control::TextArea {
            name,
            placeholder,
            hints: Hints::for_field(field),
            style,
        },
        FieldType::Select => Control::Select {
            name,
            placeholder,
            options: field.options.clone(),
            required: field.is_required(),
            style,
        },
        FieldType::Checkbox => Control::Checkbox {
            name,
            label: field.label.clone(),
            required: field.is_required(),
        },
        FieldType::Radio => Control::RadioGroup {
            name,
            label: field.label.clone(),
            options: field.options.clone(),
            required: field.is_required(),
        },
        FieldType::Rating => {
            let options = if field.options.is_empty() {
                DEFAULT_RATING_SCALE.iter().map(|s| s.to_string()).collect()
            } else {
                field.options.clone()
            };
            Control::RadioGroup {
                name,
                label: field.label.clone(),
                options,
                required: field.is_required(),
            }
        }
        FieldType::SubmitButton => Control::Submit {
            label: field.label.clone(),
            style,
        },
        FieldType::Unknown(tag) => {
            debug!("Rendering placeholder for field `{}` of unsupported type `{}`", field.id, tag);
            Control::Unsupported {
                name,
                tag: tag.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationRules;
    use crate::styling::Styling;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::Text, InputType::Text)]
    #[case(FieldType::Email, InputType::Email)]
    #[case(FieldType::Number, InputType::Number)]
    #[case(FieldType::Phone, InputType::Tel)]
    #[case(FieldType::Url, InputType::Url)]
    #[case(FieldType::Date, InputType::Date)]
    #[case(FieldType::File, InputType::File)]
    fn test_single_line_inputs(#[case] field_type: FieldType, #[case] expected: InputType) {
        let field = FormField::new("f", field_type, "F");
        match render_field(&field) {
            Control::Input { name, input_type, .. } => {
                assert_eq!(name, "f");
                assert_eq!(input_type, expected);
            }
            other => panic!("expected input, got {:?}", other),
        }
    }

    #[test]
    fn test_textarea_and_address() {
        for field_type in [FieldType::Textarea, FieldType::Address] {
            let control = render_field(&FormField::new("f", field_type, "F"));
            assert!(matches!(control, Control::TextArea { .. }));
        }
    }

    #[test]
    fn test_select_keeps_option_order_and_placeholder() {
        let field = FormField::new("size", FieldType::Select, "Size")
            .with_placeholder("Pick one")
            .with_options(["S", "M", "L"]);

        match render_field(&field) {
            Control::Select {
                placeholder,
                options,
                ..
            } => {
                assert_eq!(placeholder.as_deref(), Some("Pick one"));
                assert_eq!(options, vec!["S", "M", "L"]);
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_radio_group_shares_field_id() {
        let field = FormField::new("plan", FieldType::Radio, "Plan").with_options(["Free", "Pro"]);
        let control = render_field(&field);

        assert_eq!(control.name(), Some("plan"));
        assert!(matches!(control, Control::RadioGroup { ref options, .. } if options.len() == 2));
    }

    #[test]
    fn test_rating_defaults_to_five_point_scale() {
        let field = FormField::new("stars", FieldType::Rating, "Stars");
        match render_field(&field) {
            Control::RadioGroup { options, .. } => assert_eq!(options, vec!["1", "2", "3", "4", "5"]),
            other => panic!("expected radio group, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_button_uses_label_and_styling() {
        let field = FormField::new("send", FieldType::SubmitButton, "Send it")
            .required()
            .with_styling(Styling {
                background_color: Some("#000000".to_string()),
                ..Styling::default()
            });

        match render_field(&field) {
            Control::Submit { label, style } => {
                assert_eq!(label, "Send it");
                assert_eq!(style.background_color, "#000000");
                assert_eq!(style.font_size, 16);
            }
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_degrades_to_placeholder() {
        let field = FormField::new("sig", "signature", "Signature");
        assert_eq!(
            render_field(&field),
            Control::Unsupported {
                name: "sig".to_string(),
                tag: "signature".to_string()
            }
        );
    }

    #[test]
    fn test_placeholder_dropped_for_checkbox() {
        let field = FormField::new("ok", FieldType::Checkbox, "OK").with_placeholder("ignored");
        assert!(matches!(render_field(&field), Control::Checkbox { .. }));

        let text = FormField::new("t", FieldType::Text, "T").with_placeholder("shown");
        assert!(matches!(
            render_field(&text),
            Control::Input { placeholder: Some(ref p), .. } if p == "shown"
        ));
    }

    #[test]
    fn test_hints_follow_field_type() {
        let rules = ValidationRules {
            min_length: Some(2),
            max: Some(9.0),
            ..ValidationRules::default()
        };

        let text = FormField::new("t", FieldType::Text, "T").with_validation(rules.clone());
        let number = FormField::new("n", FieldType::Number, "N").with_validation(rules);

        assert_eq!(Hints::for_field(&text).min_length, Some(2));
        assert_eq!(Hints::for_field(&text).max, None);
        assert_eq!(Hints::for_field(&number).min_length, None);
        assert_eq!(Hints::for_field(&number).max, Some(9.0));
    }

    #[test]
    fn test_credit_card_input_mode() {
        let field = FormField::new("cc", FieldType::CreditCard, "Card");
        match render_field(&field) {
            Control::Input {
                input_type,
                input_mode,
                autocomplete,
                ..
            } => {
                assert_eq!(input_type, InputType::Text);
                assert_eq!(input_mode, Some("numeric"));
                assert_eq!(autocomplete, Some("cc-number"));
            }
            other => panic!("expected input, got {:?}", other),
        }
    }
}
