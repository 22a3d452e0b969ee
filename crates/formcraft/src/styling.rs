// File: src/styling.rs
// Purpose: Per-field presentation attributes and their light-theme defaults

use crate::schema::{FieldType, FormField};
use serde::{Deserialize, Serialize};

/// Styling as authored in the schema. Every property is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

/// Styling with every property filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub border_radius: u32,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub font_size: u32,
    pub padding: u32,
}

/// Light-theme defaults for a field type
pub fn defaults_for(field_type: &FieldType) -> ResolvedStyle {
    match field_type {
        FieldType::SubmitButton => ResolvedStyle {
            border_radius: 6,
            background_color: "#3b82f6".to_string(),
            border_color: "#3b82f6".to_string(),
            text_color: "#ffffff".to_string(),
            font_size: 16,
            padding: 12,
        },
        _ => ResolvedStyle {
            border_radius: 6,
            background_color: "#ffffff".to_string(),
            border_color: "#d1d5db".to_string(),
            text_color: "#111827".to_string(),
            font_size: 14,
            padding: 12,
        },
    }
}

impl ResolvedStyle {
    /// Overlay a partial styling record on these values
    pub fn merge(mut self, styling: &Styling) -> Self {
        if let Some(radius) = styling.border_radius {
            self.border_radius = radius;
        }
        if let Some(color) = &styling.background_color {
            self.background_color = color.clone();
        }
        if let Some(color) = &styling.border_color {
            self.border_color = color.clone();
        }
        if let Some(color) = &styling.text_color {
            self.text_color = color.clone();
        }
        if let Some(size) = styling.font_size {
            self.font_size = size;
        }
        if let Some(padding) = styling.padding {
            self.padding = padding;
        }
        self
    }

    /// Resolve the effective style of a field
    pub fn for_field(field: &FormField) -> Self {
        let defaults = defaults_for(&field.field_type);
        match &field.styling {
            Some(styling) => defaults.merge(styling),
            None => defaults,
        }
    }

    /// Render as the value of an inline `style` attribute
    pub fn to_inline_css(&self) -> String {
        format!(
            "border-radius: {}px; background-color: {}; border: 1px solid {}; color: {}; font-size: {}px; padding: {}px;",
            self.border_radius,
            self.background_color,
            self.border_color,
            self.text_color,
            self.font_size,
            self.padding
        )
    }
}
