// File: src/validation/rules.rs
// Purpose: The ordered check pipeline; the first failing check wins

use super::pattern::CompiledPattern;
use super::{FieldError, ValidatorOptions, ViolationKind};
use crate::schema::{FieldType, FormField};
use crate::value::FieldValue;
use formcraft_validation::{validate_length, validate_range, LengthViolation, RangeViolation};

/// Run required, length, range and pattern checks in that order.
///
/// `compiled` is the field's compiled pattern, `None` when it has none.
pub(crate) fn evaluate(
    field: &FormField,
    value: Option<&FieldValue>,
    options: &ValidatorOptions,
    compiled: Option<&CompiledPattern>,
) -> Result<(), FieldError> {
    if !field.carries_value() {
        return Ok(());
    }

    let empty = value.map_or(true, |v| v.is_empty(options.trim_values));

    if empty {
        if field.is_required() {
            return Err(FieldError::new(field, ViolationKind::Required, || {
                format!("{} is required", field.label)
            }));
        }
        // Optional and empty: nothing else applies
        return Ok(());
    }

    // Checkbox state has no length, range or format
    let text = match value.and_then(FieldValue::as_text) {
        Some(text) => text,
        None => return Ok(()),
    };

    let rules = field.validation.as_ref();

    if field.field_type.is_text_like() {
        let (min, max) = rules.map_or((None, None), |r| (r.min_length, r.max_length));
        if let Err(violation) = validate_length(text, min, max) {
            return Err(FieldError::new(field, ViolationKind::Length, || match violation {
                LengthViolation::TooShort { min, .. } => {
                    format!("{} must be at least {} characters", field.label, min)
                }
                LengthViolation::TooLong { max, .. } => {
                    format!("{} must be no more than {} characters", field.label, max)
                }
            }));
        }
    }

    if field.field_type == FieldType::Number {
        let (min, max) = rules.map_or((None, None), |r| (r.min, r.max));
        if let Err(violation) = validate_range(text, min, max) {
            return Err(FieldError::new(field, ViolationKind::Range, || match (violation, min) {
                (RangeViolation::BelowMin(bound), _) | (RangeViolation::NotANumber, Some(bound)) => {
                    format!("{} must be at least {}", field.label, bound)
                }
                (RangeViolation::AboveMax(bound), _) => {
                    format!("{} must be no more than {}", field.label, bound)
                }
                (RangeViolation::NotANumber, None) => format!("{} must be a number", field.label),
            }));
        }
    }

    if let Some(compiled) = compiled {
        if !compiled.matches(text, options.pattern_policy) {
            return Err(FieldError::new(field, ViolationKind::Pattern, || {
                format!("{} format is invalid", field.label)
            }));
        }
    }

    Ok(())
}
