//! String validation functions

/// Length bound that a value failed to meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
}

/// True when the value is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Length in characters, not bytes, so "héllo" counts as 5
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Checks `min` first, then `max`. Bounds that are `None` are not checked.
pub fn validate_length(
    s: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), LengthViolation> {
    let actual = char_len(s);

    if let Some(min) = min {
        if actual < min {
            return Err(LengthViolation::TooShort { min, actual });
        }
    }

    if let Some(max) = max {
        if actual > max {
            return Err(LengthViolation::TooLong { max, actual });
        }
    }

    Ok(())
}
