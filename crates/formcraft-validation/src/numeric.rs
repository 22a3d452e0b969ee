//! Numeric validation functions

/// Range bound that a value failed to meet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeViolation {
    /// Value could not be read as a finite number
    NotANumber,
    BelowMin(f64),
    AboveMax(f64),
}

/// Parses a control value as a finite floating-point number.
///
/// Surrounding whitespace is ignored. `"inf"` and `"NaN"` are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Validates a raw value against optional numeric bounds.
///
/// With no bounds configured every value passes, parseable or not.
pub fn validate_range(s: &str, min: Option<f64>, max: Option<f64>) -> Result<(), RangeViolation> {
    if min.is_none() && max.is_none() {
        return Ok(());
    }

    let value = parse_number(s).ok_or(RangeViolation::NotANumber)?;

    if let Some(min) = min {
        if value < min {
            return Err(RangeViolation::BelowMin(min));
        }
    }

    if let Some(max) = max {
        if value > max {
            return Err(RangeViolation::AboveMax(max));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_max_boundary() {
        assert!(validate_range("100", None, Some(100.0)).is_ok());
        assert_eq!(
            validate_range("101", None, Some(100.0)),
            Err(RangeViolation::AboveMax(100.0))
        );
    }

    #[test]
    fn test_min_boundary() {
        assert!(validate_range("18", Some(18.0), None).is_ok());
        assert_eq!(
            validate_range("17.9", Some(18.0), None),
            Err(RangeViolation::BelowMin(18.0))
        );
    }

    #[test]
    fn test_unparsable_with_bounds() {
        assert_eq!(
            validate_range("ten", Some(1.0), Some(10.0)),
            Err(RangeViolation::NotANumber)
        );
        assert_eq!(
            validate_range("ten", None, Some(10.0)),
            Err(RangeViolation::NotANumber)
        );
    }

    #[test]
    fn test_no_bounds_accepts_anything() {
        assert!(validate_range("ten", None, None).is_ok());
    }
}
