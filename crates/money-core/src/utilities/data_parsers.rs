//! Data parsing helpers.
//!
//! Callers that receive amounts as loosely-typed text (template variables,
//! form fields) use [`parse_numeric`] to decide whether the text is a number
//! at all before formatting it.

/// Parse `s` as a finite number.
///
/// Leading and trailing whitespace is ignored.  Integers, decimals, an
/// optional sign, and exponent notation (`"1e3"`) are accepted; empty
/// strings, `"inf"`, `"NaN"`, and anything else that is not a finite
/// number yield `None`.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    // `f64::from_str` also accepts "inf" and "NaN"; a number must start with
    // a digit, a sign, or a decimal point.
    let first = s.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '+' | '-' | '.')) {
        return None;
    }
    let value: f64 = s.parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("1999"), Some(1999.0));
        assert_eq!(parse_numeric("  -12.5 "), Some(-12.5));
        assert_eq!(parse_numeric("+3"), Some(3.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("not-a-number"), None);
        assert_eq!(parse_numeric("12abc"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("1e999"), None);
    }
}
