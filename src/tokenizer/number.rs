//! Numeric literal predicate used by the classifier.
//!
//! A fragment is numeric when it is a run of ASCII digits of any length, or when the
//! whole text is a decimal float (optional sign, digits with an optional fraction or a
//! bare `.` fraction, optional exponent) that parses to a finite `f64`. Empty and
//! whitespace-only text is never numeric.

use nom::{
    combinator::{all_consuming, map_res},
    error::context,
    number::complete::recognize_float,
};

use super::ParserResult;

#[tracing::instrument(level = "trace", skip(input))]
fn parse_decimal(input: &str) -> ParserResult<f64> {
    context(
        "decimal literal",
        map_res(all_consuming(recognize_float), |s: &str| s.parse::<f64>()),
    )(input)
}

fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true when `text` in its entirety is a numeric literal.
pub fn is_numeric_literal(text: &str) -> bool {
    // digit runs stay numeric however large they get
    if is_digit_run(text) {
        return true;
    }
    matches!(parse_decimal(text), Ok((_, value)) if value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs() {
        assert!(is_numeric_literal("0"));
        assert!(is_numeric_literal("007"));
        assert!(is_numeric_literal("0123456789"));
        assert!(is_numeric_literal(&"9".repeat(400)));
    }

    #[test]
    fn test_decimal_syntax() {
        assert!(is_numeric_literal("3.14"));
        assert!(is_numeric_literal("-2.5e3"));
        assert!(is_numeric_literal("+7"));
        assert!(is_numeric_literal(".5"));
        assert!(is_numeric_literal("1."));
        assert!(is_numeric_literal("1E-3"));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal(" "));
        assert!(!is_numeric_literal(" 1"));
        assert!(!is_numeric_literal("-"));
        assert!(!is_numeric_literal("."));
        assert!(!is_numeric_literal("1e"));
        assert!(!is_numeric_literal("1.2.3"));
        assert!(!is_numeric_literal("0x1F"));
        assert!(!is_numeric_literal("abc"));
        assert!(!is_numeric_literal("inf"));
        assert!(!is_numeric_literal("NaN"));
    }

    #[test]
    fn test_rejects_overflowing_floats() {
        assert!(!is_numeric_literal("1e400"));
        assert!(!is_numeric_literal("-1e400"));
    }
}
