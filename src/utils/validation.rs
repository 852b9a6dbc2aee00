use crate::utils::error::{ArithError, Result, CALCULATOR_NUMBER_MESSAGE};

/// Returns the argument if it is present and non-empty.
pub fn require_arg(value: Option<&str>) -> Result<&str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ArithError::MissingArguments),
    }
}

/// Parses an operand into a finite `f64`.
///
/// Surrounding whitespace is ignored. Empty input, unparsable text and
/// non-finite values (`NaN`, `inf`) are all rejected with
/// [`ArithError::InvalidNumber`].
pub fn parse_operand(raw: &str) -> Result<f64> {
    parse_operand_with(raw, CALCULATOR_NUMBER_MESSAGE)
}

pub fn parse_operand_with(raw: &str, message: &'static str) -> Result<f64> {
    let invalid = || ArithError::InvalidNumber {
        value: raw.to_string(),
        message,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(invalid()),
    }
}
