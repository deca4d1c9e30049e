use crate::{
    error::{Error, ErrorCode},
    interpreter::{evaluator::core::EvalResult, value::quantity::Quantity},
    location::Location,
};

/// Converts the text of a numeric literal into a scalar quantity.
///
/// Recognized forms:
/// - `0b` followed by binary digits,
/// - `0x` followed by hexadecimal digits,
/// - a leading `0` followed only by octal digits,
/// - decimal and scientific notation otherwise.
///
/// A leading `-` (only present in literals synthesized by the optimizer)
/// negates the value.
///
/// # Errors
/// `InvalidNumberLiteral` at `location` for text that matches none of the
/// forms, including a leading `0` followed by the digits `8` or `9`.
///
/// # Example
/// ```
/// use symcalc::{interpreter::evaluator::literal::parse_number_literal, location::Location};
///
/// let at = Location::SYNTHETIC;
/// assert_eq!(parse_number_literal("0b101", at).unwrap().value, 5.0);
/// assert_eq!(parse_number_literal("017", at).unwrap().value, 15.0);
/// assert_eq!(parse_number_literal("0x1F", at).unwrap().value, 31.0);
/// assert_eq!(parse_number_literal("2.5e2", at).unwrap().value, 250.0);
/// assert!(parse_number_literal("09", at).is_err());
/// ```
pub fn parse_number_literal(text: &str, location: Location) -> EvalResult<Quantity> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let value = parse_unsigned(digits).ok_or_else(|| {
                                          Error::new(ErrorCode::InvalidNumberLiteral,
                                                     location,
                                                     format!("Invalid number literal '{text}'."))
                                      })?;

    Ok(Quantity::scalar(if negative { -value } else { value }))
}

fn parse_unsigned(text: &str) -> Option<f64> {
    if let Some(binary) = text.strip_prefix("0b") {
        return parse_radix(binary, 2);
    }
    if let Some(hex) = text.strip_prefix("0x") {
        return parse_radix(hex, 16);
    }
    if text.len() > 1
       && text.starts_with('0')
       && text.bytes().all(|b| b.is_ascii_digit())
    {
        return parse_radix(&text[1..], 8);
    }
    text.parse().ok()
}

#[allow(clippy::cast_precision_loss)]
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|value| value as f64)
}
