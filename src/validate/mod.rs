//! Pre-flight validation of the two numeric inputs.
//!
//! Runs before any request is built. A failure here means the network is
//! never touched.

use crate::error::CalcError;
use crate::models::{CalculationRequest, Operation};

/// Leading numeric prefix, in the same shape browsers accept for free-form
/// numeric text: optional sign, digits with an optional fraction (or a bare
/// fraction), optional exponent.
static NUMBER_PREFIX_RE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

/// Parse the leading number of `raw`, ignoring leading whitespace and any
/// trailing text (`"12px"` is 12).
///
/// Returns `None` when there is no numeric prefix or the value is not
/// finite.
pub fn parse_operand(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let prefix = NUMBER_PREFIX_RE.find(trimmed)?.as_str();
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate both raw inputs against the active operation.
///
/// Both operands are checked before the division guard, so `"abc" / "0"`
/// reports invalid input rather than division by zero.
pub fn validate(
    first: &str,
    second: &str,
    operation: Operation,
) -> Result<CalculationRequest, CalcError> {
    let (Some(num1), Some(num2)) = (parse_operand(first), parse_operand(second)) else {
        return Err(CalcError::InvalidInput);
    };

    // -0.0 == 0.0, so a negative zero divisor is caught too.
    if operation == Operation::Divide && num2 == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    Ok(CalculationRequest::new(num1, num2, operation))
}
