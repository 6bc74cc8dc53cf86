//! Unsigned decimal numeral scanning shared by the identifier types.
//!
//! `u64::from_str` accepts a leading `+`; these helpers do not.

use crate::error::ValidationError;

/// Require a non-empty string of ASCII decimal digits.
pub(crate) fn require_digits(value: &str, target: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MalformedNumeral {
            target,
            value: String::new(),
            reason: "empty string",
        });
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::MalformedNumeral {
            target,
            value: value.to_string(),
            reason: "contains a non-digit character",
        });
    }
    Ok(())
}

/// Parse an unsigned decimal numeral into the full `u64` range.
pub(crate) fn parse_u64(value: &str, target: &'static str) -> Result<u64, ValidationError> {
    require_digits(value, target)?;
    value
        .parse::<u64>()
        .map_err(|_| ValidationError::MalformedNumeral {
            target,
            value: value.to_string(),
            reason: "exceeds the unsigned 64-bit range",
        })
}
