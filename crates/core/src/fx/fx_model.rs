use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONVERSION_AMOUNT;
use crate::errors::ValidationError;

/// Result of converting `amount` units of `base` into `target`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversion {
    pub base: String,
    pub target: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub converted: Decimal,
    pub source: String,
}

/// Parse the optional `amount` query value. Absent or blank means 1.
///
/// A well-formed number too large for a `Decimal` is reported as out of
/// range rather than as not a number.
pub fn parse_amount(raw: Option<&str>) -> std::result::Result<Decimal, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    let value = if trimmed.is_empty() {
        DEFAULT_CONVERSION_AMOUNT
    } else {
        trimmed
    };
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| {
            if looks_numeric(value) {
                amount_out_of_range()
            } else {
                ValidationError::InvalidInput("amount must be a number".to_string())
            }
        })
}

pub(crate) fn amount_out_of_range() -> ValidationError {
    ValidationError::InvalidInput("amount is out of range".to_string())
}

fn looks_numeric(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
        && value.parse::<f64>().is_ok()
}
