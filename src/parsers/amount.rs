use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{ConvertError, ConvertResult};

/// Parse a plain amount such as `-1500` or `12.30`.
pub fn parse_decimal(value: &str) -> ConvertResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| ConvertError::InvalidAmount(value.to_string()))
}

/// Like [`parse_decimal`], with an empty cell meaning zero.
pub fn parse_decimal_or_zero(value: &str) -> ConvertResult<Decimal> {
    if value.trim().is_empty() {
        Ok(Decimal::ZERO)
    } else {
        parse_decimal(value)
    }
}

/// Parse a German locale amount: `.` groups thousands, `,` separates decimals.
pub fn parse_german_decimal(value: &str) -> ConvertResult<Decimal> {
    let normalized = value.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| ConvertError::InvalidAmount(value.to_string()))
}

/// Flip the sign of an amount exported with the opposite convention.
pub fn negate(amount: Decimal) -> Decimal {
    if amount.is_zero() { Decimal::ZERO } else { -amount }
}
