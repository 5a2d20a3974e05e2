//! Money helpers
//!
//! All amounts are `Decimal` pounds sterling. Display strings use the
//! `£` prefix with exactly two decimal places.

use rust_decimal::prelude::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Currency symbol used for all rendered amounts
pub const CURRENCY_SYMBOL: &str = "£";

/// Monetary values are rounded to 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to pence
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `£12.50` (negative amounts as `-£12.50`)
pub fn format_gbp(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", CURRENCY_SYMBOL, rounded.abs())
    } else {
        format!("{}{:.2}", CURRENCY_SYMBOL, rounded.abs())
    }
}

/// Number of decimal places actually used by a value (trailing zeros ignored)
pub fn decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Parse a price string leniently.
///
/// Accepts surrounding whitespace, a leading `£` and thousands separators.
/// A comma anywhere else (`10,50`) is an error. Returns `Ok(None)` for an
/// empty string.
pub fn parse_lenient(field: &'static str, raw: &str) -> ModelResult<Option<Decimal>> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    strip_thousands(trimmed)
        .and_then(|cleaned| Decimal::from_str(&cleaned).ok())
        .map(Some)
        .ok_or_else(|| ModelError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Drop thousands separators; `None` unless every comma splits the integer
/// part into groups of three
fn strip_thousands(value: &str) -> Option<String> {
    if !value.contains(',') {
        return Some(value.to_string());
    }
    let (int_part, frac_part) = value.split_once('.').unwrap_or((value, ""));
    if frac_part.contains(',') {
        return None;
    }
    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !groups.all(|g| g.len() == 3) {
        return None;
    }
    Some(value.replace(',', ""))
}

/// Coerce a loose JSON value (number, numeric string, empty string, null)
/// into an optional decimal.
pub fn coerce_decimal(field: &'static str, value: Option<&Value>) -> ModelResult<Option<Decimal>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(|_| ModelError::InvalidNumber {
                field,
                value: n.to_string(),
            }),
        Some(Value::String(s)) => parse_lenient(field, s),
        Some(other) => Err(ModelError::InvalidNumber {
            field,
            value: other.to_string(),
        }),
    }
}

/// Serde adapter for loose price fields that are kept as raw JSON until
/// normalisation.
pub fn loose_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()))
}
