//! Numeric coercion at the arithmetic boundary.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Budget line fields arrive as loosely typed JSON: a number, a numeric
//! string, `null`, or missing entirely. Everything that is not a finite
//! number is coerced to zero exactly once, here, so no aggregate downstream
//! can ever observe a `NaN`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_json::value::RawValue;

/// Coerces a possibly-missing value to a number, defaulting to zero.
#[must_use]
pub fn coerce_numeric(value: Option<Decimal>) -> Decimal {
    coerce_numeric_or(value, Decimal::ZERO)
}

/// Coerces a possibly-missing value to a number with an explicit default.
#[must_use]
pub fn coerce_numeric_or(value: Option<Decimal>, default: Decimal) -> Decimal {
    value.unwrap_or(default)
}

/// Parses a loosely typed JSON value into a decimal.
///
/// Accepts JSON numbers (including exponent notation) and numeric strings.
/// Returns `None` for `null`, booleans, containers, empty strings, and
/// anything that does not parse or does not fit in a `Decimal`.
#[must_use]
pub fn parse_numeric(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal_str(&number.to_string()),
        Value::String(text) => parse_decimal_str(text.trim()),
        _ => None,
    }
}

fn parse_decimal_str(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str(text).ok()
    }
}

/// Serde adapter for numeric fields that may be missing or malformed.
///
/// Use with `#[serde(default, deserialize_with = "lenient_decimal")]`.
/// Never fails on a well-formed JSON value: unparseable input, including
/// numbers too large for a `Decimal` such as `1e400`, becomes `None`.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    // Raw text keeps out-of-range literals from failing the whole record.
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    let text = raw.get().trim();
    let parsed = if text.starts_with('"') {
        serde_json::from_str::<String>(text)
            .ok()
            .and_then(|inner| parse_decimal_str(inner.trim()))
    } else if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        parse_decimal_str(text)
    } else {
        None
    };
    if parsed.is_none() && text != "null" {
        tracing::trace!(value = text, "coercing non-numeric value to zero");
    }
    Ok(parsed)
}

/// Serde adapter that coerces missing or malformed numbers straight to zero.
///
/// Use with `#[serde(default, deserialize_with = "lenient_decimal_or_zero")]`.
pub fn lenient_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_decimal(deserializer).map(coerce_numeric)
}

/// Rounds to the nearest whole number, with halves rounding up.
///
/// Halves go toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`), matching
/// what chart consumers expect from browser rounding.
#[must_use]
pub fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(Decimal::new(5, 1)).floor().normalize()
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
