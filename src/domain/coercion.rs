//! Numeric normalization applied wherever raw league data enters the crate.
//!
//! Missing, null, non-numeric and non-finite values all become `0.0`, so a
//! sloppy record counts as a neutral result instead of poisoning the
//! arithmetic downstream.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Converts an arbitrary JSON value into a finite number.
pub fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    normalize_number(number)
}

/// Maps NaN and infinities to zero, leaves every finite value untouched.
pub fn normalize_number(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value) as i64)
}
