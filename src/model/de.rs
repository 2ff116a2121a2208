//! Lenient serde helpers for upstream scalars.
//!
//! Numeric fields arrive as JSON numbers or as numeric strings depending on
//! the endpoint; defaulted flags and lists sometimes arrive as `null`.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Read a float from a number or numeric string. Empty strings and `null`
/// are `None`; anything else is an error.
pub fn float_from_value(value: &Value) -> Result<Option<f64>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or("number"),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(|_| "number"),
        _ => Err("number"),
    }
}

/// Read an integer from a number or integer string, with the same `None`
/// rules as [`float_from_value`].
pub fn int_from_value(value: &Value) -> Result<Option<i64>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_i64().map(Some).ok_or("integer"),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(|_| "integer"),
        _ => Err("integer"),
    }
}

/// Optional float from number, numeric string or `null`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    float_from_value(&value)
        .map_err(|expected| de::Error::custom(format!("expected {expected}, got {value}")))
}

/// Optional integer from number, integer string or `null`.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    int_from_value(&value)
        .map_err(|expected| de::Error::custom(format!("expected {expected}, got {value}")))
}

/// Mandatory integer from number or integer string.
pub fn required_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_i64(deserializer)?.ok_or_else(|| de::Error::custom("expected integer, got null"))
}

/// `T::default()` for both an absent key (with `#[serde(default)]`) and `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flag that defaults to `true`, including on `null`.
pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub fn default_true() -> bool {
    true
}
