//! Field deserializers shared by every payload the engine accepts.
//!
//! Callers send `0`, `null`, `""` and negative numbers to mean "not
//! recorded". These helpers turn all of them into `None` so display code
//! only ever sees real values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite() && *v > 0.0))
}

pub(crate) fn present_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Positive whole number such as a placement or a count.
pub(crate) fn present_whole<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.5 && *v <= f64::from(u32::MAX))
        .map(|v| v.round() as u32))
}

/// Pre-formatted display value. Numbers are accepted and printed as given.
pub(crate) fn present_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let label = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    Ok(Some(label).filter(|s| !s.is_empty()))
}

/// `null` reads as the type's default instead of failing.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List of names with blanks and nulls dropped.
pub(crate) fn names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let names = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(names
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect())
}
