// src/serde_helper.rs

//! Serde helpers for node output that may carry `null`, or a value of an
//! unexpected type, in place of a field.
//!
//! A field that does not fit its declared type is dropped on its own; the
//! rest of the record still decodes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field, mapping `null` or a type mismatch to `None`
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a field, mapping `null` or a type mismatch to the default
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Skip predicate for numeric fields that are omitted when zero
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Skip predicate for optional fields: absent, `""`, `0` and empty lists
/// are all omitted
pub fn is_blank<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().map_or(true, is_zero)
}
