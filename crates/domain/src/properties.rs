//! Property update payload — the body of
//! `PATCH /repos/{owner}/{repo_name}/properties/values`.
//!
//! The payload is checked as raw JSON rather than deserialized into a typed
//! struct: clients under test send arbitrary shapes, and every shape that is
//! not acceptable must map to the same rejection instead of a deserializer
//! error.
//!
//! A body is acceptable when its `properties` field is a non-empty array
//! whose **first** entry has truthy `property_name` and `value` keys. Later
//! entries are never inspected.

use serde_json::Value;

use crate::error::{MockError, ValidationError};

/// Validate a property update body.
///
/// # Errors
///
/// Returns [`MockError::InvalidPropertiesPayload`] carrying the first failed
/// check.
pub fn validate(body: &Value) -> Result<(), MockError> {
    let properties = body
        .get("properties")
        .ok_or(ValidationError::MissingProperties)?;
    let properties = properties
        .as_array()
        .ok_or(ValidationError::PropertiesNotAnArray)?;
    let first = properties.first().ok_or(ValidationError::EmptyProperties)?;

    if !first.get("property_name").is_some_and(is_truthy) {
        return Err(ValidationError::MissingPropertyName.into());
    }
    if !first.get("value").is_some_and(is_truthy) {
        return Err(ValidationError::MissingValue.into());
    }
    Ok(())
}

/// Whether a JSON value counts as "present".
///
/// `null`, `false`, zero, and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
