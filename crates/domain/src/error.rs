//! Common error types used across the workspace.
//!
//! The mock rejects requests for a single reason, a malformed property
//! update payload. [`ValidationError`] records which check failed so the
//! adapter can log it; callers only ever surface [`MockError`].

/// The specific check a property update payload failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`properties` field is missing")]
    MissingProperties,
    #[error("`properties` is not an array")]
    PropertiesNotAnArray,
    #[error("`properties` array is empty")]
    EmptyProperties,
    #[error("first property has no `property_name`")]
    MissingPropertyName,
    #[error("first property has no `value`")]
    MissingValue,
}

/// Errors the mock reports to its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    #[error("Invalid request: properties array with property_name and value is required")]
    InvalidPropertiesPayload(#[from] ValidationError),
}

impl MockError {
    /// The underlying validation failure.
    #[must_use]
    pub fn reason(&self) -> ValidationError {
        match self {
            Self::InvalidPropertiesPayload(reason) => *reason,
        }
    }
}
