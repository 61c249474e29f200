//! Validation error shared by every constrained type

use thiserror::Error;

/// A value failed its constructor's constraint.
///
/// Carries the name of the offending field so that a client can tell which
/// part of a request was rejected. Field names of nested values are
/// qualified with [`ValidationError::within`], e.g. `packages[2].weight`.
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::ValidationError;
///
/// let error = ValidationError::new("weight", "Must not be less than 0");
/// assert_eq!(error.to_string(), "weight: Must not be less than 0");
///
/// let nested = error.within("packages[2]");
/// assert_eq!(nested.field_name, "packages[2].weight");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the rejected field
    pub field_name: String,
    /// Why the value was rejected
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }

    /// Qualifies the field name with the path of the enclosing value.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        Self {
            field_name: format!("{parent}.{}", self.field_name),
            message: self.message,
        }
    }
}
