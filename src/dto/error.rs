//! Error DTOs

use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;
use crate::workflow::{CalculateError, TariffError};

/// Calculation error as sent to the client
///
/// Internally tagged by the `type` field.
///
/// # Examples
///
/// ```
/// use fast_delivery::dto::CalculateErrorDto;
/// use fast_delivery::simple_types::ValidationError;
/// use fast_delivery::workflow::CalculateError;
///
/// let error = CalculateError::from(ValidationError::new("packages[0].weight", "Must not be less than 0"));
/// let json = serde_json::to_string(&CalculateErrorDto::from_domain(&error)).unwrap();
///
/// assert!(json.contains(r#""type":"Validation""#));
/// assert!(json.contains(r#""fieldName":"packages[0].weight""#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum CalculateErrorDto {
    /// The request was rejected
    Validation {
        /// Qualified name of the rejected field
        field_name: String,
        /// Why it was rejected
        message: String,
    },
    /// Pricing failed
    Tariff {
        /// Error message
        message: String,
    },
}

impl CalculateErrorDto {
    /// Creates a `CalculateErrorDto` from the workflow error
    #[must_use]
    pub fn from_domain(error: &CalculateError) -> Self {
        match error {
            CalculateError::Validation(error) => Self::from_validation_error(error),
            CalculateError::Tariff(error) => Self::from_tariff_error(error),
        }
    }

    /// Creates a `Validation` DTO
    #[must_use]
    pub fn from_validation_error(error: &ValidationError) -> Self {
        Self::Validation {
            field_name: error.field_name.clone(),
            message: error.message.clone(),
        }
    }

    fn from_tariff_error(error: &TariffError) -> Self {
        Self::Tariff {
            message: error.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_error_dto_from_validation() {
        let error = CalculateError::from(ValidationError::new("currencyCode", "Currency 'XYZ' is not supported"));

        let dto = CalculateErrorDto::from_domain(&error);

        assert_eq!(
            dto,
            CalculateErrorDto::Validation {
                field_name: "currencyCode".to_string(),
                message: "Currency 'XYZ' is not supported".to_string(),
            }
        );
    }

    #[rstest]
    fn test_error_dto_from_tariff() {
        let error = CalculateError::from(TariffError::new("tariff unavailable"));

        let json = serde_json::to_string(&CalculateErrorDto::from_domain(&error)).unwrap();

        assert_eq!(json, r#"{"type":"Tariff","message":"tariff unavailable"}"#);
    }
}
