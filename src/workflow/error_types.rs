//! Calculation workflow errors
//!
//! - [`TariffError`] - the pricing collaborator could not produce a price
//! - [`CalculateError`] - anything that aborts a calculation

use thiserror::Error;

use crate::simple_types::ValidationError;

/// Failure reported by a [`TariffCalculateUseCase`](super::TariffCalculateUseCase)
///
/// # Examples
///
/// ```
/// use fast_delivery::workflow::TariffError;
///
/// let error = TariffError::new("no tariff for route");
/// assert_eq!(error.message(), "no tariff for route");
/// assert_eq!(error.to_string(), "Tariff error: no tariff for route");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Tariff error: {message}")]
pub struct TariffError {
    message: String,
}

impl TariffError {
    /// Creates a new `TariffError`
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for TariffError {
    fn from(error: ValidationError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Error of the calculation workflow as a whole
///
/// `Validation` means the request was bad and nothing was priced; `Tariff`
/// means a valid shipment could not be priced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalculateError {
    /// The request did not describe a valid shipment
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The tariff use case failed
    #[error(transparent)]
    Tariff(#[from] TariffError),
}

impl CalculateError {
    /// Returns `true` when the client is at fault
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
