//! The pricing collaborator seam
//!
//! The tariff algorithm itself lives outside this crate. The workflow only
//! depends on this trait.

use crate::simple_types::Price;

use super::error_types::TariffError;
use super::shipment::Shipment;

/// Prices a validated shipment
///
/// Implementations are expected to be side-effect free from the caller's
/// point of view; the workflow calls `calc` once and `minimal_price` once
/// per request, and never with a partially built shipment.
pub trait TariffCalculateUseCase {
    /// Computes the delivery price of `shipment`
    ///
    /// # Errors
    ///
    /// Returns `TariffError` when no price can be produced.
    fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError>;

    /// Returns the floor price of any delivery
    ///
    /// # Errors
    ///
    /// Returns `TariffError` when the floor is unavailable.
    fn minimal_price(&self) -> Result<Price, TariffError>;
}

impl<T: TariffCalculateUseCase + ?Sized> TariffCalculateUseCase for &T {
    fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError> {
        (**self).calc(shipment)
    }

    fn minimal_price(&self) -> Result<Price, TariffError> {
        (**self).minimal_price()
    }
}

impl<T: TariffCalculateUseCase + ?Sized> TariffCalculateUseCase for Box<T> {
    fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError> {
        (**self).calc(shipment)
    }

    fn minimal_price(&self) -> Result<Price, TariffError> {
        (**self).minimal_price()
    }
}
