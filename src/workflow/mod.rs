//! Calculation workflow
//!
//! # State transitions
//!
//! ```text
//! UnvalidatedShipment -> Shipment -> CalculatedPrices
//! ```
//!
//! # Module structure
//!
//! - [`unvalidated_types`] - raw request shape
//! - [`shipment`] - the validated aggregate
//! - [`tariff`] - the pricing collaborator trait
//! - [`error_types`] - workflow errors
//! - [`calculate`] - mapping and the workflow function

pub mod calculate;
pub mod error_types;
pub mod shipment;
pub mod tariff;
pub mod unvalidated_types;

pub use calculate::{CalculatedPrices, calculate, map_request_to_shipment};
pub use error_types::{CalculateError, TariffError};
pub use shipment::Shipment;
pub use tariff::TariffCalculateUseCase;
pub use unvalidated_types::{UnvalidatedCoordinates, UnvalidatedPackage, UnvalidatedShipment};
