//! Input DTOs
//!
//! Types the request body deserializes into. Conversion to the workflow's
//! unvalidated types is a pure copy; no rule is checked here.
//!
//! # Type list
//!
//! - [`CargoPackageDto`] - one package
//! - [`CoordinatesDto`] - a coordinate pair
//! - [`CalculatePackagesRequestDto`] - the whole request

use bigdecimal::BigDecimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{UnvalidatedCoordinates, UnvalidatedPackage, UnvalidatedShipment};

// =============================================================================
// CargoPackageDto
// =============================================================================

/// One cargo package: weight in grams, sides in millimeters
///
/// Numbers may be sent either as JSON numbers or as decimal strings. The
/// weight keeps every digit it was sent with; the sides are fixed-point.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::dto::CargoPackageDto;
///
/// let json = r#"{"weight": 4564, "length": 345, "width": 589, "height": 234}"#;
/// let dto: CargoPackageDto = serde_json::from_str(json).unwrap();
///
/// assert_eq!(dto.weight, BigDecimal::from(4564));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoPackageDto {
    /// Weight in grams
    pub weight: BigDecimal,
    /// Length in millimeters
    pub length: Decimal,
    /// Width in millimeters
    pub width: Decimal,
    /// Height in millimeters
    pub height: Decimal,
}

impl CargoPackageDto {
    /// Converts to an `UnvalidatedPackage`
    #[must_use]
    pub fn to_unvalidated_package(&self) -> UnvalidatedPackage {
        UnvalidatedPackage::new(self.weight.clone(), self.length, self.width, self.height)
    }
}

// =============================================================================
// CoordinatesDto
// =============================================================================

/// A latitude/longitude pair in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesDto {
    /// Latitude
    pub latitude: Decimal,
    /// Longitude
    pub longitude: Decimal,
}

impl CoordinatesDto {
    /// Converts to `UnvalidatedCoordinates`
    #[must_use]
    pub const fn to_unvalidated_coordinates(&self) -> UnvalidatedCoordinates {
        UnvalidatedCoordinates::new(self.latitude, self.longitude)
    }
}

// =============================================================================
// CalculatePackagesRequestDto
// =============================================================================

/// Body of a price calculation request
///
/// # Examples
///
/// ```
/// use fast_delivery::dto::CalculatePackagesRequestDto;
///
/// let json = r#"{
///     "packages": [{"weight": 4564, "length": 345, "width": 589, "height": 234}],
///     "currencyCode": "RUB",
///     "departure": {"latitude": 55, "longitude": 37},
///     "destination": {"latitude": 59, "longitude": 30}
/// }"#;
///
/// let dto: CalculatePackagesRequestDto = serde_json::from_str(json).unwrap();
/// let unvalidated = dto.to_unvalidated_shipment();
///
/// assert_eq!(unvalidated.packages().len(), 1);
/// assert_eq!(unvalidated.currency_code(), "RUB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePackagesRequestDto {
    /// Packages in order
    pub packages: Vec<CargoPackageDto>,
    /// ISO 4217 code of the requested currency
    pub currency_code: String,
    /// Departure point
    pub departure: CoordinatesDto,
    /// Destination point
    pub destination: CoordinatesDto,
}

impl CalculatePackagesRequestDto {
    /// Converts to an `UnvalidatedShipment`, preserving package order
    #[must_use]
    pub fn to_unvalidated_shipment(&self) -> UnvalidatedShipment {
        UnvalidatedShipment::new(
            self.packages
                .iter()
                .map(CargoPackageDto::to_unvalidated_package)
                .collect(),
            self.currency_code.clone(),
            self.departure.to_unvalidated_coordinates(),
            self.destination.to_unvalidated_coordinates(),
        )
    }
}
