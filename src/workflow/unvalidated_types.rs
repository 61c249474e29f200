//! Unvalidated input types
//!
//! The raw shape of a calculation request after deserialization and before
//! any domain rule has been applied. Values here may be negative, out of
//! range or name unknown currencies.

use bigdecimal::BigDecimal;
use rust_decimal::Decimal;

/// One cargo package as submitted
///
/// The weight keeps the exact number that was sent, in any notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedPackage {
    weight: BigDecimal,
    length: Decimal,
    width: Decimal,
    height: Decimal,
}

impl UnvalidatedPackage {
    /// Creates an `UnvalidatedPackage`
    #[must_use]
    pub const fn new(weight: BigDecimal, length: Decimal, width: Decimal, height: Decimal) -> Self {
        Self {
            weight,
            length,
            width,
            height,
        }
    }

    /// Weight in grams
    #[must_use]
    pub const fn weight(&self) -> &BigDecimal {
        &self.weight
    }

    /// Length in millimeters
    #[must_use]
    pub const fn length(&self) -> Decimal {
        self.length
    }

    /// Width in millimeters
    #[must_use]
    pub const fn width(&self) -> Decimal {
        self.width
    }

    /// Height in millimeters
    #[must_use]
    pub const fn height(&self) -> Decimal {
        self.height
    }
}

/// A coordinate pair as submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnvalidatedCoordinates {
    latitude: Decimal,
    longitude: Decimal,
}

impl UnvalidatedCoordinates {
    /// Creates an `UnvalidatedCoordinates`
    #[must_use]
    pub const fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }
}

/// A whole calculation request as submitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedShipment {
    packages: Vec<UnvalidatedPackage>,
    currency_code: String,
    departure: UnvalidatedCoordinates,
    destination: UnvalidatedCoordinates,
}

impl UnvalidatedShipment {
    /// Creates an `UnvalidatedShipment`
    #[must_use]
    pub const fn new(
        packages: Vec<UnvalidatedPackage>,
        currency_code: String,
        departure: UnvalidatedCoordinates,
        destination: UnvalidatedCoordinates,
    ) -> Self {
        Self {
            packages,
            currency_code,
            departure,
            destination,
        }
    }

    /// Packages in submission order
    #[must_use]
    pub fn packages(&self) -> &[UnvalidatedPackage] {
        &self.packages
    }

    /// Requested currency code
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Departure coordinates
    #[must_use]
    pub const fn departure(&self) -> UnvalidatedCoordinates {
        self.departure
    }

    /// Destination coordinates
    #[must_use]
    pub const fn destination(&self) -> UnvalidatedCoordinates {
        self.destination
    }
}
