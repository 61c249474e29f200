//! Geographic points and the factory that validates them
//!
//! A `GeoPoint` is a plain latitude/longitude pair. It can only be built by a
//! [`GeoPointFactory`], which checks both coordinates against its
//! [`CoordinateBounds`].

use rust_decimal::Decimal;

use crate::simple_types::ValidationError;
use crate::simple_types::constrained_type;

/// Field name for latitude errors
const LATITUDE_FIELD: &str = "latitude";

/// Field name for longitude errors
const LONGITUDE_FIELD: &str = "longitude";

/// An inclusive `[min, max]` interval for one coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateRange {
    min: Decimal,
    max: Decimal,
}

impl CoordinateRange {
    /// Creates a range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `min` is greater than `max`.
    pub fn create(field_name: &str, min: Decimal, max: Decimal) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new(
                field_name,
                &format!("Lower bound {min} must not exceed upper bound {max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Returns the upper bound
    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }
}

/// Bounds a `GeoPointFactory` enforces on both axes
///
/// The default covers the whole globe: latitude [-90, 90], longitude
/// [-180, 180]. A deployment serving a single region narrows them through
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateBounds {
    latitude: CoordinateRange,
    longitude: CoordinateRange,
}

impl Default for CoordinateBounds {
    fn default() -> Self {
        Self {
            latitude: CoordinateRange {
                min: Decimal::from(-90),
                max: Decimal::from(90),
            },
            longitude: CoordinateRange {
                min: Decimal::from(-180),
                max: Decimal::from(180),
            },
        }
    }
}

impl CoordinateBounds {
    /// Creates bounds from a latitude and a longitude range
    #[must_use]
    pub const fn new(latitude: CoordinateRange, longitude: CoordinateRange) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude range
    #[must_use]
    pub const fn latitude(&self) -> CoordinateRange {
        self.latitude
    }

    /// Returns the longitude range
    #[must_use]
    pub const fn longitude(&self) -> CoordinateRange {
        self.longitude
    }
}

/// A validated latitude/longitude pair in decimal degrees
///
/// # Examples
///
/// ```
/// use fast_delivery::compound_types::GeoPointFactory;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let factory = GeoPointFactory::default();
/// let point = factory
///     .create(Decimal::from_str("55.446008").unwrap(), Decimal::from_str("65.339151").unwrap())
///     .unwrap();
///
/// assert_eq!(point.latitude(), Decimal::from_str("55.446008").unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeoPoint {
    latitude: Decimal,
    longitude: Decimal,
}

impl GeoPoint {
    /// Only [`GeoPointFactory`] calls this.
    const fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude
    #[must_use]
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Returns the longitude
    #[must_use]
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }
}

/// The single gate through which `GeoPoint` values are created
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoPointFactory {
    bounds: CoordinateBounds,
}

impl GeoPointFactory {
    /// Creates a factory enforcing `bounds`
    #[must_use]
    pub const fn new(bounds: CoordinateBounds) -> Self {
        Self { bounds }
    }

    /// Returns the enforced bounds
    #[must_use]
    pub const fn bounds(&self) -> CoordinateBounds {
        self.bounds
    }

    /// Creates a `GeoPoint`
    ///
    /// Boundary values are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on `latitude` or `longitude` when the
    /// coordinate lies outside its range. Latitude is checked first.
    pub fn create(&self, latitude: Decimal, longitude: Decimal) -> Result<GeoPoint, ValidationError> {
        let latitude = Self::check(LATITUDE_FIELD, self.bounds.latitude, latitude)?;
        let longitude = Self::check(LONGITUDE_FIELD, self.bounds.longitude, longitude)?;
        Ok(GeoPoint::new(latitude, longitude))
    }

    fn check(field_name: &str, range: CoordinateRange, value: Decimal) -> Result<Decimal, ValidationError> {
        constrained_type::create_decimal(field_name, |checked| checked, range.min, range.max, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[fixture]
    fn factory() -> GeoPointFactory {
        GeoPointFactory::default()
    }

    #[rstest]
    #[case("90", "0")]
    #[case("-90", "0")]
    #[case("0", "180")]
    #[case("0", "-180")]
    #[case("90", "180")]
    #[case("55.446008", "65.339151")]
    fn test_geo_point_accepts_within_bounds(
        factory: GeoPointFactory,
        #[case] latitude: &str,
        #[case] longitude: &str,
    ) {
        let point = factory.create(decimal(latitude), decimal(longitude)).unwrap();

        assert_eq!(point.latitude(), decimal(latitude));
        assert_eq!(point.longitude(), decimal(longitude));
    }

    #[rstest]
    #[case("90.0001", "0", "latitude")]
    #[case("-90.0001", "0", "latitude")]
    #[case("0", "180.0001", "longitude")]
    #[case("0", "-180.0001", "longitude")]
    #[case("91", "181", "latitude")]
    fn test_geo_point_rejects_out_of_bounds(
        factory: GeoPointFactory,
        #[case] latitude: &str,
        #[case] longitude: &str,
        #[case] field_name: &str,
    ) {
        let error = factory.create(decimal(latitude), decimal(longitude)).unwrap_err();

        assert_eq!(error.field_name, field_name);
    }

    #[rstest]
    fn test_geo_point_factory_custom_bounds() {
        let bounds = CoordinateBounds::new(
            CoordinateRange::create("latitude", decimal("45"), decimal("65")).unwrap(),
            CoordinateRange::create("longitude", decimal("30"), decimal("96")).unwrap(),
        );
        let factory = GeoPointFactory::new(bounds);

        assert!(factory.create(decimal("55"), decimal("37")).is_ok());
        assert!(factory.create(decimal("44.9"), decimal("37")).is_err());
        assert!(factory.create(decimal("55"), decimal("96.1")).is_err());
    }

    #[rstest]
    fn test_coordinate_range_rejects_inverted() {
        let error = CoordinateRange::create("latitude", decimal("10"), decimal("-10")).unwrap_err();

        assert_eq!(error.field_name, "latitude");
    }

    #[rstest]
    fn test_coordinate_bounds_default_is_globe() {
        let bounds = CoordinateBounds::default();

        assert_eq!(bounds.latitude().min(), Decimal::from(-90));
        assert_eq!(bounds.latitude().max(), Decimal::from(90));
        assert_eq!(bounds.longitude().min(), Decimal::from(-180));
        assert_eq!(bounds.longitude().max(), Decimal::from(180));
    }
}
