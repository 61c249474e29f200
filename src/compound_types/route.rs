//! Delivery route

use super::geo_point::GeoPoint;

/// Where a shipment starts and where it goes
///
/// Departure and destination may coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    departure: GeoPoint,
    destination: GeoPoint,
}

impl Route {
    /// Creates a `Route`
    #[must_use]
    pub const fn new(departure: GeoPoint, destination: GeoPoint) -> Self {
        Self {
            departure,
            destination,
        }
    }

    /// Returns the departure point
    #[must_use]
    pub const fn departure(&self) -> GeoPoint {
        self.departure
    }

    /// Returns the destination point
    #[must_use]
    pub const fn destination(&self) -> GeoPoint {
        self.destination
    }
}
