//! Shipment aggregate

use bigdecimal::BigDecimal;

use crate::compound_types::{Pack, Route};
use crate::simple_types::{Currency, Weight};

/// A complete delivery request: packages, currency and route
///
/// Built once per request from already validated parts and handed to the
/// tariff use case. An empty package list is allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shipment {
    packages: Vec<Pack>,
    currency: Currency,
    route: Route,
}

impl Shipment {
    /// Creates a `Shipment`
    #[must_use]
    pub const fn new(packages: Vec<Pack>, currency: Currency, route: Route) -> Self {
        Self {
            packages,
            currency,
            route,
        }
    }

    /// Packages in submission order
    #[must_use]
    pub fn packages(&self) -> &[Pack] {
        &self.packages
    }

    /// Number of packages
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Currency the price is requested in
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Departure and destination
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Total weight of all packages, exact for any number of packages
    #[must_use]
    pub fn weight_all_packages(&self) -> Weight {
        self.packages.iter().map(Pack::weight).sum()
    }

    /// Total volume of all packages in cubic meters, exact
    #[must_use]
    pub fn volume_all_packages(&self) -> BigDecimal {
        self.packages
            .iter()
            .map(|pack| pack.volume().cubic_meters())
            .sum()
    }
}
