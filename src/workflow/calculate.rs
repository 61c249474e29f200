//! Request mapping and the calculation workflow
//!
//! # Processing flow
//!
//! 1. `map_request_to_shipment` - validate every field and assemble a
//!    [`Shipment`] (error: Validation)
//! 2. `TariffCalculateUseCase::calc` - price the shipment (error: Tariff)
//! 3. `TariffCalculateUseCase::minimal_price` - fetch the floor price
//!    (error: Tariff)
//!
//! The first failing step aborts the run, so the use case never sees a
//! partially valid shipment.

use crate::compound_types::{GeoPoint, GeoPointFactory, Pack, PackVolume, Route};
use crate::simple_types::{CurrencyFactory, Price, ValidationError, Weight};

use super::error_types::CalculateError;
use super::shipment::Shipment;
use super::tariff::TariffCalculateUseCase;
use super::unvalidated_types::{UnvalidatedCoordinates, UnvalidatedPackage, UnvalidatedShipment};

/// Result of a successful calculation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatedPrices {
    price: Price,
    minimal_price: Price,
}

impl CalculatedPrices {
    /// Creates a `CalculatedPrices`
    #[must_use]
    pub const fn new(price: Price, minimal_price: Price) -> Self {
        Self {
            price,
            minimal_price,
        }
    }

    /// Price computed for the shipment
    #[must_use]
    pub const fn price(&self) -> &Price {
        &self.price
    }

    /// Floor price of any delivery
    #[must_use]
    pub const fn minimal_price(&self) -> &Price {
        &self.minimal_price
    }
}

/// Maps an unvalidated request onto a [`Shipment`]
///
/// Packages keep their submission order. Validation stops at the first bad
/// value; errors carry a qualified field name such as `packages[1].weight`
/// or `departure.latitude`.
///
/// # Errors
///
/// Returns `ValidationError` for a negative or fractional weight, a negative
/// side, an out-of-bounds coordinate or an unsupported currency.
pub fn map_request_to_shipment(
    request: &UnvalidatedShipment,
    currency_factory: &CurrencyFactory,
    geo_point_factory: &GeoPointFactory,
) -> Result<Shipment, ValidationError> {
    let packages = request
        .packages()
        .iter()
        .enumerate()
        .map(|(index, package)| {
            to_pack(package).map_err(|error| error.within(&format!("packages[{index}]")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let departure = to_geo_point(geo_point_factory, request.departure())
        .map_err(|error| error.within("departure"))?;
    let destination = to_geo_point(geo_point_factory, request.destination())
        .map_err(|error| error.within("destination"))?;

    let currency = currency_factory.create(request.currency_code())?;

    Ok(Shipment::new(
        packages,
        currency,
        Route::new(departure, destination),
    ))
}

fn to_pack(package: &UnvalidatedPackage) -> Result<Pack, ValidationError> {
    let weight = Weight::create(package.weight())?;
    let volume = PackVolume::create(package.length(), package.width(), package.height())?;
    Ok(Pack::new(weight, volume))
}

fn to_geo_point(
    factory: &GeoPointFactory,
    coordinates: UnvalidatedCoordinates,
) -> Result<GeoPoint, ValidationError> {
    factory.create(coordinates.latitude(), coordinates.longitude())
}

/// Runs the whole calculation for one request
///
/// # Errors
///
/// Returns `CalculateError::Validation` when the request is invalid (the
/// tariff is not consulted) and `CalculateError::Tariff` when pricing fails.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::compound_types::GeoPointFactory;
/// use fast_delivery::simple_types::{CurrencyFactory, Price};
/// use fast_delivery::workflow::{
///     Shipment, TariffCalculateUseCase, TariffError, UnvalidatedCoordinates,
///     UnvalidatedPackage, UnvalidatedShipment, calculate,
/// };
/// use rust_decimal::Decimal;
///
/// struct PerPackage;
///
/// impl TariffCalculateUseCase for PerPackage {
///     fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError> {
///         let amount = Decimal::from(shipment.package_count()) * Decimal::from(100);
///         Ok(Price::create(amount, shipment.currency().clone())?)
///     }
///
///     fn minimal_price(&self) -> Result<Price, TariffError> {
///         let rub = CurrencyFactory::default().create("RUB")?;
///         Ok(Price::create(Decimal::from(50), rub)?)
///     }
/// }
///
/// let request = UnvalidatedShipment::new(
///     vec![UnvalidatedPackage::new(
///         BigDecimal::from(4564),
///         Decimal::from(345),
///         Decimal::from(589),
///         Decimal::from(234),
///     )],
///     "RUB".to_string(),
///     UnvalidatedCoordinates::new(Decimal::from(55), Decimal::from(37)),
///     UnvalidatedCoordinates::new(Decimal::from(59), Decimal::from(30)),
/// );
///
/// let prices = calculate(
///     &request,
///     &CurrencyFactory::default(),
///     &GeoPointFactory::default(),
///     &PerPackage,
/// )
/// .unwrap();
///
/// assert_eq!(prices.price().amount(), Decimal::from(100));
/// assert_eq!(prices.minimal_price().amount(), Decimal::from(50));
/// ```
pub fn calculate<U>(
    request: &UnvalidatedShipment,
    currency_factory: &CurrencyFactory,
    geo_point_factory: &GeoPointFactory,
    tariff: &U,
) -> Result<CalculatedPrices, CalculateError>
where
    U: TariffCalculateUseCase + ?Sized,
{
    let shipment = map_request_to_shipment(request, currency_factory, geo_point_factory)
        .inspect_err(|error| tracing::warn!(%error, "rejected calculation request"))?;

    tracing::debug!(
        packages = shipment.package_count(),
        currency = %shipment.currency(),
        "shipment assembled"
    );

    let price = tariff.calc(&shipment)?;
    let minimal_price = tariff.minimal_price()?;

    tracing::info!(
        price = %price.amount(),
        minimal_price = %minimal_price.amount(),
        currency = %price.currency(),
        "delivery price calculated"
    );

    Ok(CalculatedPrices::new(price, minimal_price))
}
