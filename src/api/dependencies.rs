//! Dependencies injected into the calculation API
//!
//! `FixedTariff` is a stand-in for the real pricing service: it charges the
//! same configured amount for every shipment. Deployments replace it with an
//! implementation of [`TariffCalculateUseCase`] backed by the actual tariff.

use rust_decimal::Decimal;

use crate::compound_types::GeoPointFactory;
use crate::config::{AppConfig, ConfigError};
use crate::simple_types::{CurrencyFactory, Price, ValidationError};
use crate::workflow::{Shipment, TariffCalculateUseCase, TariffError};

/// Charges a fixed amount in the shipment's currency
///
/// # Examples
///
/// ```
/// use fast_delivery::api::FixedTariff;
/// use fast_delivery::simple_types::{CurrencyFactory, Price};
/// use fast_delivery::workflow::TariffCalculateUseCase;
/// use rust_decimal::Decimal;
///
/// let rub = CurrencyFactory::default().create("RUB").unwrap();
/// let tariff = FixedTariff::new(Decimal::from(100), Price::create(Decimal::from(50), rub).unwrap());
///
/// assert_eq!(tariff.minimal_price().unwrap().amount(), Decimal::from(50));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedTariff {
    amount: Decimal,
    minimal_price: Price,
}

impl FixedTariff {
    /// Creates a `FixedTariff`
    #[must_use]
    pub const fn new(amount: Decimal, minimal_price: Price) -> Self {
        Self {
            amount,
            minimal_price,
        }
    }

    /// Creates a `FixedTariff` from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the configured floor price is
    /// negative or its currency code is malformed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let invalid = |key: &str| {
            let key = key.to_string();
            move |error: ValidationError| ConfigError::InvalidValue {
                key,
                message: error.message,
            }
        };
        let currency = CurrencyFactory::new([config.price_currency.as_str()])
            .create(&config.price_currency)
            .map_err(invalid("DELIVERY_PRICE_CURRENCY"))?;
        let minimal_price = Price::create(config.minimal_price, currency)
            .map_err(invalid("DELIVERY_MINIMAL_PRICE"))?;
        Ok(Self::new(config.fixed_price, minimal_price))
    }
}

impl TariffCalculateUseCase for FixedTariff {
    fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError> {
        Ok(Price::create(self.amount, shipment.currency().clone())?)
    }

    fn minimal_price(&self) -> Result<Price, TariffError> {
        Ok(self.minimal_price.clone())
    }
}

/// Everything `calculate_api` needs besides the request
#[derive(Clone, Debug)]
pub struct CalculateDependencies<U> {
    currency_factory: CurrencyFactory,
    geo_point_factory: GeoPointFactory,
    tariff: U,
}

impl<U: TariffCalculateUseCase> CalculateDependencies<U> {
    /// Bundles the factories with a tariff
    #[must_use]
    pub const fn new(
        currency_factory: CurrencyFactory,
        geo_point_factory: GeoPointFactory,
        tariff: U,
    ) -> Self {
        Self {
            currency_factory,
            geo_point_factory,
            tariff,
        }
    }

    /// Returns the currency factory
    #[must_use]
    pub const fn currency_factory(&self) -> &CurrencyFactory {
        &self.currency_factory
    }

    /// Returns the geo-point factory
    #[must_use]
    pub const fn geo_point_factory(&self) -> &GeoPointFactory {
        &self.geo_point_factory
    }

    /// Returns the tariff
    #[must_use]
    pub const fn tariff(&self) -> &U {
        &self.tariff
    }
}

impl CalculateDependencies<FixedTariff> {
    /// Wires the configured factories with the stand-in tariff
    ///
    /// # Errors
    ///
    /// Propagates [`FixedTariff::from_config`] errors.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.currency_factory(),
            config.geo_point_factory(),
            FixedTariff::from_config(config)?,
        ))
    }
}
