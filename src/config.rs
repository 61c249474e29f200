//! Application configuration
//!
//! Loaded once at startup from environment variables (a `.env` file is
//! honoured when present). Every variable is optional; unset ones fall back
//! to [`AppConfig::default`], set but unparsable ones are an error.
//!
//! | Variable | Default |
//! |---|---|
//! | `DELIVERY_AVAILABLE_CURRENCIES` | `RUB` |
//! | `DELIVERY_LATITUDE_MIN` / `DELIVERY_LATITUDE_MAX` | `-90` / `90` |
//! | `DELIVERY_LONGITUDE_MIN` / `DELIVERY_LONGITUDE_MAX` | `-180` / `180` |
//! | `DELIVERY_FIXED_PRICE` | `100` |
//! | `DELIVERY_MINIMAL_PRICE` | `50` |
//! | `DELIVERY_PRICE_CURRENCY` | `RUB` |

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::compound_types::{CoordinateBounds, CoordinateRange, GeoPointFactory};
use crate::simple_types::{CurrencyFactory, DEFAULT_CURRENCY_CODE};

const AVAILABLE_CURRENCIES: &str = "DELIVERY_AVAILABLE_CURRENCIES";
const LATITUDE_MIN: &str = "DELIVERY_LATITUDE_MIN";
const LATITUDE_MAX: &str = "DELIVERY_LATITUDE_MAX";
const LONGITUDE_MIN: &str = "DELIVERY_LONGITUDE_MIN";
const LONGITUDE_MAX: &str = "DELIVERY_LONGITUDE_MAX";
const FIXED_PRICE: &str = "DELIVERY_FIXED_PRICE";
const MINIMAL_PRICE: &str = "DELIVERY_MINIMAL_PRICE";
const PRICE_CURRENCY: &str = "DELIVERY_PRICE_CURRENCY";

/// Configuration loading failure
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Currency codes the service prices in
    pub available_currencies: Vec<String>,
    /// Bounds accepted for departure and destination points
    pub coordinate_bounds: CoordinateBounds,
    /// Amount returned by the stand-in tariff for every shipment
    pub fixed_price: Decimal,
    /// Amount returned by the stand-in tariff as the floor price
    pub minimal_price: Decimal,
    /// Currency of the stand-in tariff's floor price
    pub price_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            available_currencies: vec![DEFAULT_CURRENCY_CODE.to_string()],
            coordinate_bounds: CoordinateBounds::default(),
            fixed_price: Decimal::from(100),
            minimal_price: Decimal::from(50),
            price_currency: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed, or if a coordinate minimum exceeds its maximum.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// [`AppConfig::from_env`] passes the process environment; tests pass a
    /// map.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let available_currencies = lookup(AVAILABLE_CURRENCIES).map_or_else(
            || Ok(defaults.available_currencies.clone()),
            |value| parse_code_list(AVAILABLE_CURRENCIES, &value),
        )?;

        let default_latitude = defaults.coordinate_bounds.latitude();
        let default_longitude = defaults.coordinate_bounds.longitude();
        let latitude = parse_range(
            &lookup,
            (LATITUDE_MIN, LATITUDE_MAX),
            (default_latitude.min(), default_latitude.max()),
        )?;
        let longitude = parse_range(
            &lookup,
            (LONGITUDE_MIN, LONGITUDE_MAX),
            (default_longitude.min(), default_longitude.max()),
        )?;

        let fixed_price = get_optional_parsed(&lookup, FIXED_PRICE, defaults.fixed_price)?;
        let minimal_price = get_optional_parsed(&lookup, MINIMAL_PRICE, defaults.minimal_price)?;
        let price_currency = lookup(PRICE_CURRENCY)
            .map(|value| value.trim().to_string())
            .unwrap_or(defaults.price_currency);

        Ok(Self {
            available_currencies,
            coordinate_bounds: CoordinateBounds::new(latitude, longitude),
            fixed_price,
            minimal_price,
            price_currency,
        })
    }

    /// Builds the currency factory this configuration describes
    #[must_use]
    pub fn currency_factory(&self) -> CurrencyFactory {
        CurrencyFactory::new(self.available_currencies.iter().cloned())
    }

    /// Builds the geo-point factory this configuration describes
    #[must_use]
    pub const fn geo_point_factory(&self) -> GeoPointFactory {
        GeoPointFactory::new(self.coordinate_bounds)
    }
}

fn parse_code_list(key: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let codes: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();
    if codes.is_empty() {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "at least one currency code is required".to_string(),
        })
    } else {
        Ok(codes)
    }
}

fn parse_range<F>(
    lookup: &F,
    (min_key, max_key): (&str, &str),
    (default_min, default_max): (Decimal, Decimal),
) -> Result<CoordinateRange, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let min = get_optional_parsed(lookup, min_key, default_min)?;
    let max = get_optional_parsed(lookup, max_key, default_max)?;
    CoordinateRange::create(min_key, min, max).map_err(|error| ConfigError::InvalidValue {
        key: min_key.to_string(),
        message: error.message,
    })
}

/// Gets an optional variable and parses it, with a default value.
fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or_else(
        || Ok(default),
        |value| {
            value
                .trim()
                .parse()
                .map_err(|error: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    fn config_error_invalid_value_display() {
        let error = ConfigError::InvalidValue {
            key: "DELIVERY_LATITUDE_MIN".to_string(),
            message: "must be a number".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid value for DELIVERY_LATITUDE_MIN: must be a number"
        );
    }

    #[rstest]
    fn from_lookup_empty_gives_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[rstest]
    fn from_lookup_reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (AVAILABLE_CURRENCIES, "RUB, USD ,EUR"),
            (LATITUDE_MIN, "45"),
            (LATITUDE_MAX, "65"),
            (LONGITUDE_MIN, "30"),
            (LONGITUDE_MAX, "96"),
            (FIXED_PRICE, "250.50"),
            (MINIMAL_PRICE, "75"),
            (PRICE_CURRENCY, "USD"),
        ]))
        .unwrap();

        assert_eq!(config.available_currencies, vec!["RUB", "USD", "EUR"]);
        assert_eq!(config.coordinate_bounds.latitude().min(), Decimal::from(45));
        assert_eq!(config.coordinate_bounds.longitude().max(), Decimal::from(96));
        assert_eq!(config.fixed_price, Decimal::new(25050, 2));
        assert_eq!(config.minimal_price, Decimal::from(75));
        assert_eq!(config.price_currency, "USD");
    }

    #[rstest]
    #[case(LATITUDE_MIN, "north")]
    #[case(FIXED_PRICE, "cheap")]
    #[case(AVAILABLE_CURRENCIES, " , ")]
    fn from_lookup_rejects_unparsable(#[case] key: &str, #[case] value: &str) {
        let error = AppConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();

        let ConfigError::InvalidValue { key: failed, .. } = error;
        assert_eq!(failed, key);
    }

    #[rstest]
    fn from_lookup_rejects_inverted_range() {
        let error = AppConfig::from_lookup(lookup_from(&[
            (LONGITUDE_MIN, "100"),
            (LONGITUDE_MAX, "10"),
        ]))
        .unwrap_err();

        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: LONGITUDE_MIN.to_string(),
                message: "Lower bound 100 must not exceed upper bound 10".to_string(),
            }
        );
    }

    #[rstest]
    fn factories_follow_config() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (AVAILABLE_CURRENCIES, "USD"),
            (LATITUDE_MAX, "60"),
        ]))
        .unwrap();

        assert!(config.currency_factory().create("USD").is_ok());
        assert!(config.currency_factory().create("RUB").is_err());
        assert!(
            config
                .geo_point_factory()
                .create(Decimal::from(61), Decimal::ZERO)
                .is_err()
        );
    }
}
