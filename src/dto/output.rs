//! Output DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;
use crate::workflow::CalculatedPrices;

/// Body of a successful calculation response
///
/// Amounts are serialized as decimal strings to keep their precision.
///
/// # Examples
///
/// ```
/// use fast_delivery::dto::CalculatePackagesResponseDto;
/// use fast_delivery::simple_types::{CurrencyFactory, Price};
/// use fast_delivery::workflow::CalculatedPrices;
/// use rust_decimal::Decimal;
///
/// let rub = CurrencyFactory::default().create("RUB").unwrap();
/// let prices = CalculatedPrices::new(
///     Price::create(Decimal::from(120), rub.clone()).unwrap(),
///     Price::create(Decimal::from(50), rub).unwrap(),
/// );
///
/// let dto = CalculatePackagesResponseDto::from_domain(&prices).unwrap();
/// let json = serde_json::to_string(&dto).unwrap();
/// assert_eq!(json, r#"{"totalPrice":"120","deliveryMinPrice":"50","currencyCode":"RUB"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePackagesResponseDto {
    /// Price computed for the shipment
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    /// Floor price of any delivery
    #[serde(with = "rust_decimal::serde::str")]
    pub delivery_min_price: Decimal,
    /// Currency shared by both amounts
    pub currency_code: String,
}

impl CalculatePackagesResponseDto {
    /// Field name used in error messages
    const FIELD_NAME: &'static str = "currencyCode";

    /// Creates the response from the workflow result
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the calculated and minimal prices are
    /// in different currencies; a single `currencyCode` could not describe
    /// both.
    pub fn from_domain(prices: &CalculatedPrices) -> Result<Self, ValidationError> {
        let price = prices.price();
        let minimal_price = prices.minimal_price();
        if !price.same_currency(minimal_price) {
            return Err(ValidationError::new(
                Self::FIELD_NAME,
                &format!(
                    "Currency codes must be the same, got {} and {}",
                    price.currency(),
                    minimal_price.currency()
                ),
            ));
        }
        Ok(Self {
            total_price: price.amount(),
            delivery_min_price: minimal_price.amount(),
            currency_code: price.currency().code().to_string(),
        })
    }
}
