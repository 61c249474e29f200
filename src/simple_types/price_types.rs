//! Price type definition

use rust_decimal::Decimal;

use super::constrained_type;
use super::currency_types::Currency;
use super::error::ValidationError;

/// A non-negative amount of money in a given currency
///
/// Produced by the tariff use case for both the calculated and the
/// minimal delivery price.
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::{CurrencyFactory, Price};
/// use rust_decimal::Decimal;
///
/// let rub = CurrencyFactory::default().create("RUB").unwrap();
/// let price = Price::create(Decimal::new(1250, 2), rub).unwrap();
/// assert_eq!(price.amount().to_string(), "12.50");
/// assert_eq!(price.currency().code(), "RUB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Price {
    amount: Decimal,
    currency: Currency,
}

impl Price {
    /// Field name used in error messages
    const FIELD_NAME: &'static str = "price";

    /// Creates a `Price`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `amount` is negative.
    pub fn create(amount: Decimal, currency: Currency) -> Result<Self, ValidationError> {
        constrained_type::create_decimal_at_least(
            Self::FIELD_NAME,
            |amount| Self { amount, currency },
            Decimal::ZERO,
            amount,
        )
    }

    /// Returns the amount
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns `true` if both prices are in the same currency
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }
}
