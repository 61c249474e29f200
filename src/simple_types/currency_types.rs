//! Currency type and its factory
//!
//! A `Currency` can only be obtained from a [`CurrencyFactory`], which holds
//! the set of currency codes the service is configured to price in.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::constrained_type;
use super::error::ValidationError;

/// ISO 4217 alphabetic code shape
static CURRENCY_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("Invalid currency code regex pattern"));

/// Currency used when none is configured
pub const DEFAULT_CURRENCY_CODE: &str = "RUB";

/// A currency the service accepts
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::CurrencyFactory;
///
/// let factory = CurrencyFactory::new(["RUB", "USD"]);
/// let currency = factory.create("USD").unwrap();
/// assert_eq!(currency.code(), "USD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Wraps an already checked code. Only [`CurrencyFactory`] calls this.
    pub(crate) const fn new(code: String) -> Self {
        Self(code)
    }

    /// Returns the three-letter currency code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Creates [`Currency`] values from codes, admitting only the configured set
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::CurrencyFactory;
///
/// let factory = CurrencyFactory::default();
/// assert!(factory.create("RUB").is_ok());
/// assert!(factory.create("EUR").is_err());
/// assert!(factory.create("rub").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFactory {
    available: BTreeSet<String>,
}

impl Default for CurrencyFactory {
    fn default() -> Self {
        Self::new([DEFAULT_CURRENCY_CODE])
    }
}

impl CurrencyFactory {
    /// Field name used in error messages
    const FIELD_NAME: &'static str = "currencyCode";

    /// Creates a factory accepting exactly the given codes
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `code` is one of the configured currencies
    #[must_use]
    pub fn is_available(&self, code: &str) -> bool {
        self.available.contains(code)
    }

    /// Creates a `Currency` from its code
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `code` is empty, is not three upper-case
    /// letters, or is not among the configured currencies.
    pub fn create(&self, code: &str) -> Result<Currency, ValidationError> {
        let currency = constrained_type::create_like(
            Self::FIELD_NAME,
            Currency::new,
            &CURRENCY_CODE_PATTERN,
            code,
        )?;
        if self.is_available(currency.code()) {
            Ok(currency)
        } else {
            Err(ValidationError::new(
                Self::FIELD_NAME,
                &format!("Currency '{code}' is not supported"),
            ))
        }
    }
}
