//! Simple types used by the delivery domain
//!
//! Each type is a newtype with a smart constructor, so a value that exists
//! has already passed validation. There are no mutators.
//!
//! # Type categories
//!
//! - **Measures**: `Weight`, `LinearDimension`
//! - **Money**: `Currency` (through `CurrencyFactory`), `Price`
//!
//! # Examples
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use fast_delivery::simple_types::{CurrencyFactory, LinearDimension, Price, Weight};
//! use num_bigint::BigUint;
//! use rust_decimal::Decimal;
//!
//! let weight = Weight::create(&BigDecimal::from(4564)).unwrap();
//! assert_eq!(weight.grams(), &BigUint::from(4564_u32));
//!
//! let width = LinearDimension::create("width", Decimal::from(600)).unwrap();
//! assert_eq!(width.millimeters(), Decimal::from(600));
//!
//! let rub = CurrencyFactory::default().create("RUB").unwrap();
//! let price = Price::create(Decimal::from(250), rub).unwrap();
//! assert_eq!(price.currency().code(), "RUB");
//! ```

pub mod constrained_type;
mod currency_types;
mod dimension_types;
mod error;
mod price_types;
mod weight_types;

pub use error::ValidationError;

pub use weight_types::Weight;

pub use dimension_types::LinearDimension;

pub use currency_types::{Currency, CurrencyFactory, DEFAULT_CURRENCY_CODE};
pub use price_types::Price;
