//! Weight type definition
//!
//! Defines `Weight`, the mass of a cargo package in whole grams.

use bigdecimal::BigDecimal;
use num_bigint::BigUint;
use num_traits::Zero;

use super::constrained_type;
use super::error::ValidationError;

/// Mass of a package in whole grams
///
/// Holds an arbitrary-precision non-negative integer: the grams given are
/// the grams read back, however many digits they have, and sums never
/// overflow.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::simple_types::Weight;
/// use num_bigint::BigUint;
/// use std::str::FromStr;
///
/// let weight = Weight::create(&BigDecimal::from(4564)).unwrap();
/// assert_eq!(weight.grams(), &BigUint::from(4564_u32));
///
/// let heavy = BigDecimal::from_str("123456789012345678901").unwrap();
/// assert_eq!(
///     Weight::create(&heavy).unwrap().grams().to_string(),
///     "123456789012345678901"
/// );
///
/// // Negative and fractional grams are rejected
/// assert!(Weight::create(&BigDecimal::from(-1)).is_err());
/// assert!(Weight::create(&BigDecimal::from_str("1.5").unwrap()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(BigUint);

impl Weight {
    /// Field name used in error messages
    const FIELD_NAME: &'static str = "weight";

    /// Creates a `Weight` from a number of grams
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `grams` is negative, not a whole number,
    /// or longer than [`constrained_type::MAX_NATURAL_DIGITS`] digits.
    pub fn create(grams: &BigDecimal) -> Result<Self, ValidationError> {
        constrained_type::create_natural_number(Self::FIELD_NAME, Self, grams)
    }

    /// The empty weight, identity for [`Weight::add`]
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the weight in grams
    #[must_use]
    pub const fn grams(&self) -> &BigUint {
        &self.0
    }

    /// Sums two weights
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, weight| total.add(&weight))
    }
}

impl<'a> std::iter::Sum<&'a Self> for Weight {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, weight| total.add(weight))
    }
}
