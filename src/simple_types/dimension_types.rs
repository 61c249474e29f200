//! Linear dimension type definition

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::ValidationError;

/// A package side length in millimeters
///
/// Constrained to non-negative values; fractional millimeters are allowed.
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::LinearDimension;
/// use rust_decimal::Decimal;
///
/// let length = LinearDimension::create("length", Decimal::from(345)).unwrap();
/// assert_eq!(length.millimeters(), Decimal::from(345));
///
/// assert!(LinearDimension::create("length", Decimal::from(-1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinearDimension(Decimal);

impl LinearDimension {
    /// Creates a `LinearDimension` from a length in millimeters
    ///
    /// `field_name` names the side (`length`, `width`, `height`) in errors.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `millimeters` is negative.
    pub fn create(field_name: &str, millimeters: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal_at_least(field_name, Self, Decimal::ZERO, millimeters)
    }

    /// Returns the length in millimeters
    #[must_use]
    pub const fn millimeters(&self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("0")]
    #[case("1")]
    #[case("100")]
    #[case("10000")]
    #[case("0.5")]
    fn test_linear_dimension_create_non_negative(#[case] value: &str) {
        let millimeters = Decimal::from_str(value).unwrap();

        let dimension = LinearDimension::create("length", millimeters).unwrap();
        assert_eq!(dimension.millimeters(), millimeters);
    }

    #[rstest]
    #[case("-1")]
    #[case("-100")]
    #[case("-10000")]
    #[case("-0.001")]
    fn test_linear_dimension_create_negative_fails(#[case] value: &str) {
        let error = LinearDimension::create("height", Decimal::from_str(value).unwrap()).unwrap_err();

        assert_eq!(error.field_name, "height");
        assert_eq!(error.message, "Must not be less than 0");
    }
}
