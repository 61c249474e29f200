//! Helper functions for building constrained types
//!
//! Each helper is generic over the newtype it produces, so a value object's
//! smart constructor reduces to a single call passing its tuple constructor.

use bigdecimal::BigDecimal;
use num_bigint::{BigUint, Sign};
use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a decimal type bounded from below
///
/// # Errors
///
/// Returns [`ValidationError`] when `value` is less than `min_value`.
///
/// # Examples
///
/// ```
/// use fast_delivery::simple_types::constrained_type::create_decimal_at_least;
/// use rust_decimal::Decimal;
///
/// #[derive(Debug, PartialEq)]
/// struct Depth(Decimal);
///
/// assert!(create_decimal_at_least("depth", Depth, Decimal::ZERO, Decimal::from(3)).is_ok());
/// assert!(create_decimal_at_least("depth", Depth, Decimal::ZERO, Decimal::from(-3)).is_err());
/// ```
pub fn create_decimal_at_least<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Largest number of integer digits [`create_natural_number`] expands
pub const MAX_NATURAL_DIGITS: u64 = 100_000;

/// Creates a type holding an exact non-negative integer
///
/// `value` may use any notation `BigDecimal` parses (`4564`, `4564.000`,
/// `1e29`); it is accepted when it denotes a whole number. The sign check
/// runs first, so `-1.5` is reported as too small rather than as fractional.
///
/// # Errors
///
/// Returns [`ValidationError`] when `value` is negative, has a fractional
/// part, or has more than [`MAX_NATURAL_DIGITS`] digits.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::simple_types::constrained_type::create_natural_number;
/// use num_bigint::BigUint;
/// use std::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// struct Count(BigUint);
///
/// let count = create_natural_number("count", Count, &BigDecimal::from_str("1e21").unwrap()).unwrap();
/// assert_eq!(count, Count(BigUint::from_str("1000000000000000000000").unwrap()));
/// ```
pub fn create_natural_number<T, F>(
    field_name: &str,
    constructor: F,
    value: &BigDecimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(BigUint) -> T,
{
    if value.sign() == Sign::Minus {
        return Err(ValidationError::new(field_name, "Must not be less than 0"));
    }

    // No trailing zeros remain, so a positive scale means a fractional part.
    let normalized = value.normalized();
    let (digits, scale) = normalized.as_bigint_and_exponent();
    if scale > 0 {
        return Err(ValidationError::new(
            field_name,
            &format!("Must be a whole number, got {value}"),
        ));
    }

    let too_large = || {
        ValidationError::new(
            field_name,
            &format!("Must have at most {MAX_NATURAL_DIGITS} digits"),
        )
    };
    let trailing_zeros = scale.unsigned_abs();
    if normalized.digits().saturating_add(trailing_zeros) > MAX_NATURAL_DIGITS {
        return Err(too_large());
    }
    let exponent = u32::try_from(trailing_zeros).map_err(|_| too_large())?;

    let (_, magnitude) = digits.into_parts();
    Ok(constructor(magnitude * BigUint::from(10_u8).pow(exponent)))
}

/// Creates a decimal type with an inclusive range constraint
///
/// # Errors
///
/// Returns [`ValidationError`] when `value` lies outside `[min_value, max_value]`.
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a string type that matches a regular expression pattern
///
/// Without anchors (`^$`) the pattern matches partially; callers wanting an
/// exact match include them.
///
/// # Errors
///
/// Returns [`ValidationError`] for an empty string or a pattern mismatch.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        let pattern_str = pattern.as_str();
        Err(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{pattern_str}'"),
        ))
    }
}
