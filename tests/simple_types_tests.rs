//! Boundary values and error messages of the simple types
//!
//! Complements the unit tests next to each type with the exact values the
//! delivery service must accept or reject.

use bigdecimal::BigDecimal;
use fast_delivery::simple_types::{
    CurrencyFactory, DEFAULT_CURRENCY_CODE, LinearDimension, Price, ValidationError, Weight,
};
use num_bigint::BigUint;
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

fn decimal(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn big_decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn grams(value: &str) -> BigUint {
    BigUint::from_str(value).unwrap()
}

// =============================================================================
// Weight
// =============================================================================

mod weight_tests {
    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(100)]
    #[case(10_000)]
    fn test_weight_accepts_non_negative_grams(#[case] value: u64) {
        let weight = Weight::create(&BigDecimal::from(value)).unwrap();

        assert_eq!(weight.grams(), &BigUint::from(value));
    }

    #[rstest]
    #[case(-1)]
    #[case(-100)]
    #[case(-10_000)]
    fn test_weight_rejects_negative_grams(#[case] value: i64) {
        let error = Weight::create(&BigDecimal::from(value)).unwrap_err();

        assert_eq!(error, ValidationError::new("weight", "Must not be less than 0"));
    }

    #[rstest]
    #[case("0.5")]
    #[case("1000.001")]
    fn test_weight_rejects_fractional_grams(#[case] value: &str) {
        let error = Weight::create(&big_decimal(value)).unwrap_err();

        assert_eq!(error.field_name, "weight");
        assert_eq!(error.message, format!("Must be a whole number, got {value}"));
    }

    #[rstest]
    fn test_weight_accepts_trailing_zero_scale() {
        let weight = Weight::create(&big_decimal("1500.000")).unwrap();

        assert_eq!(weight, Weight::create(&BigDecimal::from(1500)).unwrap());
    }

    #[rstest]
    #[case("18446744073709551616")]
    #[case("123456789012345678901")]
    #[case("79228162514264337593543950336")]
    #[case("340282366920938463463374607431768211457")]
    fn test_weight_keeps_every_digit_past_machine_integers(#[case] value: &str) {
        let weight = Weight::create(&big_decimal(value)).unwrap();

        assert_eq!(weight.grams(), &grams(value));
        assert_eq!(weight.grams().to_string(), value);
    }

    #[rstest]
    fn test_weight_exponent_notation_is_exact() {
        let weight = Weight::create(&big_decimal("1e29")).unwrap();

        assert_eq!(weight.grams(), &grams("100000000000000000000000000000"));
    }

    #[rstest]
    fn test_weight_sum() {
        let total: Weight = [250, 750, 1000]
            .into_iter()
            .map(|value| Weight::create(&BigDecimal::from(value)).unwrap())
            .sum();

        assert_eq!(total.grams(), &BigUint::from(2000_u32));
        assert!(total > Weight::zero());
    }

    #[rstest]
    fn test_weight_sum_does_not_overflow() {
        let heaviest = Weight::create(&big_decimal("79228162514264337593543950335")).unwrap();

        let total: Weight = [heaviest.clone(), heaviest.clone(), heaviest].iter().sum();

        assert_eq!(total.grams(), &grams("237684487542793012780631851005"));
    }
}

// =============================================================================
// LinearDimension
// =============================================================================

mod linear_dimension_tests {
    use super::*;

    #[rstest]
    #[case("0")]
    #[case("1")]
    #[case("345")]
    #[case("589.5")]
    fn test_dimension_accepts_non_negative(#[case] millimeters: &str) {
        let dimension = LinearDimension::create("length", decimal(millimeters)).unwrap();

        assert_eq!(dimension.millimeters(), decimal(millimeters));
    }

    #[rstest]
    #[case("width", "-1")]
    #[case("height", "-0.1")]
    fn test_dimension_error_names_the_side(#[case] field_name: &str, #[case] millimeters: &str) {
        let error = LinearDimension::create(field_name, decimal(millimeters)).unwrap_err();

        assert_eq!(error.field_name, field_name);
    }
}

// =============================================================================
// Currency and Price
// =============================================================================

mod currency_tests {
    use super::*;

    #[rstest]
    fn test_default_factory_offers_only_default_currency() {
        let factory = CurrencyFactory::default();

        assert!(factory.is_available(DEFAULT_CURRENCY_CODE));
        assert!(!factory.is_available("USD"));
        assert_eq!(factory.create("RUB").unwrap().code(), "RUB");
    }

    #[rstest]
    #[case("")]
    #[case("rub")]
    #[case("RUBX")]
    #[case("R1B")]
    fn test_malformed_codes_are_rejected(#[case] code: &str) {
        let error = CurrencyFactory::new(["RUB", "USD"]).create(code).unwrap_err();

        assert_eq!(error.field_name, "currencyCode");
    }

    #[rstest]
    fn test_well_formed_but_unavailable_code_is_rejected() {
        let error = CurrencyFactory::default().create("EUR").unwrap_err();

        assert_eq!(error.to_string(), "currencyCode: Currency 'EUR' is not supported");
    }

    #[rstest]
    fn test_every_configured_code_is_accepted() {
        let factory = CurrencyFactory::new(["RUB", "USD", "EUR"]);

        for code in ["RUB", "USD", "EUR"] {
            assert_eq!(factory.create(code).unwrap().code(), code);
        }
    }

    #[rstest]
    fn test_price_keeps_amount_and_currency() {
        let rub = CurrencyFactory::default().create("RUB").unwrap();
        let price = Price::create(decimal("30.50"), rub.clone()).unwrap();
        let floor = Price::create(Decimal::from(50), rub).unwrap();

        assert_eq!(price.amount(), decimal("30.50"));
        assert!(price.same_currency(&floor));
    }
}
