//! Delivery price calculation API

use serde::Serialize;

use crate::api::dependencies::CalculateDependencies;
use crate::api::types::{ApiRequest, ApiResponse};
use crate::dto::{CalculateErrorDto, CalculatePackagesRequestDto, CalculatePackagesResponseDto};
use crate::workflow::{CalculateError, CalculatedPrices, TariffCalculateUseCase, TariffError, calculate};

/// Computes the delivery price for a JSON request
///
/// # Processing Flow
///
/// 1. Deserialize the body into `CalculatePackagesRequestDto`
/// 2. Convert it to `UnvalidatedShipment`
/// 3. Run the `calculate` workflow
/// 4. On success: 200 with `CalculatePackagesResponseDto`
/// 5. On failure: `CalculateErrorDto` with 400 (validation) or 500 (tariff)
///
/// Malformed JSON is answered 400 with a `JsonParseError` body.
///
/// # Examples
///
/// ```
/// use fast_delivery::api::{ApiRequest, CalculateDependencies, calculate_api};
/// use fast_delivery::config::AppConfig;
///
/// let dependencies = CalculateDependencies::from_config(&AppConfig::default()).unwrap();
/// let request = ApiRequest::new(
///     r#"{
///         "packages": [{"weight": 1000, "length": 345, "width": 589, "height": 234}],
///         "currencyCode": "RUB",
///         "departure": {"latitude": 55.75, "longitude": 37.61},
///         "destination": {"latitude": 59.93, "longitude": 30.33}
///     }"#
///     .to_string(),
/// );
///
/// let response = calculate_api(&request, &dependencies);
///
/// assert_eq!(response.status_code(), 200);
/// assert!(response.body().contains(r#""totalPrice":"100""#));
/// ```
#[must_use]
pub fn calculate_api<U>(request: &ApiRequest, dependencies: &CalculateDependencies<U>) -> ApiResponse
where
    U: TariffCalculateUseCase,
{
    let request_dto: CalculatePackagesRequestDto = match serde_json::from_str(request.body()) {
        Ok(dto) => dto,
        Err(error) => {
            tracing::warn!(%error, "malformed calculation request");
            return create_json_parse_error_response(&error);
        }
    };

    let unvalidated_shipment = request_dto.to_unvalidated_shipment();

    let result = calculate(
        &unvalidated_shipment,
        dependencies.currency_factory(),
        dependencies.geo_point_factory(),
        dependencies.tariff(),
    );

    match result.and_then(|prices| to_response_dto(&prices)) {
        Ok(response_dto) => create_success_response(&response_dto),
        Err(error) => create_error_response(&error),
    }
}

/// A currency mismatch between the two prices is the tariff's fault.
fn to_response_dto(prices: &CalculatedPrices) -> Result<CalculatePackagesResponseDto, CalculateError> {
    CalculatePackagesResponseDto::from_domain(prices)
        .map_err(|error| CalculateError::Tariff(TariffError::from(error)))
}

fn create_success_response(response_dto: &CalculatePackagesResponseDto) -> ApiResponse {
    serialize(response_dto).map_or_else(serialization_error_response, ApiResponse::ok)
}

fn create_error_response(error: &CalculateError) -> ApiResponse {
    let status_code = determine_error_status_code(error);
    if status_code >= 500 {
        tracing::error!(%error, "delivery price calculation failed");
    }
    serialize(&CalculateErrorDto::from_domain(error)).map_or_else(
        serialization_error_response,
        |json| ApiResponse::new(status_code, json),
    )
}

fn create_json_parse_error_response(error: &serde_json::Error) -> ApiResponse {
    let body = serde_json::json!({
        "type": "JsonParseError",
        "message": error.to_string(),
    });
    ApiResponse::bad_request(body.to_string())
}

const fn determine_error_status_code(error: &CalculateError) -> u16 {
    if error.is_client_error() { 400 } else { 500 }
}

fn serialize<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

fn serialization_error_response(error: serde_json::Error) -> ApiResponse {
    tracing::error!(%error, "failed to serialize response");
    ApiResponse::internal_server_error(
        r#"{"type":"SerializationError","message":"Failed to serialize response"}"#.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::GeoPointFactory;
    use crate::simple_types::{CurrencyFactory, Price};
    use crate::workflow::Shipment;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use serde_json::Value;

    struct MismatchedTariff;

    impl TariffCalculateUseCase for MismatchedTariff {
        fn calc(&self, shipment: &Shipment) -> Result<Price, TariffError> {
            Ok(Price::create(Decimal::from(10), shipment.currency().clone())?)
        }

        fn minimal_price(&self) -> Result<Price, TariffError> {
            let usd = CurrencyFactory::new(["USD"]).create("USD")?;
            Ok(Price::create(Decimal::from(1), usd)?)
        }
    }

    struct FailingTariff;

    impl TariffCalculateUseCase for FailingTariff {
        fn calc(&self, _shipment: &Shipment) -> Result<Price, TariffError> {
            Err(TariffError::new("tariff \"zone\" unavailable"))
        }

        fn minimal_price(&self) -> Result<Price, TariffError> {
            Err(TariffError::new("unreachable"))
        }
    }

    #[fixture]
    fn dependencies() -> CalculateDependencies<crate::api::FixedTariff> {
        CalculateDependencies::from_config(&crate::config::AppConfig::default()).unwrap()
    }

    fn body(weight: &str, currency_code: &str, latitude: &str) -> String {
        format!(
            r#"{{
                "packages": [{{"weight": {weight}, "length": 100, "width": 200, "height": 300}}],
                "currencyCode": "{currency_code}",
                "departure": {{"latitude": {latitude}, "longitude": 37}},
                "destination": {{"latitude": 59, "longitude": 30}}
            }}"#
        )
    }

    fn parse(response: &ApiResponse) -> Value {
        serde_json::from_str(response.body()).unwrap()
    }

    #[rstest]
    fn test_calculate_api_success(dependencies: CalculateDependencies<crate::api::FixedTariff>) {
        let response = calculate_api(&ApiRequest::new(body("1000", "RUB", "55")), &dependencies);

        assert_eq!(response.status_code(), 200);
        let json = parse(&response);
        assert_eq!(json["totalPrice"], "100");
        assert_eq!(json["deliveryMinPrice"], "50");
        assert_eq!(json["currencyCode"], "RUB");
    }

    #[rstest]
    #[case(body("-1", "RUB", "55"), "packages[0].weight")]
    #[case(body("1.5", "RUB", "55"), "packages[0].weight")]
    #[case(body("1000", "USD", "55"), "currencyCode")]
    #[case(body("1000", "RUB", "91"), "departure.latitude")]
    fn test_calculate_api_validation_is_bad_request(
        dependencies: CalculateDependencies<crate::api::FixedTariff>,
        #[case] request_body: String,
        #[case] field_name: &str,
    ) {
        let response = calculate_api(&ApiRequest::new(request_body), &dependencies);

        assert_eq!(response.status_code(), 400);
        let json = parse(&response);
        assert_eq!(json["type"], "Validation");
        assert_eq!(json["fieldName"], field_name);
    }

    #[rstest]
    #[case("")]
    #[case("{")]
    #[case(r#"{"packages": "none"}"#)]
    fn test_calculate_api_malformed_json(
        dependencies: CalculateDependencies<crate::api::FixedTariff>,
        #[case] request_body: &str,
    ) {
        let response = calculate_api(&ApiRequest::new(request_body.to_string()), &dependencies);

        assert_eq!(response.status_code(), 400);
        assert_eq!(parse(&response)["type"], "JsonParseError");
    }

    #[rstest]
    fn test_calculate_api_tariff_failure_is_server_error() {
        let dependencies = CalculateDependencies::new(
            CurrencyFactory::default(),
            GeoPointFactory::default(),
            FailingTariff,
        );

        let response = calculate_api(&ApiRequest::new(body("1000", "RUB", "55")), &dependencies);

        assert_eq!(response.status_code(), 500);
        let json = parse(&response);
        assert_eq!(json["type"], "Tariff");
        assert_eq!(json["message"], "tariff \"zone\" unavailable");
    }

    #[rstest]
    fn test_calculate_api_currency_mismatch_is_server_error() {
        let dependencies = CalculateDependencies::new(
            CurrencyFactory::default(),
            GeoPointFactory::default(),
            MismatchedTariff,
        );

        let response = calculate_api(&ApiRequest::new(body("1000", "RUB", "55")), &dependencies);

        assert_eq!(response.status_code(), 500);
        let json = parse(&response);
        assert_eq!(json["type"], "Tariff");
        assert_eq!(
            json["message"],
            "currencyCode: Currency codes must be the same, got RUB and USD"
        );
    }
}
