//! fast-delivery
//!
//! Reads a calculation request as JSON from stdin and prints the JSON
//! response to stdout. Exits with a non-zero status when the request was not
//! answered with 200.
//!
//! ```bash
//! echo '{"packages":[{"weight":1000,"length":345,"width":589,"height":234}],
//!        "currencyCode":"RUB",
//!        "departure":{"latitude":55.75,"longitude":37.61},
//!        "destination":{"latitude":59.93,"longitude":30.33}}' \
//!   | cargo run --bin fast-delivery
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fast_delivery::api::{ApiRequest, CalculateDependencies, calculate_api};
use fast_delivery::config::AppConfig;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the response
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fast_delivery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                currencies = ?config.available_currencies,
                "Configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let dependencies = match CalculateDependencies::from_config(&config) {
        Ok(dependencies) => dependencies,
        Err(e) => {
            tracing::error!("Invalid tariff configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut body = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut body) {
        tracing::error!("Failed to read request from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let response = calculate_api(&ApiRequest::new(body), &dependencies);
    println!("{}", response.body());

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
