//! API module
//!
//! Entry points that take a raw JSON body and return a status code plus a
//! JSON body. Transports (the command-line binary, a future HTTP server)
//! only move bytes in and out.
//!
//! # Module Structure
//!
//! - [`types`] - request/response types
//! - [`dependencies`] - injected factories and the stand-in tariff
//! - [`calculate_api`] - delivery price endpoint

pub mod calculate_api;
pub mod dependencies;
pub mod types;

// Re-exports
pub use calculate_api::calculate_api;
pub use dependencies::{CalculateDependencies, FixedTariff};
pub use types::{ApiRequest, ApiResponse};
