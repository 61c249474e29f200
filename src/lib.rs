//! # Fast Delivery
//!
//! Delivery price calculation for parcel shipments.
//!
//! A request lists packages (weight in grams, dimensions in millimetres), a
//! currency code and two coordinates. It is validated into a [`Shipment`],
//! priced by a [`TariffCalculateUseCase`], and answered with the price and
//! the minimal delivery price.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitives (`Weight`, `LinearDimension`, `Currency`, `Price`)
//! - `compound_types`: Composite values (`PackVolume`, `Pack`, `GeoPoint`, `Route`)
//! - `workflow`: Request-to-shipment mapping and the `calculate` workflow
//! - `dto`: JSON request/response/error shapes
//! - `api`: JSON-in/JSON-out entry point and its dependencies
//! - `config`: Environment-driven configuration
//!
//! [`Shipment`]: workflow::Shipment
//! [`TariffCalculateUseCase`]: workflow::TariffCalculateUseCase

#![forbid(unsafe_code)]

pub mod api;
pub mod compound_types;
pub mod config;
pub mod dto;
pub mod simple_types;
pub mod workflow;
