//! DTO (Data Transfer Object) module
//!
//! Serializable types used at the boundary, with pure conversions to and
//! from the domain.
//!
//! - [`input`] - request DTOs
//! - [`output`] - response DTOs
//! - [`error`] - error DTOs

pub mod error;
pub mod input;
pub mod output;

pub use error::CalculateErrorDto;
pub use input::{CalculatePackagesRequestDto, CargoPackageDto, CoordinatesDto};
pub use output::CalculatePackagesResponseDto;
