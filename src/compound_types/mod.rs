//! Compound types
//!
//! Values assembled from already validated simple types.
//!
//! # Type list
//!
//! - [`PackVolume`] - the three sides of a package
//! - [`Pack`] - a package: weight and volume
//! - [`GeoPoint`] - a coordinate pair, created through [`GeoPointFactory`]
//! - [`Route`] - departure and destination

mod geo_point;
mod pack;
mod route;

pub use geo_point::{CoordinateBounds, CoordinateRange, GeoPoint, GeoPointFactory};
pub use pack::{Pack, PackVolume};
pub use route::Route;
