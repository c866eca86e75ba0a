//! Coordinate validation and region classification.
//!
//! Providers differ in regional coverage and quality: the US National
//! Weather Service only answers inside the continental USA, and MET Norway
//! serves 1 km radar-corrected data inside the Nordic countries but a coarse
//! global model elsewhere. This crate maps a validated coordinate to the
//! region tag that drives provider eligibility and ranking.
//!
//! # Quick start
//!
//! ```
//! use etofuse_geo::{GeoPoint, Region, classify};
//!
//! let denver = GeoPoint::new(39.7392, -104.9903).unwrap();
//! assert_eq!(classify(denver), Region::Usa);
//!
//! let brasilia = GeoPoint::new(-15.7939, -47.8828).unwrap();
//! assert_eq!(classify(brasilia), Region::Global);
//! ```

mod error;
mod point;
mod region;

pub use error::GeoError;
pub use point::GeoPoint;
pub use region::{classify, BoundingBox, Region, NORDIC_BBOX, USA_BBOX};
