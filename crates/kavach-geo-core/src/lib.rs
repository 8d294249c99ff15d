// crates/kavach-geo-core/src/lib.rs

//! kavach-geo-core
//! ===============
//!
//! Geospatial helpers behind Kavach's report assignment: Haversine distance,
//! radius bounding boxes, geohashes for range queries, reverse geocoding of a
//! coordinate to its district, and nearest-station selection.
//!
//! Everything except [`geocoding::resolve_district`] is synchronous and pure.
//!
//! ```rust
//! use kavach_geo_core::prelude::*;
//!
//! let center = Coordinate::new(12.9716, 77.5946);
//! let bbox = bounding_box(center, 5.0)?;
//! let ranges = geohash_range(&bbox, DEFAULT_GEOHASH_PRECISION)?;
//! assert_eq!(ranges.len(), 1);
//! assert!(ranges[0].lesser < ranges[0].greater);
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assign;
pub mod bbox;
pub mod config;
pub mod distance;
pub mod error;
pub mod geocoding;
pub mod geohash;
pub mod model;
pub mod prelude;
pub mod text;

// Re-exports
pub use crate::assign::{find_nearest_station, nearby, Located, Nearby, Station};
pub use crate::bbox::bounding_box;
pub use crate::config::MapboxConfig;
pub use crate::distance::{distance, distance_lenient, round_km};
pub use crate::error::{GeoError, Result};
pub use crate::geocoding::{resolve_district, ReverseGeocoder};
#[cfg(feature = "mapbox")]
pub use crate::geocoding::mapbox::MapboxGeocoder;
pub use crate::model::{
    BoundingBox, Coordinate, DistrictResolution, EARTH_RADIUS_KM, UNKNOWN_DISTRICT,
    UNKNOWN_LOCATION,
};
