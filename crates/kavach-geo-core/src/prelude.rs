// crates/kavach-geo-core/src/prelude.rs
pub use crate::assign::{districts, find_nearest_station, nearby, nearest, Located, Nearby, Station};
pub use crate::bbox::bounding_box;
pub use crate::config::MapboxConfig;
pub use crate::distance::{deg_to_rad, distance, distance_lenient, rad_to_deg, round_km};
pub use crate::error::{GeoError, Result};
pub use crate::geocoding::{resolve_district, select_district, Feature, ReverseGeocoder};
#[cfg(feature = "mapbox")]
pub use crate::geocoding::mapbox::MapboxGeocoder;
pub use crate::geohash::{
    geohash, geohash_default, geohash_range, GeohashRange, DEFAULT_GEOHASH_PRECISION,
    MAX_GEOHASH_PRECISION,
};
pub use crate::model::{
    BoundingBox, Coordinate, DistrictResolution, EARTH_RADIUS_KM, UNKNOWN_DISTRICT, UNKNOWN_LOCATION,
};
