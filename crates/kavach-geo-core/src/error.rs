// crates/kavach-geo-core/src/error.rs
use thiserror::Error;

/// Errors produced by the geospatial utilities.
///
/// District resolution never surfaces these to its caller; they only travel
/// between a [`ReverseGeocoder`](crate::geocoding::ReverseGeocoder) and
/// [`resolve_district`](crate::geocoding::resolve_district), which absorbs
/// them into the "Unknown" sentinel.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid radius {0} km: must be a finite, non-negative number")]
    InvalidRadius(f64),

    #[error("invalid geohash precision {0}: expected 1..=12")]
    InvalidPrecision(usize),

    #[error("geohash encoding failed: {0}")]
    Geohash(String),

    #[cfg(feature = "mapbox")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid geocoder URL: {0}")]
    InvalidUrl(String),

    #[error("geocoder returned status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;
