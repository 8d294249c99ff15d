// crates/kavach-geo-core/src/distance.rs

//! # Great-circle distance
//!
//! Haversine distance on a sphere of radius [`EARTH_RADIUS_KM`], plus the
//! degree/radian helpers the bounding box shares.

use crate::model::{Coordinate, EARTH_RADIUS_KM};

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Great-circle distance between `a` and `b` in kilometers.
///
/// Symmetric, zero for identical points and never negative.
///
/// # Example
/// ```rust
/// use kavach_geo_core::{distance, Coordinate};
///
/// let km = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((km - 111.19).abs() < 0.5);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = deg_to_rad(b.latitude - a.latitude);
    let d_lng = deg_to_rad(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2)
        + deg_to_rad(a.latitude).cos()
            * deg_to_rad(b.latitude).cos()
            * (d_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair outside [0, 1]; sqrt(1 - h) would be NaN.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// [`distance`] over possibly-missing inputs.
///
/// Returns `0.0` when any value is `None` or non-finite. A `0.0` result is
/// therefore not proof that the points coincide.
pub fn distance_lenient(
    lat1: Option<f64>,
    lng1: Option<f64>,
    lat2: Option<f64>,
    lng2: Option<f64>,
) -> f64 {
    match (lat1, lng1, lat2, lng2) {
        (Some(lat1), Some(lng1), Some(lat2), Some(lng2))
            if [lat1, lng1, lat2, lng2].iter().all(|v| v.is_finite()) =>
        {
            distance(Coordinate::new(lat1, lng1), Coordinate::new(lat2, lng2))
        }
        _ => 0.0,
    }
}

/// Rounds a distance to two decimals.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
