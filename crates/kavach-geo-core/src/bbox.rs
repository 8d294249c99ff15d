// crates/kavach-geo-core/src/bbox.rs
use crate::distance::{deg_to_rad, rad_to_deg};
use crate::error::{GeoError, Result};
use crate::model::{BoundingBox, Coordinate, EARTH_RADIUS_KM};
use std::f64::consts::FRAC_PI_2;

/// Bounding box of radius `radius_km` around `center`.
///
/// The longitude half-width is `asin(sin(d) / cos(lat))` with `d` the angular
/// radius, so boxes get wider in degrees towards the poles. When the circle
/// touches or covers a pole the longitude extent becomes the whole
/// [-180, 180] and the latitudes are clamped to [-90, 90]. Longitudes are
/// not wrapped at the antimeridian (see [`BoundingBox::longitude_ranges`]).
///
/// # Errors
/// [`GeoError::InvalidCoordinate`] for a center outside the valid ranges and
/// [`GeoError::InvalidRadius`] for a negative or non-finite radius.
///
/// # Example
/// ```rust
/// use kavach_geo_core::{bounding_box, Coordinate};
///
/// let center = Coordinate::new(12.9716, 77.5946);
/// let bbox = bounding_box(center, 5.0).unwrap();
/// assert!(bbox.contains(&center));
/// assert!(bbox.lng_span() > bbox.lat_span());
/// ```
pub fn bounding_box(center: Coordinate, radius_km: f64) -> Result<BoundingBox> {
    center.validate()?;
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeoError::InvalidRadius(radius_km));
    }

    let rad_dist = radius_km / EARTH_RADIUS_KM;
    let rad_lat = deg_to_rad(center.latitude);
    let rad_lng = deg_to_rad(center.longitude);

    let min_lat = rad_lat - rad_dist;
    let max_lat = rad_lat + rad_dist;

    if min_lat <= -FRAC_PI_2 || max_lat >= FRAC_PI_2 {
        return Ok(polar_box(min_lat, max_lat));
    }

    // cos(rad_lat) > 0 here since |rad_lat| < pi/2 - rad_dist.
    let ratio = rad_dist.sin() / rad_lat.cos();
    if ratio >= 1.0 {
        return Ok(polar_box(min_lat, max_lat));
    }
    let delta_lng = ratio.asin();

    Ok(BoundingBox {
        min_lat: rad_to_deg(min_lat),
        min_lng: rad_to_deg(rad_lng - delta_lng),
        max_lat: rad_to_deg(max_lat),
        max_lng: rad_to_deg(rad_lng + delta_lng),
    })
}

fn polar_box(min_lat: f64, max_lat: f64) -> BoundingBox {
    BoundingBox {
        min_lat: rad_to_deg(min_lat).max(-90.0),
        min_lng: -180.0,
        max_lat: rad_to_deg(max_lat).min(90.0),
        max_lng: 180.0,
    }
}
