// crates/kavach-geo-core/src/model.rs
use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius used by every formula in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// District name used when reverse geocoding yields nothing usable.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// Address used together with [`UNKNOWN_DISTRICT`] when the lookup fails.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// A point on the globe in decimal degrees.
///
/// Serialized as `{ "lat": .., "lng": .. }`, the shape reports and stations
/// store their location in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let c = Self::new(latitude, longitude);
        c.validate()?;
        Ok(c)
    }

    /// Checks `latitude` in [-90, 90] and `longitude` in [-180, 180].
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!(
                "non-finite value in {self}"
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// An axis-aligned latitude/longitude rectangle approximating a search radius.
///
/// `min_lat <= max_lat` and `min_lng <= max_lng` always hold. Longitudes are
/// left unwrapped, so a box crossing the antimeridian has `min_lng < -180` or
/// `max_lng > 180`; use [`BoundingBox::longitude_ranges`] for the normalized
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Longitude extent split into ranges that lie inside [-180, 180].
    ///
    /// Returns one range for an ordinary box and two when the box crosses the
    /// antimeridian. A box spanning 360° or more collapses to the full range.
    pub fn longitude_ranges(&self) -> Vec<(f64, f64)> {
        if self.lng_span() >= 360.0 {
            return vec![(-180.0, 180.0)];
        }
        let min = wrap_longitude(self.min_lng);
        let max = wrap_longitude(self.max_lng);
        if min <= max {
            vec![(min, max)]
        } else {
            vec![(min, 180.0), (-180.0, max)]
        }
    }

    /// Whether `point` lies inside the box, honouring antimeridian wrap.
    pub fn contains(&self, point: &Coordinate) -> bool {
        if point.latitude < self.min_lat || point.latitude > self.max_lat {
            return false;
        }
        let lng = wrap_longitude(point.longitude);
        self.longitude_ranges()
            .iter()
            .any(|&(lo, hi)| lng >= lo && lng <= hi)
    }
}

/// Maps any longitude into [-180, 180].
pub fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        return lng;
    }
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 to -180; keep the eastern edge where it was asked for.
    if wrapped == -180.0 && lng > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// Outcome of reverse geocoding a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResolution {
    pub district: String,
    pub formatted_address: String,
}

impl DistrictResolution {
    /// The `{ "Unknown", "Unknown location" }` fallback.
    pub fn unknown() -> Self {
        Self {
            district: UNKNOWN_DISTRICT.to_string(),
            formatted_address: UNKNOWN_LOCATION.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.district == UNKNOWN_DISTRICT
    }
}

impl Default for DistrictResolution {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(12.97, 77.59).is_ok());
        assert!(Coordinate::try_new(90.5, 0.0).is_err());
        assert!(Coordinate::try_new(0.0, -181.0).is_err());
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn coordinate_uses_lat_lng_keys() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 1.5, "lng": -2.0}"#).unwrap();
        assert_eq!(c, Coordinate::new(1.5, -2.0));
        let back = serde_json::to_value(c).unwrap();
        assert_eq!(back["lat"], 1.5);
        assert_eq!(back["lng"], -2.0);
    }

    #[test]
    fn wrap_longitude_keeps_edges() {
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert!((wrap_longitude(190.0) - -170.0).abs() < 1e-9);
        assert!((wrap_longitude(-190.0) - 170.0).abs() < 1e-9);
        assert_eq!(wrap_longitude(540.0), 180.0);
    }

    #[test]
    fn antimeridian_box_splits_into_two_ranges() {
        let bbox = BoundingBox {
            min_lat: -1.0,
            min_lng: 179.0,
            max_lat: 1.0,
            max_lng: 181.0,
        };
        let ranges = bbox.longitude_ranges();
        assert_eq!(ranges.len(), 2);
        assert!(bbox.contains(&Coordinate::new(0.0, -179.5)));
        assert!(bbox.contains(&Coordinate::new(0.0, 179.5)));
        assert!(!bbox.contains(&Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn unknown_resolution_is_the_sentinel_pair() {
        let r = DistrictResolution::unknown();
        assert_eq!(r.district, "Unknown");
        assert_eq!(r.formatted_address, "Unknown location");
        assert!(r.is_unknown());
        assert_eq!(
            serde_json::to_value(&r).unwrap()["formattedAddress"],
            "Unknown location"
        );
    }
}
