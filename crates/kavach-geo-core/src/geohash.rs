// crates/kavach-geo-core/src/geohash.rs

//! # Geohash
//!
//! Thin wrapper around the `geohash` crate's base-32 encoder. Reports are
//! stored with a precision-9 hash (roughly 5 m cells) so that a bounding box
//! query can be expressed as a lexicographic range over the hash column.

use crate::error::{GeoError, Result};
use crate::model::{BoundingBox, Coordinate};
use geo_types::Coord;
use serde::Serialize;

pub const DEFAULT_GEOHASH_PRECISION: usize = 9;
pub const MAX_GEOHASH_PRECISION: usize = 12;

/// Encodes `(lat, lng)` into a geohash of exactly `precision` characters.
///
/// # Errors
/// [`GeoError::InvalidPrecision`] outside `1..=12` and
/// [`GeoError::InvalidCoordinate`] for out-of-range coordinates.
///
/// # Example
/// ```rust
/// use kavach_geo_core::geohash::geohash;
///
/// assert_eq!(geohash(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
/// ```
pub fn geohash(lat: f64, lng: f64, precision: usize) -> Result<String> {
    if !(1..=MAX_GEOHASH_PRECISION).contains(&precision) {
        return Err(GeoError::InvalidPrecision(precision));
    }
    Coordinate::new(lat, lng).validate()?;

    ::geohash::encode(Coord { x: lng, y: lat }, precision)
        .map_err(|e| GeoError::Geohash(e.to_string()))
}

/// [`geohash`] at [`DEFAULT_GEOHASH_PRECISION`].
pub fn geohash_default(location: Coordinate) -> Result<String> {
    geohash(
        location.latitude,
        location.longitude,
        DEFAULT_GEOHASH_PRECISION,
    )
}

/// Inclusive lexicographic range over stored geohashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeohashRange {
    pub lesser: String,
    pub greater: String,
}

impl GeohashRange {
    /// Whether a stored hash of the same precision falls inside the range.
    pub fn contains(&self, hash: &str) -> bool {
        self.lesser.as_str() <= hash && hash <= self.greater.as_str()
    }
}

/// Geohash ranges covering `bbox`, one per longitude range.
///
/// A box crossing the antimeridian yields two ranges, any other box one (a
/// box spanning every longitude yields a single full-width range). Each range
/// runs from the hash of its south-west corner to the hash of its north-east
/// corner. Corners on the north pole or on +180 are pulled just inside the
/// edge, since the encoder wraps those values into the first cell. Stored
/// hashes inside any range form the candidate set; the ranges are a
/// prefilter only and callers still check the real distance.
pub fn geohash_range(bbox: &BoundingBox, precision: usize) -> Result<Vec<GeohashRange>> {
    let min_lat = bbox.min_lat.clamp(-90.0, inside_edge(90.0));
    let max_lat = bbox.max_lat.clamp(-90.0, inside_edge(90.0));

    bbox.longitude_ranges()
        .into_iter()
        .map(|(lo, hi)| {
            let lo = lo.clamp(-180.0, inside_edge(180.0));
            let hi = hi.clamp(-180.0, inside_edge(180.0));
            Ok(GeohashRange {
                lesser: geohash(min_lat, lo, precision)?,
                greater: geohash(max_lat, hi, precision)?,
            })
        })
        .collect()
}

// Far below a precision-12 cell (~1.7e-7 deg) but large enough that the
// encoder's float scaling cannot round it back onto the edge.
const EDGE_MARGIN_DEG: f64 = 1e-9;

/// A value just inside a positive `edge`, still in the edge's last cell.
fn inside_edge(edge: f64) -> f64 {
    edge - EDGE_MARGIN_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::bounding_box;

    #[test]
    fn known_hash() {
        assert_eq!(geohash(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn deterministic_at_default_precision() {
        let c = Coordinate::new(12.9716, 77.5946);
        let a = geohash_default(c).unwrap();
        let b = geohash_default(c).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_GEOHASH_PRECISION);
    }

    #[test]
    fn higher_precision_extends_prefix() {
        let mut previous = String::new();
        for p in 1..=MAX_GEOHASH_PRECISION {
            let h = geohash(12.9716, 77.5946, p).unwrap();
            assert!(h.len() >= previous.len());
            assert!(h.starts_with(&previous));
            previous = h;
        }
    }

    #[test]
    fn rejects_bad_precision() {
        assert!(matches!(geohash(0.0, 0.0, 0), Err(GeoError::InvalidPrecision(0))));
        assert!(matches!(
            geohash(0.0, 0.0, 13),
            Err(GeoError::InvalidPrecision(13))
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        assert!(matches!(
            geohash(91.0, 0.0, 9),
            Err(GeoError::InvalidCoordinate(_))
        ));
    }

    fn covered(ranges: &[GeohashRange], point: Coordinate, precision: usize) -> bool {
        let h = geohash(point.latitude, point.longitude, precision).unwrap();
        ranges.iter().any(|r| r.contains(&h))
    }

    #[test]
    fn range_brackets_center_hash() {
        let center = Coordinate::new(12.9716, 77.5946);
        let bbox = bounding_box(center, 5.0).unwrap();
        let ranges = geohash_range(&bbox, 9).unwrap();
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].lesser <= ranges[0].greater);
        assert!(covered(&ranges, center, 9));
    }

    #[test]
    fn edge_values_stay_in_the_last_cell() {
        assert!(geohash(inside_edge(90.0), inside_edge(180.0), 9).unwrap().starts_with("zzz"));
        assert!(geohash(0.0, inside_edge(180.0), 9).unwrap() > geohash(0.0, 179.9, 9).unwrap());
    }

    #[test]
    fn antimeridian_box_yields_one_range_per_side() {
        let center = Coordinate::new(0.0, 179.99);
        let bbox = bounding_box(center, 10.0).unwrap();
        let ranges = geohash_range(&bbox, 9).unwrap();
        assert_eq!(ranges.len(), 2);
        for r in &ranges {
            assert!(r.lesser <= r.greater, "{r:?}");
        }
        assert!(covered(&ranges, center, 9));

        // ~3.3 km east of the center, on the far side of the line.
        let across = Coordinate::new(0.0, -179.98);
        assert!(bbox.contains(&across));
        assert!(covered(&ranges, across, 9));
    }

    #[test]
    fn polar_box_range_is_ordered_and_covers_center() {
        let center = Coordinate::new(89.999, 0.0);
        let bbox = bounding_box(center, 50.0).unwrap();
        let ranges = geohash_range(&bbox, 9).unwrap();
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].lesser <= ranges[0].greater);
        assert!(covered(&ranges, center, 9));
        assert!(covered(&ranges, Coordinate::new(89.8, -170.0), 9));
    }
}
