// crates/kavach-geo-core/src/assign.rs

//! # Station assignment
//!
//! In-memory selection over already-fetched stations and reports: the nearest
//! active police station for a new report, and the reports within a radius of
//! a point ordered by distance.

use crate::distance::distance;
use crate::model::Coordinate;
use crate::text::{equals_folded, fold_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that may carry a position.
pub trait Located {
    fn location(&self) -> Option<Coordinate>;
}

impl Located for Coordinate {
    fn location(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Option<Coordinate> {
        (**self).location()
    }
}

/// A police station as stored in the station directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Located for Station {
    fn location(&self) -> Option<Coordinate> {
        self.location
    }
}

/// Nearest active station to `location`, preferring those in `district`.
///
/// If no active station lists `district` (compared with [`fold_key`]), every
/// active station is considered. Stations without a location are skipped.
/// On equal distances the earlier station wins.
pub fn find_nearest_station<'a>(
    stations: &'a [Station],
    location: Coordinate,
    district: &str,
) -> Option<&'a Station> {
    let in_district = stations
        .iter()
        .filter(|s| s.is_active && equals_folded(&s.district, district));

    nearest(in_district, location)
        .or_else(|| nearest(stations.iter().filter(|s| s.is_active), location))
}

/// Item of `items` closest to `target`, ignoring items without a location.
pub fn nearest<I>(items: I, target: Coordinate) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Located,
{
    let mut best: Option<(f64, I::Item)> = None;
    for item in items {
        let Some(at) = item.location() else {
            continue;
        };
        let d = distance(target, at);
        if best.as_ref().map_or(true, |(min, _)| d < *min) {
            best = Some((d, item));
        }
    }
    best.map(|(_, item)| item)
}

/// An item paired with its distance from a query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearby<T> {
    pub item: T,
    pub distance_km: f64,
}

/// Items within `radius_km` of `center`, closest first, at most `limit` of them.
///
/// Items without a location are dropped. Equal distances keep input order.
/// The limit applies after sorting, so the closest items are the ones kept.
pub fn nearby<I>(
    items: I,
    center: Coordinate,
    radius_km: f64,
    limit: Option<usize>,
) -> Vec<Nearby<I::Item>>
where
    I: IntoIterator,
    I::Item: Located,
{
    let mut out: Vec<Nearby<I::Item>> = items
        .into_iter()
        .filter_map(|item| {
            let d = distance(center, item.location()?);
            (d <= radius_km).then_some(Nearby {
                item,
                distance_km: d,
            })
        })
        .collect();
    out.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

/// Distinct non-empty districts, sorted.
///
/// Names that only differ in case or accents collapse to the first spelling.
pub fn districts(stations: &[Station]) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for s in stations {
        let name = s.district.trim();
        if name.is_empty() {
            continue;
        }
        seen.entry(fold_key(name)).or_insert_with(|| name.to_string());
    }
    let mut out: Vec<String> = seen.into_values().collect();
    out.sort();
    out
}
