// crates/kavach-geo-core/src/geocoding/mod.rs

//! # District resolution
//!
//! Maps a coordinate to an administrative district through a reverse
//! geocoding provider. The lookup is best-effort enrichment: every failure
//! (transport, status, decoding, an empty result) ends in
//! [`DistrictResolution::unknown`], never in an error for the caller.

#[cfg(feature = "mapbox")]
pub mod mapbox;

use crate::error::Result;
use crate::model::{Coordinate, DistrictResolution, UNKNOWN_DISTRICT};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Feature types asked for, and accepted as a district, in priority order.
pub const DISTRICT_TYPES: [&str; 3] = ["district", "locality", "place"];

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One place returned by a reverse geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub place_name: String,
}

impl Feature {
    /// Whether any of this feature's types is one of [`DISTRICT_TYPES`].
    pub fn is_district_like(&self) -> bool {
        self.place_type
            .iter()
            .any(|t| DISTRICT_TYPES.contains(&t.as_str()))
    }
}

/// A reverse geocoding provider.
///
/// Implementations return the raw feature list; selection and fallback live
/// in [`resolve_district`].
pub trait ReverseGeocoder: Send + Sync {
    fn reverse_geocode(&self, location: Coordinate) -> BoxFuture<'_, Result<Vec<Feature>>>;
}

/// Picks the district and address out of a feature list.
///
/// The district is the `text` of the first district-like feature, the
/// address is the first feature's `place_name`. Returns `None` for an empty
/// list.
pub fn select_district(features: &[Feature]) -> Option<DistrictResolution> {
    let first = features.first()?;
    let district = features
        .iter()
        .find(|f| f.is_district_like())
        .map_or_else(|| UNKNOWN_DISTRICT.to_string(), |f| f.text.clone());

    Some(DistrictResolution {
        district,
        formatted_address: first.place_name.clone(),
    })
}

/// Resolves `location` to a district, falling back to the "Unknown" pair.
///
/// Issues exactly one request through `geocoder`; no retries, no caching and
/// no timeout beyond what the geocoder itself applies.
///
/// # Example
/// ```rust
/// use kavach_geo_core::geocoding::{resolve_district, BoxFuture, Feature, ReverseGeocoder};
/// use kavach_geo_core::{Coordinate, Result};
///
/// struct Offline;
///
/// impl ReverseGeocoder for Offline {
///     fn reverse_geocode(&self, _: Coordinate) -> BoxFuture<'_, Result<Vec<Feature>>> {
///         Box::pin(async { Ok(Vec::new()) })
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let r = resolve_district(&Offline, Coordinate::new(12.97, 77.59)).await;
/// assert!(r.is_unknown());
/// assert_eq!(r.formatted_address, "Unknown location");
/// # });
/// ```
pub async fn resolve_district<G>(geocoder: &G, location: Coordinate) -> DistrictResolution
where
    G: ReverseGeocoder + ?Sized,
{
    match geocoder.reverse_geocode(location).await {
        Ok(features) => match select_district(&features) {
            Some(resolution) => {
                debug!(
                    %location,
                    district = %resolution.district,
                    features = features.len(),
                    "district resolved"
                );
                resolution
            }
            None => {
                warn!(%location, "reverse geocoder returned no features");
                DistrictResolution::unknown()
            }
        },
        Err(err) => {
            warn!(%location, error = %err, "error getting district from coordinates");
            DistrictResolution::unknown()
        }
    }
}
