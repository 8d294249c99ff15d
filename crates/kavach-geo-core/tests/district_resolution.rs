use kavach_geo_core::geocoding::{resolve_district, BoxFuture, Feature, ReverseGeocoder};
use kavach_geo_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replays a canned answer and counts how often it was asked.
struct Canned {
    answer: fn() -> Result<Vec<Feature>>,
    calls: AtomicUsize,
}

impl Canned {
    fn new(answer: fn() -> Result<Vec<Feature>>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ReverseGeocoder for Canned {
    fn reverse_geocode(&self, _location: Coordinate) -> BoxFuture<'_, Result<Vec<Feature>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = (self.answer)();
        Box::pin(async move { answer })
    }
}

fn bengaluru() -> Coordinate {
    Coordinate::new(12.9716, 77.5946)
}

fn feature(types: &[&str], text: &str, place_name: &str) -> Feature {
    Feature {
        place_type: types.iter().map(|t| t.to_string()).collect(),
        text: text.to_string(),
        place_name: place_name.to_string(),
    }
}

#[tokio::test]
async fn empty_feature_list_gives_sentinel() {
    let geocoder = Canned::new(|| Ok(Vec::new()));
    let r = resolve_district(&geocoder, bengaluru()).await;
    assert_eq!(r, DistrictResolution::unknown());
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_error_gives_sentinel() {
    let geocoder = Canned::new(|| Err(GeoError::Status(401)));
    let r = resolve_district(&geocoder, bengaluru()).await;
    assert_eq!(r.district, "Unknown");
    assert_eq!(r.formatted_address, "Unknown location");
}

#[tokio::test]
async fn malformed_body_gives_sentinel() {
    let geocoder = Canned::new(|| {
        serde_json::from_str::<Vec<Feature>>("not json").map_err(GeoError::from)
    });
    let r = resolve_district(&geocoder, bengaluru()).await;
    assert!(r.is_unknown());
}

#[tokio::test]
async fn district_comes_from_first_matching_feature() {
    let geocoder = Canned::new(|| {
        Ok(vec![
            feature(&["poi"], "Vidhana Soudha", "Vidhana Soudha, Bengaluru, India"),
            feature(&["district"], "Bengaluru Urban", "Bengaluru Urban, Karnataka, India"),
            feature(&["place"], "Bengaluru", "Bengaluru, Karnataka, India"),
        ])
    });
    let r = resolve_district(&geocoder, bengaluru()).await;
    assert_eq!(r.district, "Bengaluru Urban");
    assert_eq!(r.formatted_address, "Vidhana Soudha, Bengaluru, India");
}

#[tokio::test]
async fn works_through_a_trait_object() {
    let geocoder: Box<dyn ReverseGeocoder> =
        Box::new(Canned::new(|| Ok(vec![feature(&["place"], "Mysuru", "Mysuru, India")])));
    let r = resolve_district(geocoder.as_ref(), Coordinate::new(12.2958, 76.6394)).await;
    assert_eq!(r.district, "Mysuru");
}

#[tokio::test]
async fn concurrent_resolutions_are_independent() {
    let ok = Canned::new(|| Ok(vec![feature(&["locality"], "Indiranagar", "Indiranagar")]));
    let failing = Canned::new(|| Err(GeoError::Status(503)));

    let (a, b) = tokio::join!(
        resolve_district(&ok, bengaluru()),
        resolve_district(&failing, bengaluru())
    );
    assert_eq!(a.district, "Indiranagar");
    assert!(b.is_unknown());
}

#[cfg(feature = "mapbox")]
#[tokio::test]
async fn unreachable_mapbox_endpoint_gives_sentinel() {
    // Port 9 (discard) on localhost refuses connections on typical hosts.
    let config = MapboxConfig::new("pk.test")
        .with_base_url("http://127.0.0.1:9")
        .with_timeout_secs(2);
    let geocoder = MapboxGeocoder::from_config(config).unwrap();
    let r = resolve_district(&geocoder, bengaluru()).await;
    assert!(r.is_unknown());
}
