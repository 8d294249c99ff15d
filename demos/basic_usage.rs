//! Basic usage example for kavach-geo-rs
//!
//! Walks through what happens when a report comes in: hash it, find the
//! stations near it, pick the one it gets assigned to, and (when a Mapbox
//! token is available in `MAPBOX_ACCESS_TOKEN`) resolve its district.

use kavach_geo_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Kavach geo: basic usage ===\n");

    let report = Coordinate::try_new(12.9716, 77.5946)?;
    println!("Report at {report}");

    // 1. Geohash stored alongside the report
    let hash = geohash_default(report)?;
    println!("  geohash (p={DEFAULT_GEOHASH_PRECISION}): {hash}");

    // 2. Search window for "reports within 5 km"
    let bbox = bounding_box(report, 5.0)?;
    let ranges = geohash_range(&bbox, DEFAULT_GEOHASH_PRECISION)?;
    println!(
        "  5 km box: lat {:.4}..{:.4}, lng {:.4}..{:.4}",
        bbox.min_lat, bbox.max_lat, bbox.min_lng, bbox.max_lng
    );
    for r in &ranges {
        println!("  geohash range: {} .. {}", r.lesser, r.greater);
    }
    println!();

    // 3. District (best effort)
    let district = match std::env::var("MAPBOX_ACCESS_TOKEN") {
        Ok(token) => {
            let geocoder = MapboxGeocoder::new(token);
            resolve_district(&geocoder, report).await
        }
        Err(_) => {
            println!("  (MAPBOX_ACCESS_TOKEN not set, skipping reverse geocoding)");
            DistrictResolution::unknown()
        }
    };
    println!(
        "  district: {} / {}\n",
        district.district, district.formatted_address
    );

    // 4. Station assignment
    let stations = vec![
        station("cubbon-park", "Cubbon Park", "Bengaluru Urban", 12.9763, 77.5929),
        station("jayanagar", "Jayanagar", "Bengaluru Urban", 12.9250, 77.5938),
        station("mysuru-city", "Mysuru City", "Mysuru", 12.2958, 76.6394),
    ];

    println!("Stations within 10 km:");
    for hit in nearby(&stations, report, 10.0, Some(50)) {
        println!("  {:<12} {:>6.2} km", hit.item.name, round_km(hit.distance_km));
    }

    match find_nearest_station(&stations, report, &district.district) {
        Some(s) => println!("\nAssigned to: {} ({})", s.name, s.district),
        None => println!("\nNo active station available"),
    }

    Ok(())
}

fn station(id: &str, name: &str, district: &str, lat: f64, lng: f64) -> Station {
    Station {
        id: id.to_string(),
        name: name.to_string(),
        district: district.to_string(),
        address: None,
        location: Some(Coordinate::new(lat, lng)),
        is_active: true,
    }
}
