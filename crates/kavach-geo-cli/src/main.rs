//! kavach-geo: command-line interface for kavach-geo-core
//!
//! Usage examples
//! --------------
//!
//! - Distance between two points (km)
//!   $ kavach-geo distance 12.9716 77.5946 28.6139 77.2090
//!
//! - Bounding box for a 5 km search around Bengaluru
//!   $ kavach-geo bbox 12.9716 77.5946 5
//!
//! - Geohash ranges to query stored report hashes with (two when the
//!   search crosses the antimeridian)
//!   $ kavach-geo --json range 12.9716 77.5946 10
//!
//! - District of a point (needs MAPBOX_ACCESS_TOKEN or --token)
//!   $ kavach-geo district 12.9716 77.5946
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use kavach_geo_core::prelude::*;
use serde_json::json;
use std::fs;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();
    let as_json = args.json;

    match args.command {
        Commands::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => {
            let a = Coordinate::try_new(lat1, lng1)?;
            let b = Coordinate::try_new(lat2, lng2)?;
            let km = distance(a, b);
            if as_json {
                println!("{}", json!({ "from": a, "to": b, "distanceKm": km }));
            } else {
                println!("{:.2} km", km);
            }
        }

        Commands::Bbox {
            lat,
            lng,
            radius_km,
        } => {
            let bbox = bounding_box(Coordinate::try_new(lat, lng)?, radius_km)?;
            let ranges = bbox.longitude_ranges();
            if as_json {
                println!(
                    "{}",
                    json!({ "bbox": bbox, "longitudeRanges": ranges })
                );
            } else {
                println!("Latitude:  {:.6} .. {:.6}", bbox.min_lat, bbox.max_lat);
                println!("Longitude: {:.6} .. {:.6}", bbox.min_lng, bbox.max_lng);
                if ranges.len() > 1 {
                    println!("Crosses the antimeridian:");
                    for (lo, hi) in ranges {
                        println!("  {lo:.6} .. {hi:.6}");
                    }
                }
            }
        }

        Commands::Geohash {
            lat,
            lng,
            precision,
        } => {
            let hash = geohash(lat, lng, precision)?;
            if as_json {
                println!("{}", json!({ "geohash": hash, "precision": precision }));
            } else {
                println!("{hash}");
            }
        }

        Commands::Range {
            lat,
            lng,
            radius_km,
            precision,
        } => {
            let bbox = bounding_box(Coordinate::try_new(lat, lng)?, radius_km)?;
            let ranges = geohash_range(&bbox, precision)?;
            if as_json {
                println!("{}", json!({ "bbox": bbox, "ranges": ranges }));
            } else {
                for r in &ranges {
                    println!("{} .. {}", r.lesser, r.greater);
                }
            }
        }

        #[cfg(feature = "mapbox")]
        Commands::District {
            lat,
            lng,
            token,
            base_url,
            timeout_secs,
        } => {
            let mut config = MapboxConfig::new(token);
            if let Some(url) = base_url {
                config = config.with_base_url(url);
            }
            if let Some(secs) = timeout_secs {
                config = config.with_timeout_secs(secs);
            }
            let geocoder = MapboxGeocoder::from_config(config)?;
            let resolution = resolve_district(&geocoder, Coordinate::try_new(lat, lng)?).await;
            if as_json {
                println!("{}", serde_json::to_string(&resolution)?);
            } else {
                println!("District: {}", resolution.district);
                println!("Address:  {}", resolution.formatted_address);
            }
        }

        Commands::Nearest {
            stations,
            lat,
            lng,
            district,
        } => {
            let raw = fs::read_to_string(&stations)
                .with_context(|| format!("reading stations from {}", stations.display()))?;
            let list: Vec<Station> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing stations in {}", stations.display()))?;
            let here = Coordinate::try_new(lat, lng)?;

            match find_nearest_station(&list, here, &district) {
                Some(station) => {
                    let km = station.location.map(|at| round_km(distance(here, at)));
                    if as_json {
                        println!("{}", json!({ "station": station, "distanceKm": km }));
                    } else {
                        println!("{} ({}) - {}", station.name, station.id, station.district);
                        if let Some(km) = km {
                            println!("Distance: {km} km");
                        }
                    }
                }
                None => {
                    anyhow::bail!("no active station with a location in {}", stations.display());
                }
            }
        }
    }

    Ok(())
}
