use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for kavach-geo
#[derive(Debug, Parser)]
#[command(
    name = "kavach-geo",
    version,
    about = "Distance, bounding box, geohash and district lookups for Kavach reports"
)]
pub struct CliArgs {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Great-circle distance in km between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
    },

    /// Bounding box around a point for a radius in km
    Bbox {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        radius_km: f64,
    },

    /// Geohash of a point
    Geohash {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Number of characters (1-12)
        #[arg(short, long, default_value_t = 9)]
        precision: usize,
    },

    /// Geohash range covering the bounding box of a radius search
    Range {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        radius_km: f64,
        /// Number of characters (1-12)
        #[arg(short, long, default_value_t = 9)]
        precision: usize,
    },

    /// Reverse geocode a point to its district (Mapbox)
    #[cfg(feature = "mapbox")]
    District {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Mapbox access token
        #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Nearest active station to a point, from a JSON array of stations
    Nearest {
        /// Path to the stations JSON file
        stations: PathBuf,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// District to prefer (falls back to every active station)
        #[arg(short, long, default_value = "Unknown")]
        district: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coordinates() {
        let args =
            CliArgs::try_parse_from(["kavach-geo", "distance", "-33.86", "151.2", "-37.81", "144.96"])
                .unwrap();
        match args.command {
            Commands::Distance { lat1, lat2, .. } => {
                assert_eq!(lat1, -33.86);
                assert_eq!(lat2, -37.81);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn geohash_precision_defaults_to_nine() {
        let args = CliArgs::try_parse_from(["kavach-geo", "--json", "geohash", "12.97", "77.59"])
            .unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Commands::Geohash { precision: 9, .. }));
    }

    #[test]
    fn nearest_takes_district_flag() {
        let args = CliArgs::try_parse_from([
            "kavach-geo",
            "nearest",
            "stations.json",
            "12.97",
            "77.59",
            "--district",
            "Bengaluru Urban",
        ])
        .unwrap();
        match args.command {
            Commands::Nearest { district, .. } => assert_eq!(district, "Bengaluru Urban"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
