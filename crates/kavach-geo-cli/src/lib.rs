//! kavach-geo-cli
//! ==============
//!
//! Command-line interface for the `kavach-geo-core` geospatial utilities.
//!
//! This crate primarily provides a binary (`kavach-geo`). The library target
//! only carries this overview so that the documentation renders.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! kavach-geo distance 12.9716 77.5946 28.6139 77.2090
//! kavach-geo bbox 12.9716 77.5946 5
//! kavach-geo geohash 12.9716 77.5946 --precision 7
//! kavach-geo --json range 12.9716 77.5946 10
//! MAPBOX_ACCESS_TOKEN=pk.… kavach-geo district 12.9716 77.5946
//! kavach-geo nearest stations.json 12.9716 77.5946 --district "Bengaluru Urban"
//! ```
//!
//! For programmatic access use the [`kavach-geo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
