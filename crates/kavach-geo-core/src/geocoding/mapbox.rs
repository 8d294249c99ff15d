// crates/kavach-geo-core/src/geocoding/mapbox.rs
#![cfg(feature = "mapbox")]

use super::{BoxFuture, Feature, ReverseGeocoder, DISTRICT_TYPES};
use crate::config::MapboxConfig;
use crate::error::{GeoError, Result};
use crate::model::Coordinate;
use once_cell::sync::Lazy;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

// Shared so that geocoders built without a timeout reuse one connection pool.
static SHARED_CLIENT: Lazy<Client> = Lazy::new(Client::new);

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

/// Reverse geocoder backed by the Mapbox Places API (v5).
#[derive(Debug, Clone)]
pub struct MapboxGeocoder {
    client: Client,
    config: MapboxConfig,
}

impl MapboxGeocoder {
    /// Geocoder for the public endpoint using the shared client.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_client(SHARED_CLIENT.clone(), MapboxConfig::new(access_token))
    }

    /// Builds a dedicated client when `config.timeout_secs` is set.
    pub fn from_config(config: MapboxConfig) -> Result<Self> {
        let client = match config.timeout_secs {
            Some(secs) => Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()?,
            None => SHARED_CLIENT.clone(),
        };
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: MapboxConfig) -> Self {
        Self { client, config }
    }

    /// `{base}/geocoding/v5/mapbox.places/{lng},{lat}.json?access_token=…&types=…`
    pub fn request_url(&self, location: Coordinate) -> Result<Url> {
        let raw = format!(
            "{}/geocoding/v5/mapbox.places/{},{}.json",
            self.config.base_url.trim_end_matches('/'),
            location.longitude,
            location.latitude
        );
        let mut url = Url::parse(&raw).map_err(|e| GeoError::InvalidUrl(format!("{raw}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token)
            .append_pair("types", &DISTRICT_TYPES.join(","));
        Ok(url)
    }

    async fn fetch(&self, location: Coordinate) -> Result<Vec<Feature>> {
        let url = self.request_url(location)?;
        debug!(endpoint = url.path(), %location, "reverse geocoding");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_features(&body)
    }
}

impl ReverseGeocoder for MapboxGeocoder {
    fn reverse_geocode(&self, location: Coordinate) -> BoxFuture<'_, Result<Vec<Feature>>> {
        Box::pin(self.fetch(location))
    }
}

/// Decodes a Places API body. A body without `features` yields an empty list.
pub fn parse_features(body: &str) -> Result<Vec<Feature>> {
    let parsed: PlacesResponse = serde_json::from_str(body)?;
    Ok(parsed.features)
}
