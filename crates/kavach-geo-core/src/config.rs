// crates/kavach-geo-core/src/config.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAPBOX_BASE_URL: &str = "https://api.mapbox.com";

/// Settings for the Mapbox reverse geocoder.
///
/// The library never reads the environment; the caller supplies the token.
/// Deserializes from e.g.
/// `{ "accessToken": "pk.…", "timeoutSecs": 10 }`, other fields defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapboxConfig {
    pub access_token: String,
    pub base_url: String,
    /// Per-request timeout. `None` leaves the request unbounded.
    pub timeout_secs: Option<u64>,
}

impl MapboxConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: DEFAULT_MAPBOX_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: MapboxConfig = serde_json::from_str(r#"{"accessToken": "pk.test"}"#).unwrap();
        assert_eq!(cfg.access_token, "pk.test");
        assert_eq!(cfg.base_url, DEFAULT_MAPBOX_BASE_URL);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = MapboxConfig::new("pk.test")
            .with_base_url("http://localhost:8080")
            .with_timeout_secs(5);
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, Some(5));
    }
}
