//! Shared HTTP client for the two OpenStreetMap service integrations.

use std::time::Duration;

use reqwest::Client;
use vnpoi_core::AppConfig;

use crate::error::OsmError;
use crate::pacer::Pacer;

/// HTTP client for the Nominatim geocoding and Overpass POI endpoints.
///
/// Carries the configured timeout, the identifying `User-Agent` the public
/// OSM services require, and a courtesy [`Pacer`] that spaces outbound
/// requests. Non-2xx responses surface as typed errors; there is no
/// automatic retry — a failed request ends the caller's search cycle.
pub struct OsmClient {
    pub(crate) client: Client,
    pub(crate) nominatim_base_url: String,
    pub(crate) overpass_url: String,
    pub(crate) pacer: Pacer,
}

impl OsmClient {
    /// Creates an `OsmClient` from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            nominatim_base_url: config.nominatim_base_url.trim_end_matches('/').to_owned(),
            overpass_url: config.overpass_url.clone(),
            pacer: Pacer::new(config.inter_request_delay_ms),
        })
    }
}
