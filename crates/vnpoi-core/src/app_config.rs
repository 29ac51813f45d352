/// Runtime configuration, loaded from environment variables.
///
/// Every field has a default, so a bare environment is a valid one.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the geocoding service (Nominatim), without a trailing
    /// `/search`.
    pub nominatim_base_url: String,
    /// Full URL of the Overpass interpreter endpoint.
    pub overpass_url: String,
    /// Identifying `User-Agent` sent on every outbound request, as the
    /// public OSM services require.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Minimum spacing between outbound requests, as a courtesy to the
    /// shared free services. `0` disables pacing.
    pub inter_request_delay_ms: u64,
    pub log_level: String,
}
