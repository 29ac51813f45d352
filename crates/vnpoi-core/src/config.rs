use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let nominatim_base_url = or_default(
        "VNPOI_NOMINATIM_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let overpass_url = or_default(
        "VNPOI_OVERPASS_URL",
        "https://overpass.kumi.systems/api/interpreter",
    );
    let user_agent = or_default("VNPOI_USER_AGENT", "vnpoi/0.1 (vietnam-poi-search)");
    let request_timeout_secs = parse_u64("VNPOI_REQUEST_TIMEOUT_SECS", "60")?;
    let inter_request_delay_ms = parse_u64("VNPOI_INTER_REQUEST_DELAY_MS", "1000")?;
    let log_level = or_default("VNPOI_LOG_LEVEL", "info");

    Ok(AppConfig {
        nominatim_base_url,
        overpass_url,
        user_agent,
        request_timeout_secs,
        inter_request_delay_ms,
        log_level,
    })
}
