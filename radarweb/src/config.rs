//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! constructors that assemble the typed config structs from the process
//! environment.

use radarweb_common::config::{ServerConfig, UiConfig};

/// Get an environment variable, falling back to a default value
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default when the variable is unset. A set-but-unparseable
/// value logs a warning and falls back to the default.
pub fn env_parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    name,
                    val
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Build the server configuration from the environment
///
/// `RADARWEB_DATABASE_URL` defaults to `sqlite:~/.radarweb/radarweb.db`
/// (expanded to the real home directory).
pub fn server_config_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();

    let database_url = std::env::var("RADARWEB_DATABASE_URL").unwrap_or_else(|_| {
        match std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            Ok(home) => format!("sqlite:{}/.radarweb/radarweb.db", home),
            Err(_) => defaults.database_url.clone(),
        }
    });

    ServerConfig {
        host: env_or("RADARWEB_HOST", &defaults.host),
        port: env_parse_or("RADARWEB_PORT", defaults.port),
        database_url,
        probe_timeout_secs: env_parse_or("RADARWEB_PROBE_TIMEOUT_SECS", defaults.probe_timeout_secs),
    }
}

/// Build the UI module configuration from the environment
///
/// The API base URL defaults to the server's own loopback address so a
/// single-process deployment works out of the box, but can point anywhere
/// via `RADARWEB_API_BASE_URL`.
pub fn ui_config_from_env(server: &ServerConfig) -> UiConfig {
    let defaults = UiConfig::default();

    UiConfig {
        api_base_url: env_or(
            "RADARWEB_API_BASE_URL",
            &format!("http://127.0.0.1:{}", server.port),
        ),
        favicon_service: env_or("RADARWEB_FAVICON_SERVICE", &defaults.favicon_service),
    }
}
