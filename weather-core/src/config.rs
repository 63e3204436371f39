use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::Path, time::Duration};

/// Upstream forecast feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the forecast API.
    pub base_url: String,

    /// Path of the gridpoint forecast resource, e.g. "/gridpoints/MLB/33,70/forecast".
    pub forecast_path: String,

    /// Connection establishment timeout, seconds.
    pub connect_timeout_secs: u64,

    /// Full response timeout, seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weather.gov".to_string(),
            forecast_path: "/gridpoints/MLB/33,70/forecast".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

impl UpstreamConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: SocketAddr,

    /// Endpoint path segment (single segment, no slashes).
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            path: "weather".to_string(),
        }
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// ```toml
/// [upstream]
/// base_url = "https://api.weather.gov"
/// forecast_path = "/gridpoints/MLB/33,70/forecast"
///
/// [server]
/// bind = "0.0.0.0:8080"
/// path = "weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load config from a TOML file, or return built-in defaults when no
    /// path is given. A path that does not exist is an error: the caller
    /// asked for that file specifically.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_weather_gov() {
        let cfg = Config::default();

        assert_eq!(cfg.upstream.base_url, "https://api.weather.gov");
        assert_eq!(cfg.upstream.connect_timeout_secs, 5);
        assert_eq!(cfg.upstream.request_timeout_secs, 10);
        assert_eq!(cfg.server.path, "weather");
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let cfg = Config::load(None).expect("defaults must load");
        assert_eq!(cfg.upstream.forecast_path, "/gridpoints/MLB/33,70/forecast");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let cfg: Config = toml::from_str(
            r#"
            [upstream]
            base_url = "http://localhost:9999"

            [server]
            bind = "0.0.0.0:8080"
            "#,
        )
        .expect("partial config must parse");

        assert_eq!(cfg.upstream.base_url, "http://localhost:9999");
        assert_eq!(cfg.upstream.request_timeout_secs, 10);
        assert_eq!(cfg.server.bind, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(cfg.server.path, "weather");
    }

    #[test]
    fn timeouts_convert_to_durations() {
        let cfg = UpstreamConfig { connect_timeout_secs: 3, ..UpstreamConfig::default() };

        assert_eq!(cfg.connect_timeout(), Duration::from_secs(3));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
    }
}
