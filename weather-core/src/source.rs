//! Upstream forecast feed access.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::UpstreamConfig;
use crate::error::WeatherError;
use crate::model::ForecastFeed;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a forecast feed. The service is written
/// against this seam so tests can substitute a canned source.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_forecast(&self) -> Result<ForecastFeed, WeatherError>;
}

/// Client for the api.weather.gov gridpoint forecast resource.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
    forecast_path: String,
}

impl NwsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        // weather.gov rejects requests without a User-Agent.
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            forecast_path: config.forecast_path.clone(),
        })
    }
}

#[async_trait]
impl ForecastSource for NwsClient {
    async fn fetch_forecast(&self) -> Result<ForecastFeed, WeatherError> {
        let url = format!("{}{}", self.base_url, self.forecast_path);
        info!("fetching weather forecast from {url}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            error!("weather API request failed with status: {status}");
            return Err(WeatherError::UpstreamRequestFailed { status: status.as_u16() });
        }

        let body = res.text().await?;
        let feed: ForecastFeed = serde_json::from_str(&body).map_err(|e| {
            error!("failed to parse forecast feed: {e}");
            WeatherError::processing(format!("error processing weather data: {e}"))
        })?;

        debug!(
            "received weather API response with {} periods",
            feed.properties.periods.len()
        );
        Ok(feed)
    }
}
