//! Orchestration of a single weather lookup: fetch, select, transform.

use chrono::Utc;
use tracing::{error, info, warn};

use crate::error::WeatherError;
use crate::forecast::{select_current_day_period, transform};
use crate::model::WeatherReport;
use crate::source::ForecastSource;

/// Stateless per-request pipeline over a [`ForecastSource`].
pub struct WeatherService {
    source: Box<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(source: Box<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Today's daytime forecast as the client-facing report.
    ///
    /// Upstream errors pass through untouched; every failure after a
    /// successful fetch collapses to
    /// [`WeatherError::ForecastProcessingFailed`] and is never re-wrapped.
    pub async fn get_current_weather(&self) -> Result<WeatherReport, WeatherError> {
        let feed = self.source.fetch_forecast().await?;

        let today = Utc::now().date_naive();
        let selected =
            select_current_day_period(&feed.properties.periods, today).map_err(|e| {
                error!("{e}");
                WeatherError::processing("could not find current day forecast data")
            })?;

        if selected.fallback {
            warn!(
                "no daytime period matched today's date, falling back to: {}",
                selected.period.name
            );
        }
        info!("transforming weather data for period: {}", selected.period.name);

        let daily = transform(selected.period).map_err(|e| {
            error!("error processing weather forecast: {e}");
            WeatherError::processing(format!("error processing weather data: {e}"))
        })?;

        Ok(WeatherReport { daily: vec![daily] })
    }
}
