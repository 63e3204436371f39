use serde::{Deserialize, Serialize};

/// Envelope of the upstream gridpoint forecast response
/// (`{"properties": {"periods": [...]}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastFeed {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One forecast period as published by the upstream feed. Temperatures are
/// Fahrenheit; `start_time`/`end_time` are ISO-8601 offset timestamps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub number: i32,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_daytime: bool,
    pub temperature: i32,
    pub temperature_unit: String,
    pub short_forecast: String,
}

/// Single day of the client-facing forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day_name: String,
    pub temp_high_celsius: f64,
    pub forecast_blurp: String,
}

/// Client-facing response body. Currently always holds exactly one entry;
/// the list shape leaves room for multi-day output later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub daily: Vec<DailyForecast>,
}
