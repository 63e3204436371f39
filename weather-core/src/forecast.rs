//! Forecast period selection and transformation into the client-facing shape.

use chrono::{DateTime, NaiveDate};

use crate::error::NoDaytimePeriod;
use crate::model::{DailyForecast, ForecastPeriod};

const WEEKDAY_NAMES: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// A selected period plus how it was chosen.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'a> {
    pub period: &'a ForecastPeriod,

    /// True when no daytime period matched `today` and the first daytime
    /// period was used instead. Recoverable; callers log it, nothing more.
    pub fallback: bool,
}

/// Pick the period representing today's daytime forecast.
///
/// Scans in feed order: first a daytime period whose calendar date (in the
/// period's own UTC offset) equals `today`, then any daytime period as a
/// fallback. First match wins in both passes. `today` is supplied by the
/// caller so that selection stays deterministic.
pub fn select_current_day_period<'a>(
    periods: &'a [ForecastPeriod],
    today: NaiveDate,
) -> Result<Selected<'a>, NoDaytimePeriod> {
    let exact = periods
        .iter()
        .find(|p| p.is_daytime && period_date(p) == Some(today));

    if let Some(period) = exact {
        return Ok(Selected { period, fallback: false });
    }

    periods
        .iter()
        .find(|p| p.is_daytime)
        .map(|period| Selected { period, fallback: true })
        .ok_or(NoDaytimePeriod)
}

/// Calendar date of a period, if its start time parses. An unparseable
/// start time only disqualifies the period from the exact-date pass.
fn period_date(period: &ForecastPeriod) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(&period.start_time)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Render the client-facing record for one forecast period.
pub fn transform(period: &ForecastPeriod) -> Result<DailyForecast, chrono::ParseError> {
    Ok(DailyForecast {
        day_name: day_name(&period.name, &period.start_time)?,
        temp_high_celsius: fahrenheit_to_celsius(period.temperature),
        forecast_blurp: period.short_forecast.clone(),
    })
}

/// Full English weekday for a period, preferring a weekday embedded in the
/// period name ("Monday Afternoon") over the start timestamp.
fn day_name(period_name: &str, start_time: &str) -> Result<String, chrono::ParseError> {
    let haystack = period_name.to_ascii_lowercase();

    for name in WEEKDAY_NAMES {
        if haystack.contains(&name.to_ascii_lowercase()) {
            return Ok(name.to_string());
        }
    }

    let start = DateTime::parse_from_rfc3339(start_time)?;
    Ok(start.format("%A").to_string())
}

/// Fahrenheit to Celsius, rounded to one decimal place on the tenths digit.
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> f64 {
    let celsius = f64::from(fahrenheit - 32) * 5.0 / 9.0;
    (celsius * 10.0).round() / 10.0
}
