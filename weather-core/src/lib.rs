//! Core library for the weather forecast service.
//!
//! This crate defines:
//! - Configuration handling
//! - Upstream and client-facing models
//! - Forecast period selection and transformation
//! - The orchestrating weather service and its error taxonomy
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod service;
pub mod source;

pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::{NoDaytimePeriod, WeatherError};
pub use model::{DailyForecast, ForecastFeed, ForecastPeriod, WeatherReport};
pub use service::WeatherService;
pub use source::{ForecastSource, NwsClient};
