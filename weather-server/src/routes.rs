//! Warp route wiring for the weather endpoint.

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use weather_core::WeatherService;

/// `GET /<path>` returning today's forecast as JSON.
///
/// The handler renders both the success and the error body itself, so the
/// filter never rejects with anything the caller has to recover.
pub fn weather(
    path: String,
    service: Arc<WeatherService>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path(path))
        .and(warp::path::end())
        .and(warp::any().map(move || service.clone()))
        .and_then(handle_weather)
}

async fn handle_weather(service: Arc<WeatherService>) -> Result<impl Reply, Infallible> {
    match service.get_current_weather().await {
        Ok(report) => Ok(warp::reply::with_status(
            warp::reply::json(&report),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("failed to produce weather report: {err}");
            let status = StatusCode::from_u16(err.client_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
                status,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use weather_core::{ForecastFeed, ForecastSource, WeatherError};

    struct CannedFeed(ForecastFeed);

    #[async_trait]
    impl ForecastSource for CannedFeed {
        async fn fetch_forecast(&self) -> Result<ForecastFeed, WeatherError> {
            Ok(self.0.clone())
        }
    }

    struct FailingUpstream(u16);

    #[async_trait]
    impl ForecastSource for FailingUpstream {
        async fn fetch_forecast(&self) -> Result<ForecastFeed, WeatherError> {
            Err(WeatherError::UpstreamRequestFailed { status: self.0 })
        }
    }

    fn feed(periods: serde_json::Value) -> ForecastFeed {
        serde_json::from_value(serde_json::json!({ "properties": { "periods": periods } }))
            .expect("test feed must deserialize")
    }

    fn route_with(
        source: impl ForecastSource + 'static,
    ) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let service = Arc::new(WeatherService::new(Box::new(source)));
        weather("weather".to_string(), service)
    }

    #[tokio::test]
    async fn get_weather_returns_the_daily_forecast() {
        let source = CannedFeed(feed(serde_json::json!([{
            "number": 1,
            "name": "Monday Afternoon",
            "startTime": "2025-03-31T12:00:00-04:00",
            "endTime": "2025-03-31T18:00:00-04:00",
            "isDaytime": true,
            "temperature": 68,
            "temperatureUnit": "F",
            "shortForecast": "Sunny"
        }])));

        let res = warp::test::request()
            .method("GET")
            .path("/weather")
            .reply(&route_with(source))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(res.body()).expect("body must be JSON");
        assert_eq!(
            body,
            serde_json::json!({
                "daily": [{
                    "day_name": "Monday",
                    "temp_high_celsius": 20.0,
                    "forecast_blurp": "Sunny"
                }]
            })
        );
    }

    #[tokio::test]
    async fn upstream_status_is_mirrored_to_the_client() {
        let res = warp::test::request()
            .method("GET")
            .path("/weather")
            .reply(&route_with(FailingUpstream(404)))
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_slice(res.body()).expect("body must be JSON");
        assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn processing_failures_answer_with_500() {
        let source = CannedFeed(feed(serde_json::json!([{
            "number": 1,
            "name": "Tonight",
            "startTime": "2025-03-31T18:00:00-04:00",
            "endTime": "2025-04-01T06:00:00-04:00",
            "isDaytime": false,
            "temperature": 67,
            "temperatureUnit": "F",
            "shortForecast": "Partly Cloudy"
        }])));

        let res = warp::test::request()
            .method("GET")
            .path("/weather")
            .reply(&route_with(source))
            .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_slice(res.body()).expect("body must be JSON");
        assert_eq!(body["error"], "could not find current day forecast data");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_served() {
        let source = CannedFeed(feed(serde_json::json!([])));

        let res = warp::test::request()
            .method("GET")
            .path("/forecast")
            .reply(&route_with(source))
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
