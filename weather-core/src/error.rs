use thiserror::Error;

/// Failure taxonomy surfaced by [`crate::WeatherService`].
///
/// Upstream failures keep enough detail for the HTTP boundary to mirror the
/// upstream status; everything that goes wrong after a successful fetch
/// collapses into [`WeatherError::ForecastProcessingFailed`].
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The upstream API answered with a non-success status.
    #[error("weather API request failed with status: {status}")]
    UpstreamRequestFailed { status: u16 },

    /// The upstream API could not be reached (connect failure, timeout,
    /// interrupted transfer).
    #[error("weather API request failed: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    /// Any failure downstream of a successful fetch.
    #[error("{reason}")]
    ForecastProcessingFailed { reason: String },
}

impl WeatherError {
    pub fn processing(reason: impl Into<String>) -> Self {
        Self::ForecastProcessingFailed { reason: reason.into() }
    }

    /// HTTP status the service boundary should answer with.
    pub fn client_status(&self) -> u16 {
        match self {
            Self::UpstreamRequestFailed { status } => *status,
            Self::UpstreamUnreachable(_) => 502,
            Self::ForecastProcessingFailed { .. } => 500,
        }
    }
}

/// Selector failure: the feed contained no daytime period at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no daytime period found in the forecast")]
pub struct NoDaytimePeriod;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_mirrored() {
        let err = WeatherError::UpstreamRequestFailed { status: 404 };
        assert_eq!(err.client_status(), 404);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn processing_failures_map_to_500() {
        let err = WeatherError::processing("could not find current day forecast data");
        assert_eq!(err.client_status(), 500);
        assert_eq!(err.to_string(), "could not find current day forecast data");
    }
}
