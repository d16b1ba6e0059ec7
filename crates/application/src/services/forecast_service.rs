//! Forecast use case
//!
//! Fetches the raw time series through the weather port and reshapes it
//! into the per-day forecast.

use std::sync::Arc;
use std::time::{Duration, Instant};

use domain::{DailyForecast, ForecastQuery};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::forecast_transformer::transform;
use crate::{error::ApplicationError, ports::WeatherPort};

/// Default timeout for the upstream availability check in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Result of probing the weather provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamHealth {
    /// Whether the provider answered successfully
    pub healthy: bool,
    /// Duration of the availability check in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Service answering forecast queries
pub struct ForecastService {
    weather: Arc<dyn WeatherPort>,
    health_timeout: Duration,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("health_timeout", &self.health_timeout)
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            health_timeout: Duration::from_secs(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
        }
    }

    /// Override the timeout used by [`Self::check_upstream`]
    #[must_use]
    pub const fn with_health_timeout(mut self, health_timeout: Duration) -> Self {
        self.health_timeout = health_timeout;
        self
    }

    /// Produce the per-day forecast for a query
    ///
    /// Either the full list is returned or an error; there are no partial results.
    #[instrument(skip(self), fields(location = %query.location(), altitude = query.altitude()))]
    pub async fn forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<Vec<DailyForecast>, ApplicationError> {
        let readings = self
            .weather
            .fetch_readings(&query.location(), query.altitude())
            .await?;

        let days = usize::try_from(query.days()).unwrap_or(usize::MAX);
        let forecast = transform(&readings, query.time_of_day(), days);

        debug!(
            readings = readings.len(),
            days = forecast.len(),
            time_of_day = query.time_of_day(),
            "Forecast computed"
        );

        Ok(forecast)
    }

    /// Ask the weather provider whether it is reachable, bounded by the health timeout
    #[instrument(skip(self))]
    pub async fn check_upstream(&self) -> UpstreamHealth {
        let start = Instant::now();

        match timeout(self.health_timeout, self.weather.is_available()).await {
            Ok(healthy) => {
                let response_time = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if healthy {
                    debug!(response_time_ms = response_time, "Weather provider healthy");
                    UpstreamHealth {
                        healthy: true,
                        response_time_ms: Some(response_time),
                        error: None,
                    }
                } else {
                    warn!(response_time_ms = response_time, "Weather provider unhealthy");
                    UpstreamHealth {
                        healthy: false,
                        response_time_ms: Some(response_time),
                        error: Some("Weather provider reports unhealthy".to_string()),
                    }
                }
            },
            Err(_) => {
                warn!("Weather provider health check timed out");
                UpstreamHealth {
                    healthy: false,
                    response_time_ms: None,
                    error: Some("Health check timed out".to_string()),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domain::Reading;

    use super::*;
    use crate::ports::MockWeatherPort;

    fn readings() -> Vec<Reading> {
        vec![
            Reading::new(Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap(), 27.0),
            Reading::new(Utc.with_ymd_and_hms(2025, 8, 20, 15, 0, 0).unwrap(), 28.0),
            Reading::new(Utc.with_ymd_and_hms(2025, 8, 21, 14, 0, 0).unwrap(), 26.5),
        ]
    }

    #[tokio::test]
    async fn forecast_passes_location_and_altitude() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_readings()
            .withf(|location, altitude| {
                (location.latitude() - 10.0).abs() < f64::EPSILON && *altitude == 300
            })
            .times(1)
            .returning(|_, _| Ok(readings()));

        let service = ForecastService::new(Arc::new(mock));
        let query = ForecastQuery::new(5, 300, 10.0, 20.0, 14).unwrap();

        let forecast = service.forecast(&query).await.unwrap();
        assert_eq!(forecast.len(), 2);
        assert!((forecast[0].temperature - 28.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn forecast_respects_days() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_readings()
            .returning(|_, _| Ok(readings()));

        let service = ForecastService::new(Arc::new(mock));
        let query = ForecastQuery::new(1, 120, 44.8, 20.4, 14).unwrap();

        let forecast = service.forecast(&query).await.unwrap();
        assert_eq!(forecast.len(), 1);
    }

    #[tokio::test]
    async fn forecast_propagates_upstream_errors() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_readings()
            .returning(|_, _| Err(ApplicationError::UpstreamFormat("missing field".into())));

        let service = ForecastService::new(Arc::new(mock));
        let result = service.forecast(&ForecastQuery::default()).await;

        assert!(matches!(result, Err(ApplicationError::UpstreamFormat(_))));
    }

    #[tokio::test]
    async fn check_upstream_healthy() {
        let mut mock = MockWeatherPort::new();
        mock.expect_is_available().returning(|| true);

        let service = ForecastService::new(Arc::new(mock));
        let health = service.check_upstream().await;

        assert!(health.healthy);
        assert!(health.error.is_none());
        assert!(health.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn check_upstream_unhealthy() {
        let mut mock = MockWeatherPort::new();
        mock.expect_is_available().returning(|| false);

        let service = ForecastService::new(Arc::new(mock));
        let health = service.check_upstream().await;

        assert!(!health.healthy);
        assert!(health.error.is_some());
    }

    #[test]
    fn debug_impl() {
        let service = ForecastService::new(Arc::new(MockWeatherPort::new()));
        assert!(format!("{service:?}").contains("ForecastService"));
    }
}
