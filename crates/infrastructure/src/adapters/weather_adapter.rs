//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{GeoLocation, Reading};
use integration_weather::{MetNoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the MET Norway Locationforecast API
pub struct WeatherAdapter {
    client: MetNoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"MetNoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client =
            MetNoClient::with_defaults().map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            MetNoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    ///
    /// Only an undecodable payload is a format error. Everything else,
    /// throttling included, means the provider is unavailable.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ParseError(e) => ApplicationError::UpstreamFormat(e),
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded
            | WeatherError::InvalidCoordinates => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_readings(
        &self,
        location: &GeoLocation,
        altitude: u32,
    ) -> Result<Vec<Reading>, ApplicationError> {
        let result = self
            .client
            .get_timeseries(location.latitude(), location.longitude(), altitude)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(readings) => {
                debug!(readings = readings.len(), "Retrieved temperature time series");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get temperature time series");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
