//! MET Norway weather client
//!
//! HTTP client for the Locationforecast 2.0 API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{DEFAULT_ALTITUDE, GeoLocation, Reading};
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ApiResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be set up
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Locationforecast API base URL (default: <https://api.met.no/weatherapi/locationforecast/2.0>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` sent with every request; MET Norway rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!(
        "dailycast/{} (+https://github.com/dailycast/dailycast)",
        env!("CARGO_PKG_VERSION")
    )
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the air temperature time series for a location, in provider order
    async fn get_timeseries(
        &self,
        latitude: f64,
        longitude: f64,
        altitude: u32,
    ) -> Result<Vec<Reading>, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// MET Norway HTTP client implementation
#[derive(Debug)]
pub struct MetNoClient {
    client: Client,
    config: WeatherConfig,
}

impl MetNoClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Endpoint URL for the compact product
    fn compact_url(&self) -> String {
        format!("{}/compact", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters; the API asks for at most four decimals
    fn query_params(latitude: f64, longitude: f64, altitude: u32) -> [(&'static str, String); 3] {
        [
            ("lat", format!("{latitude:.4}")),
            ("lon", format!("{longitude:.4}")),
            ("altitude", altitude.to_string()),
        ]
    }

    /// Decode a response body into readings
    fn decode(body: &[u8]) -> Result<Vec<Reading>, WeatherError> {
        let api_response: ApiResponse =
            serde_json::from_slice(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        if let Some(updated_at) = api_response
            .properties
            .meta
            .as_ref()
            .and_then(|m| m.updated_at.as_deref())
        {
            debug!(updated_at, "Forecast model run");
        }

        api_response
            .properties
            .timeseries
            .iter()
            .map(|entry| {
                entry.to_reading().map_err(|e| {
                    WeatherError::ParseError(format!("Invalid timestamp {:?}: {e}", entry.time))
                })
            })
            .collect()
    }
}

#[async_trait]
impl WeatherClient for MetNoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, altitude = altitude))]
    async fn get_timeseries(
        &self,
        latitude: f64,
        longitude: f64,
        altitude: u32,
    ) -> Result<Vec<Reading>, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.compact_url();
        debug!(url = %url, "Fetching temperature time series");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&Self::query_params(latitude, longitude, altitude))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let readings = Self::decode(&body)?;
        if readings.is_empty() {
            warn!("Weather provider returned an empty time series");
        }
        debug!(readings = readings.len(), "Decoded time series");

        Ok(readings)
    }

    async fn is_healthy(&self) -> bool {
        // Same request as a forecast with every parameter left at its default
        let location = GeoLocation::belgrade();
        self.get_timeseries(location.latitude(), location.longitude(), DEFAULT_ALTITUDE)
            .await
            .is_ok()
    }
}
