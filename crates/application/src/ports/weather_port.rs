//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{GeoLocation, Reading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the raw temperature time series for a location
    ///
    /// Readings are returned in the order the provider lists them.
    ///
    /// # Errors
    ///
    /// `ApplicationError::ExternalService` when the provider cannot be reached
    /// or returns a failure status, `ApplicationError::UpstreamFormat` when
    /// the payload cannot be decoded.
    async fn fetch_readings(
        &self,
        location: &GeoLocation,
        altitude: u32,
    ) -> Result<Vec<Reading>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
