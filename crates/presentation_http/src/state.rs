//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forecast use case
    pub forecast_service: Arc<ForecastService>,
}
