//! Application services - Use case implementations

pub mod forecast_transformer;
mod forecast_service;

pub use forecast_service::{ForecastService, UpstreamHealth};
pub use forecast_transformer::transform;
