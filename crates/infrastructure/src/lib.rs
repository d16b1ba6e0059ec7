//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides
//! configuration loading and logging setup for the server binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, Environment, ServerConfig};
pub use integration_weather::WeatherConfig;
pub use telemetry::{LogFormat, TelemetryError, init_logging};
