//! Logging infrastructure
//!
//! Sets up the global `tracing` subscriber in text or JSON format.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_logging};
