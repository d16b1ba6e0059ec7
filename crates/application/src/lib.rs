//! Application layer - Use cases and orchestration
//!
//! Contains the forecast transform, the forecast use case, and the port
//! through which weather data is fetched. Adapters live in infrastructure.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
