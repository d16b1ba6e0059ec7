//! MET Norway weather integration
//!
//! Client for the Locationforecast 2.0 API (<https://api.met.no/weatherapi/locationforecast/2.0>).
//! Fetches the instantaneous air temperature time series for a coordinate and
//! decodes it into domain readings. No API key is required, but every request
//! must carry an identifying `User-Agent`.

pub mod client;
mod models;

pub use client::{MetNoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::normalize_timestamp;
