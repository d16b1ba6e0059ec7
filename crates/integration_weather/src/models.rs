//! Weather data models
//!
//! Wire types for the Locationforecast "compact" GeoJSON response. Only the
//! fields the forecast needs are modelled; everything else is ignored.

use chrono::{DateTime, Utc};
use domain::Reading;
use serde::Deserialize;

/// Top-level Locationforecast response
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub properties: Properties,
}

/// Forecast properties
#[derive(Debug, Deserialize)]
pub(crate) struct Properties {
    #[serde(default)]
    pub meta: Option<Meta>,
    pub timeseries: Vec<TimeSeriesEntry>,
}

/// Response metadata
#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One step of the time series
#[derive(Debug, Deserialize)]
pub(crate) struct TimeSeriesEntry {
    /// ISO 8601 timestamp, e.g. `2025-08-20T12:00:00Z`
    pub time: String,
    pub data: EntryData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EntryData {
    pub instant: Instant,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Instant {
    pub details: InstantDetails,
}

/// Instantaneous values at the timestamp
#[derive(Debug, Deserialize)]
pub(crate) struct InstantDetails {
    /// Air temperature in degrees Celsius
    pub air_temperature: f64,
}

/// Rewrite a trailing `Z` as an explicit `+00:00` offset
///
/// Offset-qualified timestamps are returned unchanged.
#[must_use]
pub fn normalize_timestamp(raw: &str) -> String {
    raw.strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .map_or_else(|| raw.to_string(), |base| format!("{base}+00:00"))
}

impl TimeSeriesEntry {
    /// Convert to a domain reading, normalising the timestamp to UTC
    pub(crate) fn to_reading(&self) -> Result<Reading, chrono::ParseError> {
        let timestamp =
            DateTime::parse_from_rfc3339(&normalize_timestamp(&self.time))?.with_timezone(&Utc);
        Ok(Reading::new(
            timestamp,
            self.data.instant.details.air_temperature,
        ))
    }
}
