//! Forecast query value object
//!
//! Everything needed to answer one forecast request. Constructed only through
//! [`ForecastQuery::new`], so a value of this type is always in range.

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// Number of days returned when the caller does not ask for a specific count
pub const DEFAULT_DAYS: u32 = 100;

/// Altitude in meters used when the caller does not provide one
pub const DEFAULT_ALTITUDE: u32 = 120;

/// Hour of day (UTC) used when the caller does not provide one
pub const DEFAULT_TIME_OF_DAY: u8 = 14;

/// Largest accepted hour of day
pub const MAX_TIME_OF_DAY: u8 = 23;

/// A validated forecast request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastQuery {
    days: u32,
    altitude: u32,
    location: GeoLocation,
    time_of_day: u8,
}

impl ForecastQuery {
    /// Create a query, validating every field
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when `days` or `altitude` is
    /// negative or `time_of_day` is outside 0..=23, and
    /// `DomainError::InvalidCoordinates` for out-of-range coordinates.
    pub fn new(
        days: i64,
        altitude: i64,
        latitude: f64,
        longitude: f64,
        time_of_day: i64,
    ) -> Result<Self, DomainError> {
        let days = u32::try_from(days)
            .map_err(|_| DomainError::invalid_field("days", "must be a non-negative integer"))?;
        let altitude = u32::try_from(altitude).map_err(|_| {
            DomainError::invalid_field("altitude", "must be a non-negative integer")
        })?;
        let location = GeoLocation::new(latitude, longitude)?;
        let time_of_day = u8::try_from(time_of_day)
            .ok()
            .filter(|hour| *hour <= MAX_TIME_OF_DAY)
            .ok_or_else(|| DomainError::invalid_field("time_of_day", "must be between 0 and 23"))?;

        Ok(Self {
            days,
            altitude,
            location,
            time_of_day,
        })
    }

    /// Maximum number of daily entries to return
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Altitude of the location in meters
    #[must_use]
    pub const fn altitude(&self) -> u32 {
        self.altitude
    }

    /// Location to forecast for
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Target hour of day (UTC)
    #[must_use]
    pub const fn time_of_day(&self) -> u8 {
        self.time_of_day
    }
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            altitude: DEFAULT_ALTITUDE,
            location: GeoLocation::belgrade(),
            time_of_day: DEFAULT_TIME_OF_DAY,
        }
    }
}
