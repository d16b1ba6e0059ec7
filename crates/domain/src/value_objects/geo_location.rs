//! Forecast coordinates
//!
//! A `GeoLocation` only exists with a latitude in `LATITUDE_RANGE` and a
//! longitude in `LONGITUDE_RANGE`. Deserialization goes through the same
//! check, so an out-of-range document is rejected instead of producing a
//! location the weather provider would refuse.

use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted latitudes in degrees, poles included
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Accepted longitudes in degrees, antimeridian included on both sides
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

/// Point for which the forecast is requested
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

/// Unchecked wire shape of [`GeoLocation`]
#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for GeoLocation {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoLocation {
    /// Belgrade, used when a request leaves the coordinates out
    pub const BELGRADE: Self = Self {
        latitude: 44.8176,
        longitude: 20.4569,
    };

    /// # Errors
    ///
    /// Returns [`InvalidCoordinates`] when either value falls outside its
    /// range. NaN is outside every range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinates)
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub const fn belgrade() -> Self {
        Self::BELGRADE
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::BELGRADE
    }
}

/// Four decimals, the precision the weather provider accepts
impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
