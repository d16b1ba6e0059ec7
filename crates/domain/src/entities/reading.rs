//! Reading entity - one timestamped temperature observation

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// An instantaneous air temperature reading from the upstream time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// When the reading applies (UTC)
    pub timestamp: DateTime<Utc>,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
}

impl Reading {
    /// Create a new reading
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }

    /// UTC calendar date of the reading
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// UTC hour of the reading (0-23)
    #[must_use]
    pub fn hour(&self) -> u8 {
        // hour() is always < 24
        u8::try_from(self.timestamp.hour()).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_and_hour_use_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 20, 23, 30, 0).unwrap();
        let reading = Reading::new(ts, 21.5);
        assert_eq!(reading.date(), NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
        assert_eq!(reading.hour(), 23);
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap();
        let json = serde_json::to_string(&Reading::new(ts, 27.0)).unwrap();
        assert!(json.contains("2025-08-20T12:00:00Z"));
        assert!(json.contains("27.0"));
    }
}
