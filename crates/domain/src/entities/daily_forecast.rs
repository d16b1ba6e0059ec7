//! Daily forecast entity - the reading chosen to represent one calendar date

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::Reading;

/// One forecast entry per calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date (UTC)
    pub date: NaiveDate,
    /// Time of the selected reading, truncated to the minute
    pub time: NaiveTime,
    /// Temperature of the selected reading in degrees Celsius
    pub temperature: f64,
}

impl DailyForecast {
    /// Build an entry for `date` from the selected reading
    #[must_use]
    pub fn from_reading(date: NaiveDate, reading: &Reading) -> Self {
        let ts = reading.timestamp;
        let time = NaiveTime::from_hms_opt(ts.hour(), ts.minute(), 0).unwrap_or(NaiveTime::MIN);
        Self {
            date,
            time,
            temperature: reading.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn from_reading_truncates_to_minutes() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 21, 14, 5, 42).unwrap();
        let reading = Reading::new(ts, 26.5);
        let date = reading.date();

        let forecast = DailyForecast::from_reading(date, &reading);

        assert_eq!(forecast.date, date);
        assert_eq!(forecast.time, NaiveTime::from_hms_opt(14, 5, 0).unwrap());
        assert!((forecast.temperature - 26.5).abs() < f64::EPSILON);
    }
}
