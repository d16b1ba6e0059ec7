//! Reshape a raw temperature time series into one entry per calendar date
//!
//! Readings are grouped by UTC date; from each group the reading whose hour
//! is closest to the requested hour is kept. Ties go to the reading listed
//! first by the provider. The result is ordered by date and cut to the
//! requested number of days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{DailyForecast, Reading};

/// Build the per-day forecast for `time_of_day`, keeping at most `days` entries
#[must_use]
pub fn transform(readings: &[Reading], time_of_day: u8, days: usize) -> Vec<DailyForecast> {
    group_by_date(readings)
        .into_iter()
        .filter_map(|(date, group)| {
            closest_to_hour(&group, time_of_day)
                .map(|reading| DailyForecast::from_reading(date, reading))
        })
        .take(days)
        .collect()
}

/// Group readings by UTC calendar date
///
/// The map iterates in ascending date order; each group keeps the input order.
pub fn group_by_date(readings: &[Reading]) -> BTreeMap<NaiveDate, Vec<&Reading>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Reading>> = BTreeMap::new();
    for reading in readings {
        groups.entry(reading.date()).or_default().push(reading);
    }
    groups
}

/// Pick the reading whose hour is closest to `time_of_day`
///
/// `min_by_key` returns the first of several equal minima, which gives the
/// first-listed reading on ties. An empty group yields `None`.
pub fn closest_to_hour<'a>(group: &[&'a Reading], time_of_day: u8) -> Option<&'a Reading> {
    group
        .iter()
        .copied()
        .min_by_key(|reading| hour_distance(reading.hour(), time_of_day))
}

const fn hour_distance(hour: u8, time_of_day: u8) -> u8 {
    hour.abs_diff(time_of_day)
}
