//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{ForecastQuery, GeoLocation};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// ForecastQuery Property Tests
// ============================================================================

mod forecast_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn in_range_values_are_accepted(
            days in 0i64..10_000,
            altitude in 0i64..9_000,
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            hour in 0i64..=23
        ) {
            let query = ForecastQuery::new(days, altitude, lat, lon, hour);
            prop_assert!(query.is_ok());

            let query = query.unwrap();
            prop_assert_eq!(i64::from(query.days()), days);
            prop_assert_eq!(i64::from(query.altitude()), altitude);
            prop_assert_eq!(i64::from(query.time_of_day()), hour);
        }

        #[test]
        fn hours_outside_day_are_rejected(
            hour in prop_oneof![(-100i64..0), (24i64..500)]
        ) {
            prop_assert!(ForecastQuery::new(1, 120, 44.8, 20.4, hour).is_err());
        }

        #[test]
        fn negative_altitude_is_rejected(altitude in -10_000i64..0) {
            prop_assert!(ForecastQuery::new(1, altitude, 44.8, 20.4, 14).is_err());
        }
    }
}
