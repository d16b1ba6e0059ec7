//! Forecast handler

use axum::{Json, extract::State};
use domain::{
    DailyForecast, ForecastQuery,
    value_objects::{DEFAULT_ALTITUDE, DEFAULT_DAYS, DEFAULT_TIME_OF_DAY, GeoLocation},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedQuery, state::AppState};

/// Forecast query parameters
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastParams {
    /// Maximum number of days to return (default: 100)
    #[serde(default = "default_days")]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[param(minimum = 0, default = 100)]
    pub days: i64,

    /// Altitude of the location in meters (default: 120)
    #[serde(default = "default_altitude")]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[param(minimum = 0, default = 120)]
    pub altitude: i64,

    /// Latitude in degrees (default: 44.8176)
    #[serde(default = "default_latitude")]
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    #[param(minimum = -90.0, maximum = 90.0, default = 44.8176)]
    pub latitude: f64,

    /// Longitude in degrees (default: 20.4569)
    #[serde(default = "default_longitude")]
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    #[param(minimum = -180.0, maximum = 180.0, default = 20.4569)]
    pub longitude: f64,

    /// Target hour of day, UTC (default: 14)
    #[serde(default = "default_time_of_day")]
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    #[param(minimum = 0, maximum = 23, default = 14)]
    pub time_of_day: i64,
}

fn default_days() -> i64 {
    i64::from(DEFAULT_DAYS)
}

fn default_altitude() -> i64 {
    i64::from(DEFAULT_ALTITUDE)
}

fn default_latitude() -> f64 {
    GeoLocation::default().latitude()
}

fn default_longitude() -> f64 {
    GeoLocation::default().longitude()
}

fn default_time_of_day() -> i64 {
    i64::from(DEFAULT_TIME_OF_DAY)
}

impl ForecastParams {
    /// Convert into the domain query
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unprocessable` for values the domain rejects, such
    /// as a NaN coordinate or a day count beyond `u32::MAX`.
    pub fn into_query(self) -> Result<ForecastQuery, ApiError> {
        Ok(ForecastQuery::new(
            self.days,
            self.altitude,
            self.latitude,
            self.longitude,
            self.time_of_day,
        )?)
    }
}

/// One forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"date": "2025-08-20", "time": "15:00", "temperature": 28.0}))]
pub struct DailyForecastResponse {
    /// Calendar date (UTC), `YYYY-MM-DD`
    pub date: String,
    /// Time of the selected reading (UTC), `HH:MM`
    pub time: String,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
}

impl From<&DailyForecast> for DailyForecastResponse {
    fn from(forecast: &DailyForecast) -> Self {
        Self {
            date: forecast.date.format("%Y-%m-%d").to_string(),
            time: forecast.time.format("%H:%M").to_string(),
            temperature: forecast.temperature,
        }
    }
}

/// Daily temperature forecast
///
/// Returns one entry per calendar date, using the reading whose hour is
/// closest to `time_of_day`.
#[utoipa::path(
    get,
    path = "/forecast",
    tag = "forecast",
    params(ForecastParams),
    responses(
        (status = 200, description = "Daily forecast, ascending by date", body = Vec<DailyForecastResponse>),
        (status = 422, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 502, description = "Weather provider failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ForecastParams>,
) -> Result<Json<Vec<DailyForecastResponse>>, ApiError> {
    let query = params.into_query()?;

    let forecast = state.forecast_service.forecast(&query).await?;

    debug!(entries = forecast.len(), "Forecast ready");
    Ok(Json(forecast.iter().map(DailyForecastResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn defaults_fill_missing_params() {
        let params: ForecastParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.days, 100);
        assert_eq!(params.altitude, 120);
        assert!((params.latitude - 44.8176).abs() < f64::EPSILON);
        assert!((params.longitude - 20.4569).abs() < f64::EPSILON);
        assert_eq!(params.time_of_day, 14);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn negative_days_fail_validation() {
        let params: ForecastParams = serde_json::from_str(r#"{"days": -1}"#).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_days_is_valid() {
        let params: ForecastParams = serde_json::from_str(r#"{"days": 0}"#).unwrap();
        assert!(params.validate().is_ok());
        assert_eq!(params.into_query().unwrap().days(), 0);
    }

    #[test]
    fn boundary_coordinates_are_valid() {
        let params: ForecastParams =
            serde_json::from_str(r#"{"latitude": -90.0, "longitude": 180.0, "time_of_day": 23}"#)
                .unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn into_query_rejects_huge_days() {
        let params: ForecastParams =
            serde_json::from_str(r#"{"days": 99999999999}"#).unwrap();
        assert!(matches!(
            params.into_query(),
            Err(ApiError::Unprocessable(_))
        ));
    }

    #[test]
    fn response_formats_date_and_time() {
        let forecast = DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            temperature: 28.0,
        };

        let json = serde_json::to_value(DailyForecastResponse::from(&forecast)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2025-08-20", "time": "15:00", "temperature": 28.0})
        );
    }
}
