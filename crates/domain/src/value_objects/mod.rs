//! Value Objects - Immutable, identity-less domain primitives

mod forecast_query;
mod geo_location;

pub use forecast_query::{
    DEFAULT_ALTITUDE, DEFAULT_DAYS, DEFAULT_TIME_OF_DAY, ForecastQuery, MAX_TIME_OF_DAY,
};
pub use geo_location::{GeoLocation, InvalidCoordinates};
