//! Entities - Forecast data flowing through a single request

mod daily_forecast;
mod reading;

pub use daily_forecast::DailyForecast;
pub use reading::Reading;
