//! OpenAPI documentation
//!
//! The document is served as JSON at `/openapi.json`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for DailyCast
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "DailyCast API",
        version = "0.1.0",
        description = "Daily air temperature forecast at a chosen hour of day, built from the MET Norway Locationforecast API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "forecast", description = "Daily temperature forecast"),
        (name = "health", description = "Liveness and readiness endpoints"),
        (name = "info", description = "Informational pages")
    ),
    paths(
        handlers::forecast::get_forecast,
        handlers::health::ping,
        handlers::health::readiness_check,
        handlers::index::index,
    ),
    components(
        schemas(
            handlers::forecast::DailyForecastResponse,
            handlers::health::PingResponse,
            handlers::health::ReadinessResponse,
            handlers::health::UpstreamStatus,
            crate::error::ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
