//! Health check handlers

use application::UpstreamHealth;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"status": "ok"}))]
pub struct PingResponse {
    pub status: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok".to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub upstream: UpstreamStatus,
}

/// Status of the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpstreamStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<UpstreamHealth> for UpstreamStatus {
    fn from(health: UpstreamHealth) -> Self {
        Self {
            healthy: health.healthy,
            response_time_ms: health.response_time_ms,
            error: health.error,
        }
    }
}

/// Readiness check - can the weather provider be reached?
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Weather provider reachable", body = ReadinessResponse),
        (status = 503, description = "Weather provider unreachable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let upstream = state.forecast_service.check_upstream().await;

    let ready = upstream.healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            upstream: upstream.into(),
        }),
    )
}
