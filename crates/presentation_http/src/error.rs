//! API error handling
//!
//! Maps application failures onto HTTP status codes and a uniform JSON body.
//! Decode failures from the weather provider never leak their details.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Generic message returned when the provider payload cannot be decoded
pub const UPSTREAM_FORMAT_MESSAGE: &str = "Unexpected response format from weather provider";

/// Generic message returned for failures inside the service
pub const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request was well-formed HTTP but the values are out of range
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Weather provider unreachable or answered with a failure status
    #[error("Weather provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Weather provider answered with an undecodable payload
    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Weather provider unavailable: Request failed: HTTP 403 Forbidden",
    "code": "upstream_unavailable"
}))]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            Self::UpstreamUnavailable(cause) => {
                warn!(cause = %cause, "Weather provider unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    self.to_string(),
                )
            },
            Self::UpstreamFormat(cause) => {
                warn!(cause = %cause, "Weather provider returned an unexpected payload");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_format_error",
                    UPSTREAM_FORMAT_MESSAGE.to_string(),
                )
            },
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    INTERNAL_MESSAGE.to_string(),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Unprocessable(e.to_string()),
            ApplicationError::ExternalService(msg) => Self::UpstreamUnavailable(msg),
            ApplicationError::UpstreamFormat(msg) => Self::UpstreamFormat(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Unprocessable(err.to_string())
    }
}
