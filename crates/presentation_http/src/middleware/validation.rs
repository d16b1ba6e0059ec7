//! Request validation
//!
//! Provides a `ValidatedQuery` extractor that deserializes the query string
//! and validates it using the validator crate.

use axum::{
    Json,
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid query string: {0}")]
    QueryError(#[from] QueryRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::QueryError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        let body = serde_json::json!({
            "error": message,
            "code": "validation_error"
        });

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Flatten field errors into `field: message` pairs, sorted by field name
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                )
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// A query-string extractor that also validates the parameters
///
/// Use this instead of `Query<T>` when the parameters carry `validator`
/// constraints. Both malformed and out-of-range values are rejected with 422.
///
/// # Example
///
/// ```ignore
/// use validator::Validate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Validate)]
/// struct Params {
///     #[validate(range(min = 0, max = 23))]
///     hour: i64,
/// }
///
/// async fn handler(ValidatedQuery(params): ValidatedQuery<Params>) {
///     // params is validated
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(describe(&e)))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct TestParams {
        #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
        #[serde(default)]
        hour: i64,
        #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
        #[serde(default)]
        lat: f64,
    }

    async fn test_handler(ValidatedQuery(params): ValidatedQuery<TestParams>) -> String {
        params.hour.to_string()
    }

    fn create_test_app() -> Router {
        Router::new().route("/test", get(test_handler))
    }

    async fn status_for(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn valid_query_passes() {
        assert_eq!(status_for("/test?hour=14&lat=44.8").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_params_use_defaults() {
        assert_eq!(status_for("/test").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_rejected() {
        assert_eq!(
            status_for("/test?hour=24").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for("/test?lat=-90.5").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn unparseable_value_rejected() {
        assert_eq!(
            status_for("/test?hour=noon").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn describe_lists_every_field() {
        let params = TestParams {
            hour: 30,
            lat: 100.0,
        };
        let errors = params.validate().unwrap_err();
        assert_eq!(
            describe(&errors),
            "hour: must be between 0 and 23; lat: must be between -90 and 90"
        );
    }

    #[test]
    fn validation_error_debug() {
        let error = ValidationError::ValidationFailed("test".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("ValidationFailed"));
    }
}
