//! `X-Request-Id` tagging for forecast and health requests
//!
//! A UUID supplied by the caller is kept so a client can follow its own
//! request through the server logs. Anything else gets a fresh UUID v7.
//! The id lands in three places: the request extensions as [`RequestId`],
//! the `http_request` span that wraps the handler and the upstream call,
//! and the response header.

use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the request being served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Id sent by the caller, if it parses as a UUID
    fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?;
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    fn header_value(self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0.hyphenated().to_string()).ok()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl RequestIdLayer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let id = RequestId::from_headers(request.headers()).unwrap_or_else(RequestId::generate);
        request.extensions_mut().insert(id);

        let span = tracing::info_span!(
            "http_request",
            request_id = %id,
            method = %request.method(),
            path = %request.uri().path(),
        );

        // Only the service that reported ready may be called
        let ready = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, ready);

        Box::pin(
            async move {
                let mut response = inner.call(request).await?;
                if let Some(value) = id.header_value() {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn echo_id(Extension(id): Extension<RequestId>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(echo_id))
            .layer(RequestIdLayer::new())
    }

    fn get_root(header: Option<&str>) -> Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn returned_id(response: &Response) -> Uuid {
        let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
        Uuid::parse_str(header.to_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn generates_v7_id_when_absent() {
        let response = app().oneshot(get_root(None)).await.unwrap();

        assert_eq!(returned_id(&response).get_version_num(), 7);
    }

    #[tokio::test]
    async fn keeps_caller_id_and_exposes_it_to_handlers() {
        let caller_id = Uuid::new_v4();
        let response = app()
            .oneshot(get_root(Some(&format!(" {caller_id} "))))
            .await
            .unwrap();

        assert_eq!(returned_id(&response), caller_id);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, caller_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn replaces_unparseable_caller_id() {
        let response = app().oneshot(get_root(Some("not-a-uuid"))).await.unwrap();

        assert_eq!(returned_id(&response).get_version_num(), 7);
    }

    #[test]
    fn displays_hyphenated() {
        assert_eq!(
            RequestId(Uuid::nil()).to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
