//! Relay for `/api/run-code` to the external compile service.
//!
//! Each request is handled once, with no retries:
//!
//! - `OPTIONS` answers the browser's pre-flight with `200` and no body.
//! - `POST` forwards the body and `Content-Type` unchanged, then relays the
//!   service's status and body back. The response body is streamed.
//! - Any other method is rejected with `405` before any outbound call.
//!
//! CORS headers are added by [`run_code_cors`], which wraps the whole router
//! so that every answer on the path carries them, timeouts included.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::web::server::AppState;

/// Path of the run-code endpoint
pub const RUN_CODE_PATH: &str = "/api/run-code";

/// Methods advertised to browsers for the run-code endpoint
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// How long browsers may cache a pre-flight answer, in seconds
pub const PREFLIGHT_MAX_AGE: &str = "86400";

#[derive(Error, Debug)]
pub enum ProxyError {
    /// The error keeps the full reqwest source chain, printed with `{:#}`
    #[error("failed to reach compile service: {0:#}")]
    Transport(anyhow::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("Run-code relay failed: {}", self);
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Add the CORS headers to every response for [`RUN_CODE_PATH`].
///
/// Overriding, so a relayed response can never drop or change them.
pub async fn run_code_cors(request: Request, next: Next) -> Response {
    let is_run_code = request.uri().path() == RUN_CODE_PATH;
    let mut response = next.run(request).await;

    if is_run_code {
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
    }
    response
}

/// `/api/run-code`, any method.
pub async fn run_code_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let method = request.method().clone();

    if method == Method::OPTIONS {
        return (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE)],
        )
            .into_response();
    }

    if method != Method::POST {
        tracing::debug!("Rejecting {} on run-code endpoint", method);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, ALLOWED_METHODS)],
            "only POST requests are supported",
        )
            .into_response();
    }

    let content_type = request.headers().get(header::CONTENT_TYPE).cloned();

    // Size limit comes from the DefaultBodyLimit layer on the route.
    let body = match Bytes::from_request(request, &state).await {
        Ok(body) => body,
        Err(rejection) => return rejection.into_response(),
    };

    match relay(&state, body, content_type).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

/// Send one request to the compile service and turn its answer into ours.
async fn relay(
    state: &AppState,
    body: Bytes,
    content_type: Option<HeaderValue>,
) -> Result<Response, ProxyError> {
    let mut outbound = state
        .client
        .post(state.config.compiler_url.clone())
        .body(body);
    if let Some(content_type) = content_type {
        outbound = outbound.header(header::CONTENT_TYPE, content_type);
    }

    let upstream = outbound.send().await.map_err(|e| ProxyError::Transport(e.into()))?;

    let status = upstream.status();
    let upstream_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    tracing::debug!("Compile service answered {}", status);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    if let Some(content_type) = upstream_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
