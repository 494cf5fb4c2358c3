//! Request middleware: capability guards and request tracing.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;
use ucsb_api_core::{authorize, Capability, CredentialStore};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Middleware state: the credential table plus the capability a route needs.
#[derive(Clone)]
pub struct CapabilityGuard {
    credentials: Arc<CredentialStore>,
    required: Capability,
}

impl CapabilityGuard {
    pub fn new(state: &AppState, required: Capability) -> Self {
        Self {
            credentials: state.credentials(),
            required,
        }
    }
}

/// Rejects the request with 403 unless the caller holds the guard's
/// capability. On success the resolved principal is attached to the request
/// extensions for handlers that need it.
pub async fn require_capability(
    State(guard): State<CapabilityGuard>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| guard.credentials.resolve_authorization(value))
        .cloned();

    if let Err(denied) = authorize(principal.as_ref(), guard.required) {
        warn!(
            "event=access_denied module=http status=error method={} path={} required={} reason=\"{}\"",
            request.method(),
            request.uri().path(),
            guard.required.as_str(),
            denied
        );
        return ApiError::Forbidden.into_response();
    }

    if let Some(principal) = principal {
        request.extensions_mut().insert(principal);
    }
    next.run(request).await
}

/// Tags every response with a request id and logs one line per request.
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(request).await;

    info!(
        "event=http_request module=http status={} method={} path={} request_id={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        request_id,
        started_at.elapsed().as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
