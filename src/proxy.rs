//! Same-origin forwarding of `/api/*` and `/auth/*` to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app only ever talks to this host. Chat, documents, profile and
//! the OAuth round-trip live in the backend named by `BACKEND_URL`; this module
//! relays requests with an allow-list of headers in both directions so session
//! cookies and OAuth redirects work without CORS.

use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, header};
use axum::response::Response;
use http_body_util::LengthLimitError;

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body relayed upstream (document uploads included).
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

const REQUEST_HEADERS: [HeaderName; 4] = [header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE];

const RESPONSE_HEADERS: [HeaderName; 5] = [
    header::CACHE_CONTROL,
    header::CONTENT_DISPOSITION,
    header::CONTENT_TYPE,
    header::LOCATION,
    header::SET_COOKIE,
];

/// Upstream URL for a request path and optional query string.
#[must_use]
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let base = backend_url.trim_end_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{path}?{query}"),
        None => format!("{base}{path}"),
    }
}

#[must_use]
pub fn forwards_request_header(name: &HeaderName) -> bool {
    REQUEST_HEADERS.contains(name)
}

#[must_use]
pub fn forwards_response_header(name: &HeaderName) -> bool {
    RESPONSE_HEADERS.contains(name)
}

/// Relay one request to the backend and its answer back to the browser.
///
/// # Errors
///
/// Returns [`ProxyError`] when no backend is configured, the body is too large,
/// or the backend cannot be reached.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let backend_url = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let (parts, body) = request.into_parts();
    let url = upstream_url(backend_url, parts.uri.path(), parts.uri.query());

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(body_error)?;

    let mut upstream = state.http.request(parts.method.clone(), &url);
    for (name, value) in parts.headers.iter().filter(|(name, _)| forwards_request_header(name)) {
        upstream = upstream.header(name, value);
    }

    let started = Instant::now();
    let response = upstream.body(bytes).send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    tracing::debug!(
        method = %parts.method,
        path = parts.uri.path(),
        %status,
        elapsed_ms = started.elapsed().as_millis(),
        bytes = body.len(),
        "proxied request"
    );

    let mut builder = Response::builder().status(status);
    for (name, value) in headers.iter().filter(|(name, _)| forwards_response_header(name)) {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(body))
        .map_err(|e| ProxyError::Upstream(e.to_string()))
}

/// Map a failed body read: the size cap is 413, anything else (aborted or
/// malformed upload) is a bad request.
fn body_error(err: axum::Error) -> ProxyError {
    let inner = err.into_inner();
    if exceeds_length_limit(&*inner) {
        ProxyError::BodyTooLarge { limit: MAX_BODY_BYTES }
    } else {
        ProxyError::InvalidRequest(inner.to_string())
    }
}

fn exceeds_length_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<LengthLimitError>() {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
