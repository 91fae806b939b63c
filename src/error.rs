//! Errors returned by the `/api` and `/auth` forwarding layer.
//!
//! ERROR HANDLING
//! ==============
//! Every variant maps to one HTTP status and renders as `{"error": "..."}` so
//! the client's `"<operation> failed: <status>"` messages stay meaningful.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No `BACKEND_URL` was configured.
    #[error("backend not configured")]
    NotConfigured,

    /// The request body exceeded the forwarding limit.
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The incoming request could not be turned into an upstream request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The backend did not answer in time.
    #[error("backend timed out")]
    Timeout,

    /// The backend could not be reached or returned an unreadable response.
    #[error("backend request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "proxy request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
