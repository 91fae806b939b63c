//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for backend forwarding and the backend
//! base URL, if any. Cloning is cheap; the client is reference-counted.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// `None` disables `/api` and `/auth` forwarding (answered with 503).
    pub backend_url: Option<Arc<str>>,
}

impl AppState {
    /// Build the forwarding client from host configuration.
    ///
    /// Redirects are never followed so OAuth `Location` answers reach the browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, backend_url: config.backend_url.as_deref().map(Arc::from) })
    }

    #[must_use]
    pub fn backend_configured(&self) -> bool {
        self.backend_url.is_some()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
