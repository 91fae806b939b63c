//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `BACKEND_URL` is not an absolute http(s) URL.
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BackendTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the chat/documents backend; `/api` forwarding is disabled without it.
    pub backend_url: Option<String>,
    pub timeouts: BackendTimeouts,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl ServerConfig {
    /// Build typed config from the process environment (after `.env`).
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: e.g. `https://backend.internal:8080` (trailing `/` trimmed)
    /// - `BACKEND_TIMEOUT_SECS`: default 60
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `LOG_FILTER`: default `info`
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = lookup("BACKEND_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .map(validate_backend_url)
            .transpose()?;
        let timeouts = BackendTimeouts {
            request_secs: parse_or("BACKEND_TIMEOUT_SECS", lookup("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let log_filter = lookup("LOG_FILTER")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self { port, backend_url, timeouts, log_filter })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn validate_backend_url(url: String) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(ConfigError::BackendScheme(url))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
