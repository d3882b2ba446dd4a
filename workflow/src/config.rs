//! API endpoint configuration.
//!
//! Every request in every front end is built from one [`ApiConfig`]; there is
//! no per-page host override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const API_BASE_URL_ENV: &str = "SCHOOL_API_BASE_URL";

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL (trailing slashes removed).
    ///
    /// An empty string selects same-origin requests, which the browser build
    /// uses when the UI and API share a host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for anything that is neither
    /// empty nor a parseable `http`/`https` URL with a host.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self { base_url: String::new() });
        }
        let invalid = || ConfigError::InvalidBaseUrl(raw.to_owned());
        let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid());
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Read `SCHOOL_API_BASE_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(raw) => Self::new(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path onto the base URL with exactly one slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
