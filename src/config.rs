//! Host configuration from the environment.
//!
//! ERROR HANDLING
//! ==============
//! A malformed value stops startup with a message naming the variable. An
//! unset value falls back to its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use workflow::ApiConfig;
use workflow::config::API_BASE_URL_ENV;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error(transparent)]
    Api(#[from] workflow::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build from raw variable values; `None` means unset.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn from_vars(port: Option<&str>, api_base_url: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let api = match api_base_url {
            Some(raw) => ApiConfig::new(raw)?,
            None => ApiConfig::default(),
        };
        Ok(Self { port, api })
    }

    /// Read `PORT` and `SCHOOL_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let api = std::env::var(API_BASE_URL_ENV).ok();
        Self::from_vars(port.as_deref(), api.as_deref())
    }

    /// Whether the browser bundle talks to the same API this host was
    /// configured for.
    #[must_use]
    pub fn matches_client(&self, client: &ApiConfig) -> bool {
        self.api == *client
    }
}
