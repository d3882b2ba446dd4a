//! Build-time API configuration for the browser.
//!
//! The WASM bundle cannot read the host environment at runtime, so the base
//! URL is baked in from `SCHOOL_API_BASE_URL` when the client is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use workflow::config::DEFAULT_API_BASE_URL;
use workflow::{ApiConfig, ConfigError};

const BAKED_BASE_URL: Option<&str> = option_env!("SCHOOL_API_BASE_URL");

/// Base URL text the bundle was built with.
pub fn base_url_source() -> &'static str {
    BAKED_BASE_URL.unwrap_or(DEFAULT_API_BASE_URL)
}

/// # Errors
///
/// Returns [`ConfigError`] when the baked-in URL is malformed.
pub fn api_config() -> Result<ApiConfig, ConfigError> {
    ApiConfig::new(base_url_source())
}
