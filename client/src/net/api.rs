//! Per-page API client construction.

use workflow::{ApiClient, SessionStore};

use super::transport::BrowserTransport;
use crate::util::storage::BrowserStorage;

pub type Client = ApiClient<BrowserTransport, BrowserStorage>;

/// The `localStorage`-backed session.
pub fn session() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// A client for the configured backend, or `None` (logged) when the baked
/// base URL is malformed.
pub fn client() -> Option<Client> {
    match crate::config::api_config() {
        Ok(config) => Some(ApiClient::new(config, BrowserTransport, session())),
        Err(e) => {
            leptos::logging::error!("api config: {e}");
            None
        }
    }
}
