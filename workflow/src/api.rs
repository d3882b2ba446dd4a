//! Uniform REST access with bearer auth and centralized 401 handling.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified once here: no response is `Unreachable`, a
//! non-2xx status is `Rejected`, and a 401 on an authenticated call clears
//! the session and becomes `Unauthenticated` so every page reacts the same
//! way (redirect to login). Callers never see raw transport errors.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::envelope;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::session::{KeyValueStore, SessionStore};
use crate::transport::{HttpMethod, HttpRequest, Transport};

/// Non-destructive request methods. DELETE is only reachable through
/// [`ApiClient::delete`] with a [`ConfirmedDelete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::Get,
            Method::Post => Self::Post,
            Method::Put => Self::Put,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No token, or the server rejected it with 401.
    #[error("sign in required")]
    Unauthenticated,
    /// No HTTP response at all.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    /// The server answered with a non-2xx status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String, payload: Option<Value> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the caller should send the user to the login screen.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Display text for a failed action, e.g. `user_message("load students")`.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Unauthenticated => "Your session has expired. Please sign in again.".to_owned(),
            Self::Unreachable(_) | Self::Decode(_) => format!("Failed to {action}. Please try again."),
            Self::Rejected { message, .. } => format!("Failed to {action}: {message}"),
        }
    }
}

/// Permission to issue one DELETE, minted only by the delete confirmation flow.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: i64,
    path: String,
}

impl ConfirmedDelete {
    pub(crate) fn new(id: i64, path: String) -> Self {
        Self { id, path }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }
}

pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, session: SessionStore<S>) -> Self {
        Self { config, transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a request and return the parsed JSON body (`null` when empty).
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. An authenticated request without a stored token
    /// fails as `Unauthenticated` without touching the network.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>, auth: bool) -> Result<Value, ApiError> {
        self.send(method.into(), path, body.cloned(), auth).await
    }

    /// Fetch one entity.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; shape mismatches become `Decode`.
    pub async fn get_one<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.send(HttpMethod::Get, path, None, true).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch a collection in either envelope shape.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; shape mismatches become `Decode`.
    pub async fn get_list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ApiError> {
        let body = self.send(HttpMethod::Get, path, None, true).await?;
        envelope::normalize(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = encode(body)?;
        self.send(HttpMethod::Post, path, Some(body), true).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = encode(body)?;
        self.send(HttpMethod::Put, path, Some(body), true).await
    }

    /// Issue the DELETE a user has confirmed.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, confirmed: ConfirmedDelete) -> Result<(), ApiError> {
        self.send(HttpMethod::Delete, &confirmed.path, None, true).await.map(|_| ())
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<Value>, auth: bool) -> Result<Value, ApiError> {
        let bearer = if auth {
            let Some(token) = self.session.get() else {
                tracing::debug!(method = method.as_str(), path, "no session token; request not sent");
                return Err(ApiError::Unauthenticated);
            };
            Some(token)
        } else {
            None
        };

        let url = self.config.url(path);
        tracing::debug!(method = method.as_str(), %url, "api request");
        let response = self
            .transport
            .send(HttpRequest { method, url: url.clone(), bearer, body })
            .await
            .map_err(|e| {
                tracing::warn!(method = method.as_str(), %url, error = %e, "api unreachable");
                ApiError::Unreachable(e.0)
            })?;

        let parsed = parse_body(&response.body);
        if response.is_success() {
            return parsed.map_err(ApiError::Decode);
        }

        let payload = parsed.ok().filter(|value| !value.is_null());
        if auth && response.status == 401 {
            tracing::warn!(method = method.as_str(), %url, "session rejected; clearing");
            self.session.clear();
            return Err(ApiError::Unauthenticated);
        }
        let message = server_message(response.status, payload.as_ref());
        tracing::warn!(method = method.as_str(), %url, status = response.status, %message, "api rejected");
        Err(ApiError::Rejected { status: response.status, message, payload })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_body(raw: &str) -> Result<Value, String> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Best human-readable message in an error payload.
///
/// Looks at `detail`, `message`, `error`, `non_field_errors[0]`, then the
/// first `field: [message]` pair, and falls back to a generic text by status.
pub(crate) fn server_message(status: u16, payload: Option<&Value>) -> String {
    if let Some(Value::String(text)) = payload {
        if !text.trim().is_empty() {
            return text.clone();
        }
    }
    if let Some(Value::Object(map)) = payload {
        for key in ["detail", "message", "error"] {
            if let Some(Value::String(text)) = map.get(key) {
                return text.clone();
            }
        }
        if let Some(text) = map.get("non_field_errors").and_then(first_text) {
            return text;
        }
        for (field, value) in map {
            if let Some(text) = first_text(value) {
                return format!("{field}: {text}");
            }
        }
    }
    generic_message(status).to_owned()
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(|item| item.as_str().map(str::to_owned)),
        _ => None,
    }
}

fn generic_message(status: u16) -> &'static str {
    match status {
        400 => "the request was invalid",
        403 => "you do not have permission to do that",
        404 => "not found",
        409 => "conflicts with existing data",
        500..=599 => "the server encountered an error",
        _ => "the request failed",
    }
}
