//! The HTTP seam between the workflow and a concrete client library.
//!
//! The browser build implements [`Transport`] with `gloo-net`, the CLI with
//! `reqwest`, and tests with a scripted in-memory double.

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved request: absolute URL, optional bearer token, optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Raw status and body text; JSON parsing happens in the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received (DNS, connection refused, CORS, aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport {
    /// Send one request and return whatever status the server produced.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response arrived.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
