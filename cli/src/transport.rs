//! `reqwest` implementation of the workflow HTTP seam.

use async_trait::async_trait;
use workflow::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(concat!("school-cli/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(Self { client })
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(method(request.method), &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
