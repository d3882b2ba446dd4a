//! `gloo-net` transport.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails as unreachable, since the REST API
//! is only called from the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use workflow::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use workflow::HttpMethod;

            let fail = |e: gloo_net::Error| TransportError(e.to_string());
            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            }
            .header("Accept", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match &request.body {
                Some(body) => builder.json(body).map_err(fail)?.send().await,
                None => builder.send().await,
            }
            .map_err(fail)?;
            let status = response.status();
            let body = response.text().await.map_err(fail)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError(format!("{} {} is only available in the browser", request.method.as_str(), request.url)))
        }
    }
}
