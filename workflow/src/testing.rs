//! Scripted transport for tests here and in downstream crates (`testing` feature).

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::session::{MemoryStore, SessionStore};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

pub const BASE: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

#[derive(Default)]
struct Script {
    routes: Vec<(HttpMethod, String, Reply)>,
    requests: Vec<HttpRequest>,
}

/// Answers requests from a list of `(method, path)` routes, each used once,
/// and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn reply(self, method: HttpMethod, path: &str, status: u16, body: &Value) -> Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.route(method, path, Ok(HttpResponse { status, body }))
    }

    pub fn unreachable(self, method: HttpMethod, path: &str) -> Self {
        self.route(method, path, Err(TransportError("connection refused".to_owned())))
    }

    fn route(self, method: HttpMethod, path: &str, reply: Reply) -> Self {
        self.script.borrow_mut().routes.push((method, format!("{BASE}{path}"), reply));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn count(&self, method: HttpMethod) -> usize {
        self.script.borrow().requests.iter().filter(|r| r.method == method).count()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request.clone());
        let position = script
            .routes
            .iter()
            .position(|(method, url, _)| *method == request.method && *url == request.url);
        match position {
            Some(index) => script.routes.remove(index).2,
            None => Err(TransportError(format!("no scripted route for {} {}", request.method.as_str(), request.url))),
        }
    }
}

pub type TestClient = ApiClient<ScriptedTransport, MemoryStore>;

/// Client with a stored session token `tok`.
pub fn signed_in(transport: &ScriptedTransport) -> TestClient {
    let client = signed_out(transport);
    client
        .session()
        .set("tok", "1", &serde_json::json!({ "username": "admin" }))
        .unwrap();
    client
}

pub fn signed_out(transport: &ScriptedTransport) -> TestClient {
    ApiClient::new(
        ApiConfig::new(BASE).unwrap(),
        transport.clone(),
        SessionStore::new(MemoryStore::default()),
    )
}
