//! In-memory transport for tests.
//!
//! Serves canned responses by path (optionally narrowed by query
//! parameters) and records every request it receives. Clones share state,
//! so a test can keep one handle while a client owns another.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Query};
use crate::transport::{AsyncTransport, Transport};

#[derive(Debug, Clone)]
struct Route {
    path: String,
    query: Query,
    reply: Result<HttpResponse, TransportError>,
}

impl Route {
    fn matches(&self, request: &HttpRequest) -> bool {
        self.path == request.path
            && self
                .query
                .iter()
                .all(|(key, value)| request.query.get_all(key).any(|v| v == value))
    }
}

#[derive(Debug, Default)]
struct MockState {
    routes: Vec<Route>,
    requests: Vec<HttpRequest>,
}

/// Mock transport usable by both facades.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `path` with a 200 JSON body.
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.with_response(path, json_response(200, &body))
    }

    /// Reply to `path` with `response`.
    pub fn with_response(self, path: &str, response: HttpResponse) -> Self {
        self.push(path, Query::new(), Ok(response));
        self
    }

    /// Reply to `path` only when the request carries every pair in `query`.
    /// Routes with more matching pairs win over less specific ones.
    pub fn with_response_when(self, path: &str, query: Query, response: HttpResponse) -> Self {
        self.push(path, query, Ok(response));
        self
    }

    /// Fail requests to `path` below the HTTP layer.
    pub fn with_failure(self, path: &str, error: TransportError) -> Self {
        self.push(path, Query::new(), Err(error));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Paths requested so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.lock()
            .requests
            .iter()
            .map(|r| r.path.clone())
            .collect()
    }

    fn push(&self, path: &str, query: Query, reply: Result<HttpResponse, TransportError>) {
        self.lock().routes.push(Route {
            path: path.to_string(),
            query,
            reply,
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reply(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        state
            .routes
            .iter()
            .filter(|route| route.matches(request))
            .max_by_key(|route| route.query.len())
            .map(|route| route.reply.clone())
            .unwrap_or_else(|| Ok(text_response(404, "no mock for this route")))
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.reply(request)
    }
}

impl AsyncTransport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.reply(request)
    }
}

/// A response with an `application/json` body.
pub fn json_response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.to_string(),
    }
}

/// A response with a `text/plain` body.
pub fn text_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("content-type".to_string(), "text/plain".to_string())],
        body: body.to_string(),
    }
}
