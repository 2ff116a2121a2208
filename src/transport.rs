//! Transport boundary and its `reqwest` implementations.
//!
//! A transport turns an [`HttpRequest`] into an [`HttpResponse`] and knows
//! nothing about statuses or bodies; classification happens above it.

use std::future::Future;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Blocking transport.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Non-blocking transport.
pub trait AsyncTransport: Send + Sync {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Blocking transport over `reqwest::blocking::Client`.
///
/// Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(path = %request.path))]
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let start = Instant::now();
        let url = join_url(&self.base_url, &request.path);

        let builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
        };
        let pairs: Vec<_> = request.query.iter().collect();
        let response = builder.query(&pairs).send()?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text()?;

        debug!(status, elapsed_ms = start.elapsed().as_millis() as u64, "Response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Async transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct AsyncReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl AsyncReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            // Keep connections alive for reuse
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AsyncTransport for AsyncReqwestTransport {
    #[instrument(skip(self, request), fields(path = %request.path))]
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let start = Instant::now();
        let url = join_url(&self.base_url, &request.path);

        let builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
        };
        let pairs: Vec<_> = request.query.iter().collect();
        let response = builder.query(&pairs).send().await?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text().await?;

        debug!(status, elapsed_ms = start.elapsed().as_millis() as u64, "Response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
