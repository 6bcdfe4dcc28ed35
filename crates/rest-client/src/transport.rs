//! HTTP transport abstraction.
//!
//! The transport sees a fully assembled request (method, URL, headers, body)
//! and returns the raw status and body. Authentication, URL construction,
//! and response decoding all happen above this seam, which keeps the
//! exchange itself swappable in tests.

use crate::error::RestError;
use async_trait::async_trait;
use std::time::Duration;

/// HTTP method of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound HTTP exchange, fully assembled by the caller.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    /// Full URL including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Exact body bytes to transmit, if any.
    pub body: Option<String>,
}

/// Raw result of an HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pluggable HTTP exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform the exchange and return the raw response.
    ///
    /// Transport-level failures (connection refused, deadline fired) are
    /// errors; a non-success HTTP status is a normal response here and is
    /// classified by the layer above.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, RestError>;
}

/// Production transport over a pooled `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, RestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, RestError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
