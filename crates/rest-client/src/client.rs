//! Generic REST client over a pluggable transport.

use crate::error::RestError;
use crate::transport::{HttpTransport, Method, ReqwestTransport, TransportRequest, TransportResponse};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
pub struct RestClient {
    transport: Box<dyn HttpTransport>,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api-pay.line.me")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        Ok(Self::with_transport(
            base_url,
            Box::new(ReqwestTransport::new(timeout)?),
        ))
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a REST client over an explicit transport.
    pub fn with_transport(base_url: &str, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/v3/payments")
    /// * `query` - Optional query string (without leading '?'), attached to
    ///   the URL verbatim — the caller is responsible for encoding it
    /// * `headers` - Headers to attach
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: &[(&str, &str)],
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request");

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::Get,
                url,
                headers: owned_headers(headers),
                body: None,
            })
            .await?;

        handle_response(response)
    }

    /// Make a POST request with a pre-serialized JSON body.
    ///
    /// The body string is transmitted byte-for-byte; it is never
    /// re-serialized, so signing over the same string signs exactly what
    /// goes on the wire. `Content-Type: application/json` is added here.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, RestError> {
        let url = self.build_url(path, None);
        tracing::debug!(url = %url, "POST request");

        let mut all_headers = owned_headers(headers);
        all_headers.push(("Content-Type".to_string(), "application/json".to_string()));

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::Post,
                url,
                headers: all_headers,
                body: Some(body.to_string()),
            })
            .await?;

        handle_response(response)
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }
}

fn owned_headers(headers: &[(&str, &str)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Classify the HTTP status and deserialize a success body.
fn handle_response<T: DeserializeOwned>(response: TransportResponse) -> Result<T, RestError> {
    if response.is_success() {
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(body = %response.body, error = %e, "Failed to parse response");
            RestError::Parse(e.to_string())
        })
    } else {
        Err(RestError::HttpError {
            status: response.status,
            message: response.body,
        })
    }
}
