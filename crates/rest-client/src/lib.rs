//! Generic REST client infrastructure.
//!
//! This crate provides a thin HTTP layer with:
//!
//! - A pluggable transport seam (`HttpTransport`) with a `reqwest`-backed
//!   production implementation
//! - Consistent error handling via `RestError`
//! - JSON response deserialization
//! - Header injection for authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Details {
//!     return_code: String,
//! }
//!
//! let client = RestClient::with_default_timeout("https://sandbox-api-pay.line.me")?;
//! let details: Details = client.get("/v3/payments", Some("transactionId=1"), &headers).await?;
//! ```

mod client;
mod error;
mod transport;

pub use client::RestClient;
pub use error::RestError;
pub use transport::{HttpTransport, Method, ReqwestTransport, TransportRequest, TransportResponse};
