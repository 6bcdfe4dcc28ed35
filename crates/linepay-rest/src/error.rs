//! LINE Pay API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the LINE Pay API.
///
/// The variants keep the caller's failure modes distinct: `Encode` and
/// `Auth` mean the request was never sent; `Rest(HttpError)` means the
/// gateway rejected it; `Rest(Parse)` means it was accepted but the response
/// did not match the expected shape; `Rest(Timeout)` means the deadline
/// fired first.
#[derive(Debug, Error)]
pub enum LinePayError {
    /// REST client error (upstream status, network, timeout, decode).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Authentication error (credentials or nonce generation).
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The request payload could not be serialized; nothing was sent.
    #[error("Request encoding error: {0}")]
    Encode(String),
}
