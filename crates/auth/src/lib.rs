//! Authentication and signing for the LINE Pay API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated calls to the LINE Pay online-payments gateway.
//!
//! # Features
//!
//! - **Secure Credentials**: The channel secret is wrapped in `SecretString`
//!   to prevent accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Implements the gateway's authentication scheme:
//!   Base64(HMAC-SHA256(secret, secret + path + payload + nonce)).
//! - **Environment Loading**: Credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ChannelCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ChannelCredentials::from_env()?;
//!
//! // Sign a request body
//! let signer = RequestSigner::new(&credentials);
//! let headers = signer.sign("/v3/payments/request", &body)?;
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ChannelCredentials;
pub use error::AuthError;
pub use signer::{
    hmac_base64, RequestSigner, SignedHeaders, HEADER_AUTHORIZATION, HEADER_CHANNEL_ID,
    HEADER_NONCE,
};
