//! Secure channel credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the channel
//! secret and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// LINE Pay channel credentials for authenticated requests.
///
/// The channel secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ChannelCredentials {
    channel_id: String,
    channel_secret: SecretString,
}

impl ChannelCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `LINE_PAY_CHANNEL_ID` - The channel ID (public)
    /// - `LINE_PAY_CHANNEL_SECRET` - The channel secret (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set,
    /// or `AuthError::InvalidCredentials` if either is empty.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let channel_id = std::env::var("LINE_PAY_CHANNEL_ID")
            .map_err(|_| AuthError::MissingEnvVar("LINE_PAY_CHANNEL_ID".into()))?;

        let channel_secret = std::env::var("LINE_PAY_CHANNEL_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("LINE_PAY_CHANNEL_SECRET".into()))?;

        Self::new(channel_id, channel_secret)
    }

    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidCredentials` if the channel ID or the
    /// channel secret is empty. An empty credential can never produce a
    /// signature the gateway accepts.
    pub fn new(channel_id: String, channel_secret: String) -> Result<Self, AuthError> {
        if channel_id.is_empty() || channel_secret.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Self {
            channel_id,
            channel_secret: SecretString::from(channel_secret),
        })
    }

    /// Get the channel ID (public, safe to log).
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Expose the channel secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.channel_secret.expose_secret()
    }
}

impl std::fmt::Debug for ChannelCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelCredentials")
            .field("channel_id", &self.channel_id)
            .field("channel_secret", &"[REDACTED]")
            .finish()
    }
}
