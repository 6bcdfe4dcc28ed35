use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The channel ID or channel secret is empty.
    #[error("Channel ID and channel secret must be non-empty")]
    InvalidCredentials,

    /// The system random source failed while generating a nonce.
    ///
    /// Nonce uniqueness is the replay protection of the signing scheme, so
    /// the call must abort rather than fall back to a weaker generator.
    #[error("Nonce generation failed: {0}")]
    Randomness(String),
}
