//! HMAC-SHA256 request signing for the LINE Pay API.

use crate::credentials::ChannelCredentials;
use crate::error::AuthError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the merchant channel ID.
pub const HEADER_CHANNEL_ID: &str = "X-LINE-ChannelId";
/// Header carrying the per-request nonce.
pub const HEADER_NONCE: &str = "X-LINE-Authorization-Nonce";
/// Header carrying the base64-encoded HMAC-SHA256 signature.
pub const HEADER_AUTHORIZATION: &str = "X-LINE-Authorization";

/// Authentication header values for exactly one outbound request.
///
/// Attach all three verbatim; the gateway recomputes the signature from the
/// transmitted path, payload, and nonce and compares byte-for-byte.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// Value for `X-LINE-ChannelId`.
    pub channel_id: String,
    /// Value for `X-LINE-Authorization-Nonce`. Fresh per request, never reused.
    pub nonce: String,
    /// Value for `X-LINE-Authorization`.
    pub signature: String,
}

impl SignedHeaders {
    /// Header (name, value) pairs ready to attach to a request.
    pub fn as_header_pairs(&self) -> [(&str, &str); 3] {
        [
            (HEADER_CHANNEL_ID, self.channel_id.as_str()),
            (HEADER_NONCE, self.nonce.as_str()),
            (HEADER_AUTHORIZATION, self.signature.as_str()),
        ]
    }
}

/// Request signer for authenticated LINE Pay API calls.
///
/// Signature = Base64(HMAC-SHA256(ChannelSecret,
/// ChannelSecret + URL path + payload + nonce)), where the payload is the
/// serialized JSON body for POST requests or the encoded query string
/// (without the leading `?`) for GET requests.
pub struct RequestSigner<'a> {
    credentials: &'a ChannelCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ChannelCredentials) -> Self {
        Self { credentials }
    }

    /// Sign one outbound request, generating a fresh nonce.
    ///
    /// `url_path` is the request path only (no scheme, host, or query).
    /// `payload` must match byte-for-byte what will be transmitted.
    ///
    /// # Errors
    /// Returns `AuthError::Randomness` if the OS random source fails; the
    /// call must be aborted in that case.
    pub fn sign(&self, url_path: &str, payload: &str) -> Result<SignedHeaders, AuthError> {
        let nonce = generate_nonce()?;
        let signature = self.sign_with_nonce(url_path, payload, &nonce);

        Ok(SignedHeaders {
            channel_id: self.credentials.channel_id().to_owned(),
            nonce,
            signature,
        })
    }

    /// Compute the signature for a known nonce.
    ///
    /// Deterministic: identical (secret, path, payload, nonce) always yields
    /// the identical signature. The canonical string embeds the channel
    /// secret and must never be logged.
    pub fn sign_with_nonce(&self, url_path: &str, payload: &str, nonce: &str) -> String {
        let secret = self.credentials.expose_secret();

        let mut message =
            String::with_capacity(secret.len() + url_path.len() + payload.len() + nonce.len());
        message.push_str(secret);
        message.push_str(url_path);
        message.push_str(payload);
        message.push_str(nonce);

        hmac_base64(secret, &message)
    }
}

/// Compute HMAC-SHA256 of `message` keyed by `secret` and return the raw
/// 32-byte digest as a standard base64 string (with padding).
pub fn hmac_base64(secret: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");

    mac.update(message.as_bytes());
    let result = mac.finalize();
    BASE64.encode(result.into_bytes())
}

/// Generate a random nonce formatted as a canonical version-4 UUID string.
///
/// Draws 16 bytes (122 random bits after version/variant) from the OS secure
/// random source. A failing source is an error, never a weaker fallback.
fn generate_nonce() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::Randomness(e.to_string()))?;

    Ok(uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string())
}
