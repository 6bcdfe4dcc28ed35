//! LINE Pay REST API client.

use crate::error::LinePayError;
use crate::requests::{CaptureRequest, ConfirmRequest, PaymentDetailsRequest, PaymentRequest};
use crate::responses::{
    CaptureResponse, ConfirmResponse, PaymentDetailsResponse, PaymentResponse,
};
use auth::{ChannelCredentials, RequestSigner};
use common::Environment;
use rest_client::{HttpTransport, RestClient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Request timeout for LINE Pay API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed client-identifying header value sent with every request.
const USER_AGENT: &str = concat!("linepay-rest/", env!("CARGO_PKG_VERSION"));

// POST /v3/payments/request
const ENDPOINT_PAYMENTS_REQUEST: &str = "/v3/payments/request";

// GET /v3/payments
const ENDPOINT_PAYMENTS_DETAILS: &str = "/v3/payments";

// POST /v3/payments/{transactionId}/confirm
fn confirm_path(transaction_id: i64) -> String {
    format!("/v3/payments/{}/confirm", transaction_id)
}

// POST /v3/payments/authorizations/{transactionId}/capture
fn capture_path(transaction_id: i64) -> String {
    format!("/v3/payments/authorizations/{}/capture", transaction_id)
}

/// LINE Pay REST API client with request signing.
///
/// Credentials and endpoint are read-only after construction; all methods
/// take `&self` and the client can be shared freely across tasks.
pub struct LinePayClient {
    client: RestClient,
    credentials: ChannelCredentials,
    environment: Environment,
}

impl LinePayClient {
    /// Create a new client against the sandbox environment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ChannelCredentials) -> Result<Self, LinePayError> {
        Self::with_environment(credentials, Environment::Sandbox)
    }

    /// Create a new client for a specific environment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_environment(
        credentials: ChannelCredentials,
        environment: Environment,
    ) -> Result<Self, LinePayError> {
        let client = RestClient::new(environment.rest_base_url(), REQUEST_TIMEOUT)?;

        Ok(Self {
            client,
            credentials,
            environment,
        })
    }

    /// Create a client over an explicit transport.
    pub fn with_transport(
        credentials: ChannelCredentials,
        environment: Environment,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        let client = RestClient::with_transport(environment.rest_base_url(), transport);

        Self {
            client,
            credentials,
            environment,
        }
    }

    /// Get the environment this client is connected to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Get the channel ID (for logging/debugging).
    pub fn channel_id(&self) -> &str {
        self.credentials.channel_id()
    }

    /// Reserve a payment.
    ///
    /// POST /v3/payments/request
    ///
    /// On success the response carries the transaction ID and the URLs the
    /// user must visit to approve the payment.
    pub async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, LinePayError> {
        tracing::info!(
            order_id = %request.order_id,
            amount = request.amount,
            currency = %request.currency,
            "Requesting payment"
        );

        self.post_signed(ENDPOINT_PAYMENTS_REQUEST, request).await
    }

    /// Confirm a payment the user has approved.
    ///
    /// POST /v3/payments/{transactionId}/confirm
    pub async fn confirm_payment(
        &self,
        transaction_id: i64,
        request: &ConfirmRequest,
    ) -> Result<ConfirmResponse, LinePayError> {
        tracing::info!(
            transaction_id,
            amount = request.amount,
            currency = %request.currency,
            "Confirming payment"
        );

        self.post_signed(&confirm_path(transaction_id), request)
            .await
    }

    /// Capture a previously authorized payment.
    ///
    /// POST /v3/payments/authorizations/{transactionId}/capture
    ///
    /// Payments reserved with `options.payment.capture = false` are only
    /// authorized by the confirm call; this call finalizes the purchase.
    pub async fn capture_payment(
        &self,
        transaction_id: i64,
        request: &CaptureRequest,
    ) -> Result<CaptureResponse, LinePayError> {
        tracing::info!(
            transaction_id,
            amount = request.amount,
            currency = %request.currency,
            "Capturing payment"
        );

        self.post_signed(&capture_path(transaction_id), request)
            .await
    }

    /// Query transaction details.
    ///
    /// GET /v3/payments
    ///
    /// Filters by the given transaction IDs and/or order IDs (ANDed when
    /// both are present).
    pub async fn payment_details(
        &self,
        request: &PaymentDetailsRequest,
    ) -> Result<PaymentDetailsResponse, LinePayError> {
        // Built once: this exact string is signed and then transmitted.
        let query = request.to_query().encode();

        let signer = RequestSigner::new(&self.credentials);
        let signed = signer.sign(ENDPOINT_PAYMENTS_DETAILS, &query)?;
        let [id, nonce, signature] = signed.as_header_pairs();
        let headers = [id, nonce, signature, ("User-Agent", USER_AGENT)];

        tracing::debug!(
            transaction_ids = request.transaction_ids.len(),
            order_ids = request.order_ids.len(),
            "Querying payment details"
        );

        let query_ref = (!query.is_empty()).then_some(query.as_str());
        let response = self
            .client
            .get(ENDPOINT_PAYMENTS_DETAILS, query_ref, &headers)
            .await?;

        Ok(response)
    }

    /// Serialize, sign, and POST a JSON body.
    ///
    /// The body is serialized exactly once; the signed string and the
    /// transmitted bytes are the same buffer.
    async fn post_signed<B, T>(&self, path: &str, body: &B) -> Result<T, LinePayError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| LinePayError::Encode(e.to_string()))?;

        let signer = RequestSigner::new(&self.credentials);
        let signed = signer.sign(path, &body)?;
        let [id, nonce, signature] = signed.as_header_pairs();
        let headers = [id, nonce, signature, ("User-Agent", USER_AGENT)];

        let response = self.client.post_json(path, &body, &headers).await?;
        Ok(response)
    }
}

impl std::fmt::Debug for LinePayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinePayClient")
            .field("environment", &self.environment)
            .field("base_url", &self.environment.rest_base_url())
            .field("channel_id", &self.credentials.channel_id())
            .finish()
    }
}
