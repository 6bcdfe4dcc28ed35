//! LINE Pay REST API client.
//!
//! This crate provides a typed client for the LINE Pay v3 API with:
//!
//! - **Request signing**: every call carries the channel ID, a fresh nonce,
//!   and an HMAC-SHA256 signature over exactly the bytes transmitted
//! - **Payment flow**: request, confirm, and capture operations
//! - **Transaction lookup**: details queries by transaction and/or order IDs
//! - **Error handling**: typed errors separating "never sent", "rejected by
//!   the gateway", "response unparseable", and "timed out"
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ChannelCredentials;
//! use linepay_rest::{LinePayClient, PaymentRequest};
//!
//! // Load credentials from environment
//! let credentials = ChannelCredentials::from_env()?;
//! let client = LinePayClient::new(credentials)?;
//!
//! // Reserve a payment
//! let response = client.request_payment(&request).await?;
//! let info = response.info.expect("reservation info");
//! println!("send the user to {}", info.payment_url.web);
//!
//! // After the user approves, finalize it
//! let confirmed = client
//!     .confirm_payment(info.transaction_id, &confirm)
//!     .await?;
//! ```

mod client;
mod error;
mod query;
mod requests;
mod responses;

pub use client::LinePayClient;
pub use error::LinePayError;
pub use query::QueryParams;
pub use requests::{
    CaptureRequest, ConfirmRequest, ConfirmUrlType, DetailsFields, PaymentDetailsRequest,
    PaymentOption, PaymentOptions, PaymentPackage, PaymentProduct, PaymentRequest, RedirectUrls,
};
pub use responses::{
    CaptureInfo, CaptureResponse, ConfirmInfo, ConfirmResponse, DetailPackage, DetailProduct,
    PackageSummary, PayInfo, PaymentDetailsResponse, PaymentInfo, PaymentResponse, PaymentUrl,
    Recipient, RefundDetail, Shipping, ShippingAddress, TransactionDetail, RETURN_CODE_SUCCESS,
};
