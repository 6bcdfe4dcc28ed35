//! LINE Pay API request payload types.
//!
//! Each type carries an explicit serde schema; the client serializes a
//! payload exactly once and signs that buffer, so field order and
//! optionality here define both the wire body and the signature input.

use crate::query::QueryParams;
use serde::Serialize;

/// Request body for `POST /v3/payments/request`.
///
/// `amount` must equal the sum over packages of `amount` plus any user fees
/// and shipping fee; the gateway rejects mismatches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: i64,
    /// ISO 4217 code, e.g. USD, JPY, TWD, THB.
    pub currency: String,
    pub order_id: String,
    pub packages: Vec<PaymentPackage>,
    pub redirect_urls: RedirectUrls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentOptions>,
}

/// One package within a payment request.
///
/// `amount` must equal the sum of `quantity * price` over the products.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPackage {
    pub id: String,
    pub amount: i64,
    pub name: String,
    pub products: Vec<PaymentProduct>,
}

/// One product line within a package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProduct {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

/// Redirect targets the gateway sends the user to after the payment screen.
///
/// With `ConfirmUrlType::Client` the user lands on `confirm_url` with a
/// `transactionId` parameter (an `orderId` is used instead when the flow
/// started from a QR scan before login).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectUrls {
    pub confirm_url_type: ConfirmUrlType,
    pub confirm_url: String,
    pub cancel_url: String,
}

/// Who handles the post-payment redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmUrlType {
    Client,
    Server,
    None,
}

/// Optional payment behavior flags for a payment request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentOption>,
}

/// Payment-stage options.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    /// When false, confirming the payment only authorizes it; a later
    /// capture call finalizes the purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
}

/// Request body for `POST /v3/payments/{transactionId}/confirm`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub amount: i64,
    pub currency: String,
}

/// Request body for `POST /v3/payments/authorizations/{transactionId}/capture`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub amount: i64,
    pub currency: String,
}

/// Parameters for `GET /v3/payments`.
///
/// When both transaction IDs and order IDs are given they are ANDed: the
/// results must match on both.
#[derive(Debug, Clone, Default)]
pub struct PaymentDetailsRequest {
    pub transaction_ids: Vec<i64>,
    pub order_ids: Vec<String>,
    pub fields: Option<DetailsFields>,
}

impl PaymentDetailsRequest {
    /// Build the query parameters, one repeated key per ID, in input order.
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();

        for id in &self.transaction_ids {
            params.add("transactionId", id.to_string());
        }

        for id in &self.order_ids {
            params.add("orderId", id.clone());
        }

        if let Some(fields) = self.fields {
            params.add("fields", fields.as_str());
        }

        params
    }
}

/// Which sections of the transaction details to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsFields {
    Transaction,
    Order,
    All,
}

impl DetailsFields {
    /// Wire value for the `fields` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "TRANSACTION",
            Self::Order => "ORDER",
            Self::All => "ALL",
        }
    }
}
