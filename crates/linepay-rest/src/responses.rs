//! LINE Pay API response types.
//!
//! Every response carries a `returnCode` / `returnMessage` pair; business
//! failures ride on an HTTP 200 with a non-success return code, so the code
//! stays on the typed response rather than becoming an error.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `returnCode` value for a successful operation.
pub const RETURN_CODE_SUCCESS: &str = "0000";

/// Response from `POST /v3/payments/request`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub return_code: String,
    pub return_message: String,
    #[serde(default)]
    pub info: Option<PaymentInfo>,
}

impl PaymentResponse {
    /// Returns true when the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_SUCCESS
    }
}

/// Payment reservation details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_url: PaymentUrl,
    pub transaction_id: i64,
    pub payment_access_token: String,
}

/// URLs the user is sent to in order to approve the payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUrl {
    pub web: String,
    pub app: String,
}

/// Response from `POST /v3/payments/{transactionId}/confirm`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub return_code: String,
    pub return_message: String,
    #[serde(default)]
    pub info: Option<ConfirmInfo>,
}

impl ConfirmResponse {
    /// Returns true when the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_SUCCESS
    }
}

/// Confirmed payment details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmInfo {
    pub order_id: String,
    pub transaction_id: i64,
    #[serde(default)]
    pub authorization_expire_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reg_key: Option<String>,
    #[serde(default)]
    pub pay_info: Vec<PayInfo>,
    #[serde(default)]
    pub packages: Vec<PackageSummary>,
    #[serde(default)]
    pub shipping: Option<Shipping>,
}

/// How (part of) a payment was settled.
///
/// `method` is one of CREDIT_CARD, BALANCE, DISCOUNT. The credit-card
/// fields are present only for card payments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInfo {
    pub method: String,
    pub amount: i64,
    #[serde(default)]
    pub credit_card_nickname: Option<String>,
    /// VISA, MASTER, AMEX, DINERS, JCB.
    #[serde(default)]
    pub credit_card_brand: Option<String>,
    /// Format: **** **** **** 1234
    #[serde(default)]
    pub masked_credit_card_number: Option<String>,
}

/// Per-package settlement summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub user_fee_amount: i64,
}

/// Shipping selection attached to a payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    #[serde(default)]
    pub method_id: Option<String>,
    #[serde(default)]
    pub fee_amount: i64,
    #[serde(default)]
    pub address: Option<ShippingAddress>,
}

/// Shipping destination.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub optional: Option<String>,
    #[serde(default)]
    pub recipient: Option<Recipient>,
}

/// Shipping recipient.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name_optional: Option<String>,
    #[serde(default)]
    pub last_name_optional: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
}

/// Response from `POST /v3/payments/authorizations/{transactionId}/capture`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResponse {
    pub return_code: String,
    pub return_message: String,
    #[serde(default)]
    pub info: Option<CaptureInfo>,
}

impl CaptureResponse {
    /// Returns true when the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_SUCCESS
    }
}

/// Captured payment details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureInfo {
    pub transaction_id: i64,
    pub order_id: String,
    #[serde(default)]
    pub pay_info: Vec<PayInfo>,
}

/// Response from `GET /v3/payments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsResponse {
    pub return_code: String,
    pub return_message: String,
    #[serde(default)]
    pub info: Vec<TransactionDetail>,
}

impl PaymentDetailsResponse {
    /// Returns true when the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_SUCCESS
    }
}

/// One transaction in a details query result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub transaction_id: i64,
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
    /// PAYMENT, PAYMENT_REFUND, PARTIAL_REFUND.
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// AUTHORIZATION, VOIDED_AUTHORIZATION, EXPIRED_AUTHORIZATION.
    #[serde(default)]
    pub pay_status: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub authorization_expire_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pay_info: Vec<PayInfo>,
    /// Refunds applied against this transaction.
    #[serde(default)]
    pub refund_list: Vec<RefundDetail>,
    /// Set on refund records, pointing at the refunded payment.
    #[serde(default)]
    pub original_transaction_id: Option<i64>,
    #[serde(default)]
    pub packages: Vec<DetailPackage>,
    #[serde(default)]
    pub shipping: Option<Shipping>,
}

/// One refund against a transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundDetail {
    pub refund_transaction_id: i64,
    /// PAYMENT_REFUND or PARTIAL_REFUND.
    #[serde(default)]
    pub transaction_type: Option<String>,
    pub refund_amount: i64,
    #[serde(default)]
    pub refund_transaction_date: Option<DateTime<Utc>>,
}

/// Package detail within a transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPackage {
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub user_fee_amount: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<DetailProduct>,
}

/// Product detail within a package.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailProduct {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: i64,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payment_response() {
        let json = r#"{
            "returnCode": "0000",
            "returnMessage": "OK",
            "info": {
                "transactionId": 2020010800227854310,
                "paymentAccessToken": "187568751124",
                "paymentUrl": {
                    "web": "https://sandbox-web-pay.line.me/web/payment/wait?transactionReserveId=abc",
                    "app": "line://pay/payment/abc"
                }
            }
        }"#;

        let response: PaymentResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.return_message, "OK");

        let info = response.info.unwrap();
        assert_eq!(info.transaction_id, 2020010800227854310);
        assert_eq!(info.payment_access_token, "187568751124");
        assert!(info.payment_url.app.starts_with("line://"));
    }

    #[test]
    fn test_deserialize_failure_without_info() {
        let json = r#"{"returnCode": "1104", "returnMessage": "Non existing channel"}"#;

        let response: PaymentResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert!(response.info.is_none());
    }

    #[test]
    fn test_deserialize_confirm_response() {
        let json = r#"{
            "returnCode": "0000",
            "returnMessage": "OK",
            "info": {
                "orderId": "order_210124",
                "transactionId": 2020010800227854310,
                "authorizationExpireDate": "2020-02-07T05:16:04Z",
                "regKey": "RK9A8B7C6D5E4F3",
                "payInfo": [
                    {
                        "method": "CREDIT_CARD",
                        "amount": 100,
                        "creditCardNickname": "my card",
                        "creditCardBrand": "VISA",
                        "maskedCreditCardNumber": "**** **** **** 1234"
                    },
                    {
                        "method": "DISCOUNT",
                        "amount": 10
                    }
                ],
                "packages": [
                    {"id": "pkg_1", "amount": 110, "userFeeAmount": 0}
                ]
            }
        }"#;

        let response: ConfirmResponse = serde_json::from_str(json).unwrap();
        let info = response.info.unwrap();

        assert_eq!(info.order_id, "order_210124");
        assert_eq!(info.reg_key.as_deref(), Some("RK9A8B7C6D5E4F3"));
        assert!(info.authorization_expire_date.is_some());
        assert_eq!(info.pay_info.len(), 2);
        assert_eq!(info.pay_info[0].credit_card_brand.as_deref(), Some("VISA"));
        assert!(info.pay_info[1].credit_card_brand.is_none());
        assert_eq!(info.packages[0].amount, 110);
        assert!(info.shipping.is_none());
    }

    #[test]
    fn test_deserialize_capture_response() {
        let json = r#"{
            "returnCode": "0000",
            "returnMessage": "OK",
            "info": {
                "transactionId": 2020010800227854310,
                "orderId": "order_210124",
                "payInfo": [{"method": "BALANCE", "amount": 100}]
            }
        }"#;

        let response: CaptureResponse = serde_json::from_str(json).unwrap();
        let info = response.info.unwrap();
        assert_eq!(info.order_id, "order_210124");
        assert_eq!(info.pay_info[0].method, "BALANCE");
    }

    #[test]
    fn test_deserialize_details_with_refunds() {
        let json = r#"{
            "returnCode": "0000",
            "returnMessage": "OK",
            "info": [
                {
                    "transactionId": 2020011300254002010,
                    "transactionDate": "2020-01-13T02:30:00Z",
                    "transactionType": "PAYMENT",
                    "payStatus": "AUTHORIZATION",
                    "productName": "product",
                    "merchantName": "merchant",
                    "currency": "TWD",
                    "payInfo": [{"method": "CREDIT_CARD", "amount": 100}],
                    "refundList": [
                        {
                            "refundTransactionId": 2020011300254002011,
                            "transactionType": "PARTIAL_REFUND",
                            "refundAmount": 30,
                            "refundTransactionDate": "2020-01-14T09:00:00Z"
                        }
                    ],
                    "packages": [
                        {
                            "id": "pkg_1",
                            "amount": 100,
                            "userFeeAmount": 0,
                            "name": "package",
                            "products": [
                                {"name": "product", "quantity": 1, "price": 100}
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let response: PaymentDetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.info.len(), 1);

        let detail = &response.info[0];
        assert_eq!(detail.pay_status.as_deref(), Some("AUTHORIZATION"));
        assert_eq!(detail.refund_list.len(), 1);
        assert_eq!(detail.refund_list[0].refund_transaction_id, 2020011300254002011);
        assert_eq!(detail.refund_list[0].refund_amount, 30);
        assert_eq!(detail.packages[0].products[0].quantity, 1);
    }

    #[test]
    fn test_deserialize_details_empty_info() {
        let json = r#"{"returnCode": "0000", "returnMessage": "OK", "info": []}"#;

        let response: PaymentDetailsResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert!(response.info.is_empty());
    }
}
