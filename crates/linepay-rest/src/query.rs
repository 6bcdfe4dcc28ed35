//! Query-string construction for GET endpoints.

use urlencoding::encode;

/// Ordered query-parameter builder with repeated-key support.
///
/// The encoded output is produced once per request: the same string is
/// signed and then attached to the URL, so the signature payload and the
/// transmitted query cannot diverge.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key-value pair. Keys may repeat; insertion order is kept.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Returns true if no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `k1=v1&k2=v2...` (no leading `?`), percent-encoding keys
    /// and values.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_insertion_order() {
        let mut params = QueryParams::new();
        params.add("transactionId", "1");
        params.add("transactionId", "2");
        params.add("transactionId", "3");
        params.add("orderId", "order_a");

        assert_eq!(
            params.encode(),
            "transactionId=1&transactionId=2&transactionId=3&orderId=order_a"
        );
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let mut params = QueryParams::new();
        params.add("orderId", "a b&c=d");

        assert_eq!(params.encode(), "orderId=a%20b%26c%3Dd");
    }

    #[test]
    fn test_empty() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }
}
