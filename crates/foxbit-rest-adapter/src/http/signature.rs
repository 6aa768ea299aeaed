/*
[INPUT]:  Request method, path, query parameters, raw body and API secret
[OUTPUT]: Millisecond timestamp + lowercase hex HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or pre-hash format
*/

use crate::http::{FoxbitError, Result};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use tracing::debug;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Result of signing one request
///
/// `query_string` is the exact string that was hashed, and must be the one
/// appended to the request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub timestamp: i64,
    pub signature: String,
    pub query_string: String,
    pub pre_hash: String,
}

/// Percent-encode `params` as `k=v&k=v`, keeping the supplied order
pub fn encode_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return String::new();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Canonical pre-hash: `timestamp ++ method ++ path ++ query ++ body`
pub fn pre_hash(
    timestamp: i64,
    method: &str,
    path: &str,
    query_string: &str,
    body: Option<&str>,
) -> String {
    format!(
        "{timestamp}{method}{path}{query_string}{}",
        body.unwrap_or_default()
    )
}

/// HMAC-SHA256 request signer
#[derive(Clone)]
pub struct Signer {
    secret: String,
}

impl Signer {
    /// Create a signer keyed with the API secret
    ///
    /// An empty secret is rejected rather than silently signing with an empty
    /// key.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(FoxbitError::Config(
                "API secret is required for request signing".to_string(),
            ));
        }
        Ok(Self { secret })
    }

    /// Lowercase hex HMAC-SHA256 of `message`
    pub fn hmac_hex(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign a request using the current time
    pub fn sign<K, V>(
        &self,
        method: &str,
        path: &str,
        params: &[(K, V)],
        body: Option<&str>,
    ) -> Signature
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.sign_at(Utc::now().timestamp_millis(), method, path, params, body)
    }

    /// Sign a request with an explicit timestamp (milliseconds since epoch)
    pub fn sign_at<K, V>(
        &self,
        timestamp: i64,
        method: &str,
        path: &str,
        params: &[(K, V)],
        body: Option<&str>,
    ) -> Signature
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query_string = encode_query(params);
        let pre_hash = pre_hash(timestamp, method, path, &query_string, body);
        let signature = self.hmac_hex(&pre_hash);
        debug!(%pre_hash, %signature, "request signed");

        Signature {
            timestamp,
            signature,
            query_string,
            pre_hash,
        }
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NO_PARAMS: &[(&str, &str)] = &[];

    #[test]
    fn test_known_answer_vector() {
        let signer = Signer::new("test-secret").unwrap();
        assert_eq!(
            signer.hmac_hex("1700000000000GET/rest/v3/me"),
            "0a715af8366f41474a8eb1b0e37351621e677133daa3a7230729c328e058ba3e"
        );

        let signed = signer.sign_at(1_700_000_000_000, "GET", "/rest/v3/me", NO_PARAMS, None);
        assert_eq!(signed.pre_hash, "1700000000000GET/rest/v3/me");
        assert_eq!(
            signed.signature,
            "0a715af8366f41474a8eb1b0e37351621e677133daa3a7230729c328e058ba3e"
        );
    }

    #[test]
    fn test_query_is_part_of_pre_hash() {
        let signer = Signer::new("test-secret").unwrap();
        let signed = signer.sign_at(
            1_700_000_000_000,
            "GET",
            "/rest/v3/orders",
            &[("market_symbol", "btcbrl"), ("state", "ACTIVE")],
            None,
        );
        assert_eq!(signed.query_string, "market_symbol=btcbrl&state=ACTIVE");
        assert_eq!(
            signed.pre_hash,
            "1700000000000GET/rest/v3/ordersmarket_symbol=btcbrl&state=ACTIVE"
        );
        assert_eq!(
            signed.signature,
            "3e606199f3aaae17575599bcbc6b0b46d30f21bd6246f254ac6456651b264527"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = Signer::new("test-secret").unwrap();
        let body = r#"{"type":"ID","id":"42"}"#;
        let a = signer.sign_at(1_700_000_000_123, "PUT", "/rest/v3/orders/cancel", NO_PARAMS, Some(body));
        let b = signer.sign_at(1_700_000_000_123, "PUT", "/rest/v3/orders/cancel", NO_PARAMS, Some(body));
        assert_eq!(a, b);

        let c = signer.sign_at(1_700_000_000_124, "PUT", "/rest/v3/orders/cancel", NO_PARAMS, Some(body));
        assert_ne!(a.signature, c.signature);
    }

    #[test]
    fn test_body_appended_verbatim() {
        let signer = Signer::new("s").unwrap();
        let body = r#"{"market_symbol":"btcbrl"}"#;
        let signed = signer.sign_at(1, "POST", "/rest/v3/orders", NO_PARAMS, Some(body));
        assert_eq!(signed.pre_hash, format!("1POST/rest/v3/orders{body}"));
    }

    #[test]
    fn test_signature_does_not_leak_secret() {
        let signer = Signer::new("very-secret-value").unwrap();
        let signed = signer.sign_at(1, "GET", "/rest/v3/me", NO_PARAMS, None);
        assert!(!signed.pre_hash.contains("very-secret-value"));
        assert!(!format!("{signed:?}").contains("very-secret-value"));
        assert!(!format!("{signer:?}").contains("very-secret-value"));
        assert_eq!(signed.signature.len(), 64);
        assert_eq!(signed.signature, signed.signature.to_lowercase());
    }

    #[test]
    fn test_empty_secret_fails_fast() {
        let err = Signer::new("").expect_err("empty secret");
        assert!(err.is_config());
    }

    #[test]
    fn test_sign_captures_current_time() {
        let signer = Signer::new("s").unwrap();
        let before = Utc::now().timestamp_millis();
        let signed = signer.sign("GET", "/rest/v3/me", NO_PARAMS, None);
        let after = Utc::now().timestamp_millis();
        assert!(signed.timestamp >= before && signed.timestamp <= after);
        assert!(signed.pre_hash.starts_with(&signed.timestamp.to_string()));
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&[("market_symbol", "btcbrl")], "market_symbol=btcbrl")]
    #[case(&[("state", "ACTIVE"), ("market_symbol", "btcbrl")], "state=ACTIVE&market_symbol=btcbrl")]
    #[case(&[("a b", "x&y=z")], "a+b=x%26y%3Dz")]
    #[case(&[("moeda", "ção")], "moeda=%C3%A7%C3%A3o")]
    fn test_encode_query(#[case] params: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(encode_query(params), expected);
    }

    #[rstest]
    #[case("a b", "x&y=z")]
    #[case("símbolo", "BTC/BRL €")]
    #[case("k=1", "v&2")]
    fn test_encode_query_round_trips(#[case] key: &str, #[case] value: &str) {
        let encoded = encode_query(&[(key, value)]);
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded, vec![(key.to_string(), value.to_string())]);
    }
}
