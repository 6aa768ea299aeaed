/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for foxbit-rest-adapter tests

use foxbit_rest_adapter::{
    ClientConfig, Credentials, FoxbitClient, Signer,
    http::{HEADER_ACCESS_KEY, HEADER_ACCESS_SIGNATURE, HEADER_ACCESS_TIMESTAMP},
};
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("test credentials")
}

/// Client pointed at `base_url` with the test credentials
pub fn client_for(base_url: &str) -> FoxbitClient {
    FoxbitClient::with_config(
        test_credentials(),
        ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        },
    )
    .expect("client init")
}

/// Matches only requests whose signature header verifies against what
/// actually arrived on the wire (timestamp header, method, path, raw query,
/// raw body).
pub struct SignedWith {
    signer: Signer,
    api_key: String,
}

pub fn signed_with_test_credentials() -> SignedWith {
    SignedWith {
        signer: Signer::new(TEST_API_SECRET).expect("signer"),
        api_key: TEST_API_KEY.to_string(),
    }
}

impl Match for SignedWith {
    fn matches(&self, request: &Request) -> bool {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let (Some(key), Some(timestamp), Some(signature)) = (
            header(HEADER_ACCESS_KEY),
            header(HEADER_ACCESS_TIMESTAMP),
            header(HEADER_ACCESS_SIGNATURE),
        ) else {
            return false;
        };
        if key != self.api_key || timestamp.parse::<i64>().is_err() {
            return false;
        }

        let pre_hash = format!(
            "{}{}{}{}{}",
            timestamp,
            request.method.as_str(),
            request.url.path(),
            request.url.query().unwrap_or_default(),
            String::from_utf8_lossy(&request.body),
        );
        self.signer.hmac_hex(&pre_hash) == signature
    }
}
