/*
[INPUT]:  HTTP configuration (base URL, timeouts) and API credentials
[OUTPUT]: Configured reqwest client ready for signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{FoxbitError, Result, Signer};
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

/// Base URL for the Foxbit REST API
pub const DEFAULT_BASE_URL: &str = "https://api.foxbit.com.br";

pub const API_KEY_VAR: &str = "FOXBIT_API_KEY";
pub const API_SECRET_VAR: &str = "FOXBIT_API_SECRET";
pub const BASE_URL_VAR: &str = "FOXBIT_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "FOXBIT_HTTP_TIMEOUT_SECS";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `FOXBIT_API_BASE_URL` and `FOXBIT_HTTP_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Url::parse(base_url.trim()).map_err(|err| {
                FoxbitError::Config(format!("{BASE_URL_VAR} is not a valid URL: {err}"))
            })?;
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    FoxbitError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got {raw:?}"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Credentials for authenticated requests
///
/// The secret is only ever used as the HMAC key and is never sent. Neither
/// value is printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() {
            return Err(FoxbitError::Config("API key is empty".to_string()));
        }
        if api_secret.trim().is_empty() {
            return Err(FoxbitError::Config("API secret is empty".to_string()));
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Load credentials from `FOXBIT_API_KEY` / `FOXBIT_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| FoxbitError::Config(format!("{name} is not set")))
        };
        let api_key = read(API_KEY_VAR)?;
        let api_secret = read(API_SECRET_VAR)?;
        Self::new(api_key, api_secret)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Foxbit REST API
#[derive(Debug)]
pub struct FoxbitClient {
    pub(crate) http_client: Client,
    base_url: String,
    credentials: Credentials,
    pub(crate) signer: Signer,
}

impl FoxbitClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        // No idle connections are kept: every call opens its own connection,
        // which is dropped once the response body has been read.
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        let signer = Signer::new(credentials.api_secret())?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            signer,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }
}
