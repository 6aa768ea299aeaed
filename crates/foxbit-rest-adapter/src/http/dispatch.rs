/*
[INPUT]:  Verb, path, ordered query parameters and raw body
[OUTPUT]: Signed HTTP call and the raw response body
[POS]:    HTTP layer - request dispatch (URL assembly, auth headers, send)
[UPDATE]: When changing auth headers, supported verbs or URL layout
*/

use crate::http::{FoxbitClient, FoxbitError, Result, Signature};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

pub const HEADER_ACCESS_KEY: &str = "X-FB-ACCESS-KEY";
pub const HEADER_ACCESS_TIMESTAMP: &str = "X-FB-ACCESS-TIMESTAMP";
pub const HEADER_ACCESS_SIGNATURE: &str = "X-FB-ACCESS-SIGNATURE";

/// HTTP verbs the REST API is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
}

impl Verb {
    /// Uppercase wire name, as it appears in the pre-hash
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
        }
    }

    pub fn carries_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }

    fn method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
        }
    }
}

impl FromStr for Verb {
    type Err = FoxbitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            _ => Err(FoxbitError::InvalidArgument(format!(
                "Unsupported HTTP method: {s}"
            ))),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request to be signed and dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub verb: Verb,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

impl SignedRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Verb::Put, path)
    }

    /// Append a query parameter; order of calls is the order on the wire
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, raw: impl Into<String>) -> Self {
        self.body = Some(raw.into());
        self
    }

    pub fn json_body<T: Serialize>(self, value: &T) -> Result<Self> {
        let raw = serde_json::to_string(value)?;
        Ok(self.body(raw))
    }
}

/// Raw response returned by the API
///
/// The dispatcher never inspects the status; callers decide what a non-2xx
/// means for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx response into [`FoxbitError::Api`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FoxbitError::api_error(self.status, self.body))
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Pick a single top-level field out of a JSON object body
    pub fn field(&self, name: &str) -> Result<serde_json::Value> {
        let value: serde_json::Value = self.json()?;
        value
            .get(name)
            .filter(|field| !field.is_null())
            .cloned()
            .ok_or_else(|| FoxbitError::InvalidResponse(format!("missing field `{name}`")))
    }
}

impl FoxbitClient {
    /// Sign and send a request given its verb as text
    ///
    /// Unsupported verbs are rejected before anything goes on the network.
    pub async fn request<K, V>(
        &self,
        method: &str,
        path: &str,
        params: &[(K, V)],
        body: Option<&str>,
    ) -> Result<ApiResponse>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let verb: Verb = method.parse()?;
        let request = SignedRequest {
            verb,
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
            body: body.map(str::to_string),
        };
        self.execute(request).await
    }

    /// Sign and send a request, returning the body whatever the status
    pub async fn execute(&self, request: SignedRequest) -> Result<ApiResponse> {
        info!(method = %request.verb, path = %request.path, "requesting");
        self.check_path(&request.path)?;

        // GET never sends an entity, so it is not hashed either.
        let body = request
            .body
            .as_deref()
            .filter(|_| request.verb.carries_body());

        let signed = self.signer.sign(
            request.verb.as_str(),
            &request.path,
            request.params.as_slice(),
            body,
        );
        let url = self.signed_url(&signed, &request.path)?;
        debug!(%url, "dispatching");

        let mut builder = self
            .http_client
            .request(request.verb.method(), url)
            .header(HEADER_ACCESS_KEY, self.api_key())
            .header(HEADER_ACCESS_TIMESTAMP, signed.timestamp.to_string())
            .header(HEADER_ACCESS_SIGNATURE, &signed.signature)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(raw) = body {
            builder = builder.body(raw.to_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), body = %text, "response received");

        Ok(ApiResponse::new(status, text))
    }

    /// Reject paths the URL parser would rewrite (percent-encoding, dot
    /// segments, backslashes): the pre-hash must see the path that is sent.
    pub(crate) fn check_path(&self, path: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(FoxbitError::InvalidArgument(format!(
                "path must start with '/': {path:?}"
            )));
        }
        if path.contains(['?', '#']) {
            return Err(FoxbitError::InvalidArgument(format!(
                "path must not carry a query or fragment: {path:?}"
            )));
        }
        let url = Url::parse(&format!("{}{}", self.base_url(), path))?;
        if !url.path().ends_with(path) {
            return Err(FoxbitError::InvalidArgument(format!(
                "path {path:?} is not sent verbatim (becomes {:?})",
                url.path()
            )));
        }
        Ok(())
    }

    /// Base URL + path, with `?query` only when the signed query is non-empty
    pub(crate) fn signed_url(&self, signed: &Signature, path: &str) -> Result<Url> {
        let mut url = format!("{}{}", self.base_url(), path);
        if !signed.query_string.is_empty() {
            url.push('?');
            url.push_str(&signed.query_string);
        }
        Ok(Url::parse(&url)?)
    }
}
