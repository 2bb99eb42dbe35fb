//! Thin asynchronous client for the forum API.
//!
//! - Only the category listing is consumed, as an opaque JSON document.
//! - No retries, no caching, no timeout; a failure is reported once.

use dioxus::logger::tracing::{debug, info, warn};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_FORUM_BASE_URL: &str = "http://localhost:8080/api/forum/";
/// Overrides [`DEFAULT_FORUM_BASE_URL`] when set.
pub const FORUM_URL_ENV: &str = "FORUM_API_URL";
const USER_AGENT: &str = concat!("tariff-calculator/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ForumClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// `HTTP {code}: {reason}`, or just `HTTP {code}` for a code without a standard reason.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// Connection-level failure; the message is shown as-is.
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct ForumClient {
    http: Client,
    base_url: Url,
}

impl ForumClient {
    pub fn new() -> Result<Self, ForumClientError> {
        Self::with_base_url(&configured_base_url())
    }

    pub fn with_base_url(base: &str) -> Result<Self, ForumClientError> {
        let base_url = Url::parse(&with_trailing_slash(base))?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ForumClientError::Client(err.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn categories_url(&self) -> Result<Url, ForumClientError> {
        Ok(self.base_url.join("categories")?)
    }

    /// `GET {base}/categories`, returned verbatim.
    pub async fn get_categories(&self) -> Result<Value, ForumClientError> {
        let url = self.categories_url()?;
        info!("Fetching forum categories from {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| ForumClientError::Transport(err.to_string()))?;
        let status = response.status();
        info!("Forum categories response: {}", status_text(status));

        let body = response
            .bytes()
            .await
            .map_err(|err| ForumClientError::Transport(err.to_string()))?;
        let payload = interpret_response(status, &body)?;
        debug!("Forum categories payload: {payload}");
        Ok(payload)
    }
}

/// Applies the non-success check and JSON decoding to a raw response.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<Value, ForumClientError> {
    if !status.is_success() {
        return Err(status_error(status));
    }
    decode_body(body)
}

fn status_error(status: StatusCode) -> ForumClientError {
    let error = ForumClientError::Status {
        code: status.as_u16(),
        message: status_text(status),
    };
    warn!("Forum API rejected request: {error}");
    error
}

fn decode_body(body: &[u8]) -> Result<Value, ForumClientError> {
    serde_json::from_slice(body).map_err(|err| ForumClientError::Decode(err.to_string()))
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn configured_base_url() -> String {
    std::env::var(FORUM_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FORUM_BASE_URL.to_string())
}

fn with_trailing_slash(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
