//! HTTP client for the homework-review API.

use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while querying the homework API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Homework API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Homework API returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("Homework API response is not JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Client for the homework-status endpoint.
///
/// Issues one GET per poll cycle with an `Authorization: OAuth <token>`
/// header and a `from_date` query parameter.
pub struct PracticumClient {
    /// The underlying HTTP client.
    client: reqwest::Client,

    /// Endpoint URL of the homework-status API.
    endpoint: String,

    /// OAuth token used for the authorization header.
    token: String,
}

impl PracticumClient {
    /// Creates a client for the given endpoint and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("homework-status-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// Fetches homework statuses reviewed since the given cursor.
    ///
    /// A cursor of zero (or below) is replaced by the current wall-clock
    /// time, matching the API's expectation of a Unix timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-success HTTP status,
    /// [`ApiError::InvalidJson`] when the body is not JSON, and
    /// [`ApiError::Request`] for transport failures. A non-JSON body is
    /// always surfaced, never swallowed.
    pub async fn fetch(&self, cursor: i64) -> Result<Value, ApiError> {
        let from_date = if cursor > 0 { cursor } else { Utc::now().timestamp() };

        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                detail: truncate_for_log(&detail, 200),
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;

        info!("Homework API answered ({} bytes)", body.len());
        Ok(value)
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Truncates a string for logging purposes.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("Hello", 10), "Hello");
        assert_eq!(truncate_for_log("Hello, World!", 5), "Hello...");
    }

    #[test]
    fn test_client_debug_hides_token() {
        let client = PracticumClient::new("https://example.com/api/", "secret")
            .expect("client should build");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("example.com"));
        assert!(!rendered.contains("secret"));
    }
}
