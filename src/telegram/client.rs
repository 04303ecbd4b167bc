//! Telegram Bot API client for outbound notifications.
//!
//! Uses the plain HTTP `sendMessage` method; no markup, no delivery
//! confirmation beyond the API's own `ok` flag.
//! Docs: <https://core.telegram.org/bots/api>

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while sending a Telegram message.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Telegram rejected the message ({status}): {description}")]
    Rejected { status: StatusCode, description: String },
}

/// Minimal shape of a Bot API reply.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Notifier that posts plain-text messages to one chat.
pub struct TelegramNotifier {
    /// The underlying HTTP client.
    client: reqwest::Client,

    /// Base URL including the bot token.
    base_url: String,

    /// Destination chat identifier.
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier for the given bot token and chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str, chat_id: impl Into<String>) -> Result<Self, TelegramError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("homework-status-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Telegram notifier ready (token {})", mask_token(token));

        Ok(Self {
            client,
            base_url: format!("https://api.telegram.org/bot{token}"),
            chat_id: chat_id.into(),
        })
    }

    /// Sends a plain-text message to the configured chat.
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::Rejected`] when the Bot API answers with
    /// a non-success status or `ok: false`, and [`TelegramError::Request`]
    /// for transport failures.
    pub async fn send(&self, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/sendMessage", self.base_url);
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let description = response
                .json::<ApiReply>()
                .await
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or_else(|| "no description".to_owned());
            return Err(TelegramError::Rejected { status, description });
        }

        let reply: ApiReply = response.json().await?;
        if !reply.ok {
            return Err(TelegramError::Rejected {
                status,
                description: reply
                    .description
                    .unwrap_or_else(|| "no description".to_owned()),
            });
        }

        info!("Telegram message sent");
        Ok(())
    }
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

/// Masks a bot token for logging (shows last 4 characters).
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 4 {
        format!("***{}", chars[chars.len() - 4..].iter().collect::<String>())
    } else {
        "****".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("123456:ABC-DEF"), "***-DEF");
        assert_eq!(mask_token("abc"), "****");
    }

    #[test]
    fn test_notifier_debug_hides_token() {
        let notifier =
            TelegramNotifier::new("123456:ABC-DEF", "42").expect("notifier should build");
        let rendered = format!("{notifier:?}");
        assert!(rendered.contains("42"));
        assert!(!rendered.contains("ABC-DEF"));
    }

    #[test]
    fn test_api_reply_parses_failure() {
        let reply: ApiReply =
            serde_json::from_str(r#"{"ok": false, "description": "chat not found"}"#)
                .expect("reply should parse");
        assert!(!reply.ok);
        assert_eq!(reply.description.as_deref(), Some("chat not found"));
    }
}
