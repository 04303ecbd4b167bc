//! Bot credentials and polling settings.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_SECS};

/// The credential triple required to run the bot.
///
/// All three values must be present and non-empty before any network or
/// messaging call is attempted; a missing value is fatal at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the homework-review API.
    pub practicum_token: String,

    /// Telegram Bot API token.
    pub telegram_token: String,

    /// Identifier of the chat that receives notifications.
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Creates a credential triple from explicit values.
    #[must_use]
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
        }
    }

    /// Creates credentials from environment variables.
    ///
    /// Expects `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`
    /// to be set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or empty variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = Self::new(
            std::env::var("PRACTICUM_TOKEN").unwrap_or_default(),
            std::env::var("TELEGRAM_TOKEN").unwrap_or_default(),
            std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
        );
        credentials.validate()?;
        Ok(credentials)
    }

    /// Checks that every credential is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] for the first empty value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ];

        for (name, value) in checks {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingEnvVar(name));
            }
        }
        Ok(())
    }
}

/// Tunable bot settings with sane defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Endpoint of the homework-review API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Delay between poll cycles in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Initial poll cursor as a Unix timestamp.
    ///
    /// Zero means "start from the current wall-clock time".
    #[serde(default)]
    pub initial_cursor: i64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_secs: default_poll_interval(),
            initial_cursor: 0,
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            endpoint: std::env::var("HOMEWORK_ENDPOINT")
                .unwrap_or_else(|_| default_endpoint()),
            poll_interval_secs: std::env::var("POLL_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_poll_interval),
            initial_cursor: std::env::var("FROM_DATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.poll_interval_secs, 600);
        assert_eq!(settings.initial_cursor, 0);
    }

    #[test]
    fn test_complete_credentials_validate() {
        let credentials = Credentials::new("practicum", "telegram", "12345");
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn test_empty_practicum_token_rejected() {
        let credentials = Credentials::new("", "telegram", "12345");
        let err = credentials.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar("PRACTICUM_TOKEN")));
    }

    #[test]
    fn test_whitespace_token_rejected() {
        let credentials = Credentials::new("practicum", "   ", "12345");
        let err = credentials.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar("TELEGRAM_TOKEN")));
    }

    #[test]
    fn test_missing_chat_id_rejected() {
        let credentials = Credentials::new("practicum", "telegram", "");
        let err = credentials.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar("TELEGRAM_CHAT_ID")));
    }
}
