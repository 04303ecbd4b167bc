//! Configuration module for the homework bot.
//!
//! Handles loading and validation of bot configuration, including the
//! credential triple required before the poll loop may start and the
//! tunable polling settings.

mod settings;

pub use settings::{BotSettings, ConfigError, Credentials};

/// Default endpoint of the homework-review API.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default delay between poll cycles, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
