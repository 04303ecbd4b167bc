//! Telegram notification module.
//!
//! Delivers plain-text notifications to a configured chat through the
//! Telegram Bot API.

mod client;

pub use client::{TelegramError, TelegramNotifier, mask_token};
