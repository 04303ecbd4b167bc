//! Homework Status Bot - Main Entry Point
//!
//! Polls the Practicum homework-review API on a fixed interval and
//! forwards review status changes to a Telegram chat.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use homework_status_bot::api::PracticumClient;
use homework_status_bot::config::{BotSettings, Credentials};
use homework_status_bot::poller::HomeworkPoller;
use homework_status_bot::telegram::{TelegramNotifier, mask_token};

/// Telegram bot for homework review status notifications.
#[derive(Parser, Debug)]
#[command(name = "homework_bot")]
#[command(about = "Watch Practicum homework reviews and notify a Telegram chat")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Poll interval in seconds (overrides POLL_INTERVAL).
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // The credential check must pass before any network call is made.
    let credentials =
        Credentials::from_env().context("Failed to load bot credentials from environment")?;

    let mut settings = BotSettings::from_env_with_defaults();
    if let Some(secs) = args.interval {
        settings.poll_interval_secs = secs;
    }

    info!(
        "Polling {} every {} seconds (bot token {})",
        settings.endpoint,
        settings.poll_interval_secs,
        mask_token(&credentials.telegram_token)
    );

    let api = PracticumClient::new(&settings.endpoint, &credentials.practicum_token)
        .context("Failed to build homework API client")?;

    let notifier =
        TelegramNotifier::new(&credentials.telegram_token, &credentials.telegram_chat_id)
            .context("Failed to build Telegram notifier")?;

    let poller = HomeworkPoller::new(api, notifier, &settings);

    info!("Bot is running. Use Ctrl+C to stop.");

    tokio::select! {
        () = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
