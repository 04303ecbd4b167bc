//! Standalone one-shot homework checker.
//!
//! Performs a single fetch-validate-format cycle against the homework
//! API and prints the resulting notification text without sending
//! anything to Telegram. Useful for verifying credentials and seeing
//! the current review status from the command line.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

// Import from the main crate
use homework_status_bot::api::{NO_HOMEWORK_MESSAGE, PracticumClient, check_response, parse_status};
use homework_status_bot::config::{BotSettings, Credentials};

/// One-shot homework review status checker.
#[derive(Parser, Debug)]
#[command(name = "check_homeworks")]
#[command(about = "Fetches and prints the latest homework review status")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Unix timestamp to query from (defaults to FROM_DATE or "now").
    #[arg(short, long)]
    from_date: Option<i64>,

    /// Print the raw JSON response as well.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        eprintln!("Note: could not load .env file ({}): {e}", args.env_file);
    }

    match check(&args).await {
        Ok(text) => {
            println!("✓ {text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one fetch-validate-format cycle.
async fn check(args: &Args) -> Result<String> {
    let credentials =
        Credentials::from_env().context("Failed to load bot credentials from environment")?;
    let settings = BotSettings::from_env_with_defaults();

    let api = PracticumClient::new(&settings.endpoint, &credentials.practicum_token)
        .context("Failed to build homework API client")?;

    let cursor = args.from_date.unwrap_or(settings.initial_cursor);
    let response = api
        .fetch(cursor)
        .await
        .context("Homework API request failed")?;

    if args.verbose {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    let homeworks = check_response(&response).context("Unexpected response shape")?;

    match homeworks.first() {
        Some(homework) => Ok(parse_status(homework).context("Malformed homework record")?),
        None => Ok(NO_HOMEWORK_MESSAGE.to_owned()),
    }
}
