//! Homework poller runner.
//!
//! Each cycle follows a fixed sequence:
//! 1. Fetch homework statuses from the API using the current cursor
//! 2. Validate the response shape and take the newest record
//! 3. Format it into notification text (or the no-homework literal)
//! 4. Send the text if it differs from the last delivered one
//! 5. Advance the cursor from the server's `current_date`
//!
//! Any cycle error is reported to the chat as a diagnostic prefixed
//! "Program failure:" and the loop continues after the regular sleep;
//! once past the startup credential check the process never exits due
//! to a runtime error. Diagnostics are sent every failing cycle and do
//! not participate in duplicate suppression.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error, info};

use super::LastNotified;
use crate::api::{
    ApiError, NO_HOMEWORK_MESSAGE, PracticumClient, ShapeError, advance_cursor, check_response,
    parse_status,
};
use crate::config::BotSettings;
use crate::telegram::{TelegramError, TelegramNotifier};

/// Tagged failure of a single poll cycle.
///
/// Replaces catch-all exception handling with an explicit result: the
/// runner matches on the variant to decide how to report and always
/// continues the loop.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Http(#[from] ApiError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Telegram(#[from] TelegramError),
}

/// Polls the homework API and forwards status changes to Telegram.
pub struct HomeworkPoller {
    /// Client for the homework-status endpoint.
    api: PracticumClient,

    /// Notifier for the destination chat.
    notifier: TelegramNotifier,

    /// Delay between poll cycles.
    poll_interval: Duration,

    /// Lower bound for the next query window (Unix timestamp).
    cursor: i64,

    /// Duplicate-suppression state.
    last_notified: LastNotified,
}

impl HomeworkPoller {
    /// Creates a poller from its collaborators and settings.
    #[must_use]
    pub fn new(api: PracticumClient, notifier: TelegramNotifier, settings: &BotSettings) -> Self {
        Self {
            api,
            notifier,
            poll_interval: Duration::from_secs(settings.poll_interval_secs),
            cursor: resolve_cursor(settings.initial_cursor),
            last_notified: LastNotified::new(),
        }
    }

    /// Runs the poll loop forever.
    ///
    /// The only suspension point is the fixed sleep between cycles;
    /// cancellation happens by dropping the future (the binary selects
    /// against Ctrl+C).
    pub async fn run(mut self) {
        info!(
            "Homework poller started (interval {} seconds)",
            self.poll_interval.as_secs()
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Executes one cycle and reports any failure to the chat.
    async fn tick(&mut self) {
        match self.run_cycle().await {
            Ok(()) => debug!("Poll cycle completed"),
            Err(e) => {
                error!("Poll cycle failed: {}", e);

                let diagnostic = diagnostic_for(&e);
                if let Err(send_err) = self.notifier.send(&diagnostic).await {
                    // Nothing left to report to; the log entry has to do.
                    error!("Failed to deliver diagnostic: {}", send_err);
                }
            }
        }
    }

    /// Fetch, validate, format and notify once.
    ///
    /// The cursor and the last-notified state advance only when the
    /// whole cycle succeeds, so a failed cycle re-queries the same
    /// window after the sleep.
    async fn run_cycle(&mut self) -> Result<(), CycleError> {
        let response = self.api.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;

        let notification = match homeworks.first() {
            Some(homework) => parse_status(homework)?,
            None => NO_HOMEWORK_MESSAGE.to_owned(),
        };

        if self.last_notified.should_send(&notification) {
            self.notifier.send(&notification).await?;
            self.last_notified.mark_sent(&notification);
        } else {
            debug!("Review status unchanged, notification suppressed");
        }

        self.cursor = advance_cursor(&response, self.cursor);
        Ok(())
    }
}

/// Resolves the configured initial cursor once at startup.
///
/// Zero (or below) means "start from now". Pinning the timestamp here
/// keeps the query window fixed across failed cycles; resolving it per
/// request would shift the window forward on every retry and could skip
/// a review landing between two failures.
fn resolve_cursor(initial: i64) -> i64 {
    if initial > 0 { initial } else { Utc::now().timestamp() }
}

/// Formats the chat diagnostic for a failed cycle.
///
/// Exactly one such message goes out per failing cycle; it bypasses
/// duplicate suppression and never touches the cursor.
fn diagnostic_for(error: &CycleError) -> String {
    format!("Program failure: {error}")
}

impl std::fmt::Debug for HomeworkPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeworkPoller")
            .field("poll_interval", &self.poll_interval)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
