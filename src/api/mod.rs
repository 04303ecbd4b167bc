//! Homework-review API module.
//!
//! Provides the HTTP client for the homework-status endpoint, structural
//! validation of its responses, and the translation of raw review
//! statuses into notification text.

mod client;
mod response;
mod status;

pub use client::{ApiError, PracticumClient};
pub use response::{ShapeError, advance_cursor, check_response};
pub use status::{NO_HOMEWORK_MESSAGE, parse_status};
