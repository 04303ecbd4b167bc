//! Homework polling module.
//!
//! Drives the fetch → validate → format → notify cycle on a fixed
//! interval and keeps the loop-local notification state.

mod runner;
mod state;

pub use runner::{CycleError, HomeworkPoller};
pub use state::LastNotified;
