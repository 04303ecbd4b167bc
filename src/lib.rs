//! Homework Status Bot Library
//!
//! A Telegram bot that watches the review status of Practicum homework
//! submissions.
//!
//! This crate provides the core functionality for:
//! - Loading and validating bot credentials and settings
//! - Querying the homework-review API for status updates
//! - Translating raw review statuses into human-readable verdicts
//! - Delivering notifications to a Telegram chat

pub mod api;
pub mod config;
pub mod poller;
pub mod telegram;
