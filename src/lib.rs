#![forbid(unsafe_code)]

//! Slack bot that validates shared Connections puzzle results and replies
//! with a round-weighted score.

pub mod config;
pub mod errors;
pub mod models;
pub mod notifier;
pub mod processor;
pub mod puzzle;
pub mod slack;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
