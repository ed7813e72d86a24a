//! Slack bridge layer: event intake, request authentication, and replies.

pub mod client;
pub mod signature;
pub mod webhook;
