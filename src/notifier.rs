//! Outbound notification abstraction.
//!
//! The [`Notifier`] trait decouples event processing from the chat
//! platform used to post replies, so the processor can be driven by a
//! recording double in tests and by [`SlackNotifier`] in production.
//!
//! [`SlackNotifier`]: crate::slack::client::SlackNotifier

use std::future::Future;
use std::pin::Pin;

use crate::Result;

/// Delivers a plain-text reply to a channel.
pub trait Notifier: Send + Sync {
    /// Post `text` to `channel_id`. Called at most once per processed event
    /// and never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Slack`](crate::AppError::Slack) if delivery fails
    /// or times out.
    fn send<'a>(
        &'a self,
        channel_id: &'a str,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
