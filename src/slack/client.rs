//! Slack Web API client used to post score replies.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use slack_morphism::prelude::{
    SlackApiChatPostMessageRequest, SlackApiToken, SlackApiTokenType, SlackApiTokenValue,
    SlackChannelId, SlackClient, SlackClientHyperHttpsConnector, SlackMessageContent,
};
use tracing::info;

use crate::notifier::Notifier;
use crate::{config::SlackConfig, AppError, Result};

/// Plain-text message to be delivered via `chat.postMessage`.
#[derive(Debug, Clone)]
pub struct SlackMessage {
    /// Target channel.
    pub channel: SlackChannelId,
    /// Message body.
    pub text: String,
}

impl SlackMessage {
    /// Create a plain-text message for a channel.
    #[must_use]
    pub fn plain(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: SlackChannelId(channel.into()),
            text: text.into(),
        }
    }

    fn into_request(self) -> SlackApiChatPostMessageRequest {
        SlackApiChatPostMessageRequest::new(
            self.channel,
            SlackMessageContent::new().with_text(self.text),
        )
    }
}

/// [`Notifier`] that posts through the Slack Web API with a bounded timeout.
pub struct SlackNotifier {
    client: Arc<SlackClient<SlackClientHyperHttpsConnector>>,
    bot_token: SlackApiToken,
    timeout: Duration,
}

impl SlackNotifier {
    /// Build a notifier from the loaded Slack settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Slack` if the HTTPS connector cannot be created.
    pub fn new(config: &SlackConfig) -> Result<Self> {
        let connector = SlackClientHyperHttpsConnector::new()
            .map_err(|err| AppError::Slack(format!("failed to init slack connector: {err}")))?;
        let bot_token = SlackApiToken {
            token_value: SlackApiTokenValue(config.bot_token.clone()),
            cookie: None,
            team_id: None,
            scope: None,
            token_type: Some(SlackApiTokenType::Bot),
        };

        Ok(Self {
            client: Arc::new(SlackClient::new(connector)),
            bot_token,
            timeout: config.notify_timeout(),
        })
    }

    /// Post a message, giving up after the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Slack` if the API call fails or times out.
    pub async fn post(&self, message: SlackMessage) -> Result<()> {
        let request = message.into_request();
        let session = self.client.open_session(&self.bot_token);

        match tokio::time::timeout(self.timeout, session.chat_post_message(&request)).await {
            Ok(Ok(_)) => {
                info!(channel = %request.channel, "sent slack message");
                Ok(())
            }
            Ok(Err(err)) => Err(AppError::Slack(format!("chat.postMessage failed: {err}"))),
            Err(_) => Err(AppError::Slack(format!(
                "chat.postMessage timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

impl Notifier for SlackNotifier {
    fn send<'a>(
        &'a self,
        channel_id: &'a str,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.post(SlackMessage::plain(channel_id, text)))
    }
}
