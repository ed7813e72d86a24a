//! Inbound chat events and the Slack Events API envelope they arrive in.
//!
//! The wire types mirror the JSON Slack posts to the events endpoint. They
//! are converted into an [`InboundEvent`] once at the HTTP boundary so the
//! puzzle core never looks at untyped payloads.

use serde::Deserialize;

use crate::{AppError, Result};

const MESSAGE_TAG: &str = "message";

/// Kind of chat event that was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A message posted to a channel.
    Message,
    /// Any other event type, carrying its wire tag.
    Other(String),
}

impl EventKind {
    /// Classify a Slack event `type` tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == MESSAGE_TAG {
            Self::Message
        } else {
            Self::Other(tag.to_owned())
        }
    }

    /// Wire tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Message => MESSAGE_TAG,
            Self::Other(tag) => tag,
        }
    }
}

/// One received chat event, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Event type.
    pub kind: EventKind,
    /// Raw message text, if the event carries any.
    pub text: Option<String>,
    /// Channel the event originated in.
    pub channel: String,
    /// Author of the event.
    pub user: String,
}

impl InboundEvent {
    /// Build a plain message event.
    #[must_use]
    pub fn message(
        channel: impl Into<String>,
        user: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: EventKind::Message,
            text: Some(text.into()),
            channel: channel.into(),
            user: user.into(),
        }
    }
}

/// Top-level body posted by the Slack Events API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEnvelope {
    /// Endpoint ownership handshake; the challenge must be echoed back.
    UrlVerification {
        /// Opaque value to echo.
        challenge: String,
    },
    /// Wrapper around a subscribed workspace event.
    EventCallback {
        /// Slack-assigned delivery identifier.
        #[serde(default)]
        event_id: Option<String>,
        /// The wrapped event.
        event: SlackEventPayload,
    },
    /// Envelope types this service does not handle (e.g. `app_rate_limited`).
    #[serde(other)]
    Unsupported,
}

impl SlackEnvelope {
    /// Parse a raw request body.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Payload` if the body is not a valid envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// The inner `event` object of an `event_callback` envelope.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SlackEventPayload {
    /// Event type tag, e.g. `message`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Message text.
    #[serde(default)]
    pub text: Option<String>,
    /// Originating channel.
    #[serde(default)]
    pub channel: Option<String>,
    /// Posting user.
    #[serde(default)]
    pub user: Option<String>,
}

impl TryFrom<SlackEventPayload> for InboundEvent {
    type Error = AppError;

    fn try_from(payload: SlackEventPayload) -> Result<Self> {
        let kind = EventKind::from_tag(&payload.kind);
        let channel = match (payload.channel, &kind) {
            (Some(channel), _) => channel,
            (None, EventKind::Message) => {
                return Err(AppError::Payload("message event has no channel".into()));
            }
            (None, EventKind::Other(_)) => String::new(),
        };

        Ok(Self {
            kind,
            text: payload.text,
            channel,
            user: payload.user.unwrap_or_default(),
        })
    }
}
