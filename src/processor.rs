//! Per-event pipeline: detect, validate, score, notify.
//!
//! Each call is independent and holds no state between events. Delivery
//! failures are logged and reported in the returned [`Outcome`]; they never
//! propagate to the caller.

use tracing::{info, info_span, warn, Instrument};

use crate::config::MessagesConfig;
use crate::models::event::InboundEvent;
use crate::notifier::Notifier;
use crate::puzzle::{
    calculate_score, extract_puzzle_number, is_puzzle_message, is_valid_score_message, tile_count,
};

/// What happened to one inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a puzzle share; nothing was posted.
    Ignored,
    /// Puzzle share with a malformed grid; a rejection was attempted.
    Rejected {
        /// Whether the notifier accepted the rejection.
        delivered: bool,
    },
    /// Well-formed share; the score was computed and posted.
    Scored {
        /// Computed score.
        score: u32,
        /// Whether the notifier accepted the score reply.
        delivered: bool,
    },
}

/// Run one event through the pipeline.
pub async fn process_event(
    event: &InboundEvent,
    notifier: &dyn Notifier,
    messages: &MessagesConfig,
) -> Outcome {
    let span = info_span!(
        "process_event",
        kind = event.kind.as_str(),
        channel = %event.channel,
        user = %event.user,
    );
    run(event, notifier, messages).instrument(span).await
}

async fn run(event: &InboundEvent, notifier: &dyn Notifier, messages: &MessagesConfig) -> Outcome {
    info!("received event");

    if !is_puzzle_message(event) {
        info!("not identified as a puzzle message");
        return Outcome::Ignored;
    }

    let text = event.text.as_deref().unwrap_or_default();
    let puzzle_number = extract_puzzle_number(text);
    info!(?puzzle_number, "identified as a puzzle message");

    if !is_valid_score_message(text) {
        warn!(
            user = %event.user,
            tiles = tile_count(text),
            text,
            "invalid puzzle share"
        );
        let delivered = deliver(notifier, &event.channel, &messages.rejection).await;
        return Outcome::Rejected { delivered };
    }

    let score = calculate_score(text);
    info!(score, ?puzzle_number, "calculated score");

    let delivered = deliver(notifier, &event.channel, &messages.success_for(score)).await;
    Outcome::Scored { score, delivered }
}

async fn deliver(notifier: &dyn Notifier, channel: &str, text: &str) -> bool {
    match notifier.send(channel, text).await {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, channel, "failed to deliver reply");
            false
        }
    }
}
