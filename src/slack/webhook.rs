//! HTTP intake for the Slack Events API.
//!
//! Mounts `POST /slack/events` and `GET /health` on an axum router. Event
//! callbacks are acknowledged immediately and processed on a tracked
//! background task, since Slack expects an answer within three seconds and
//! the reply itself may take up to the notifier timeout.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::json;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

use crate::config::GlobalConfig;
use crate::models::event::{InboundEvent, SlackEnvelope};
use crate::notifier::Notifier;
use crate::processor::process_event;
use crate::slack::signature::{self, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::{AppError, Result};

/// Header Slack adds when it re-delivers an event it considers unacknowledged.
pub const RETRY_HEADER: &str = "x-slack-retry-num";

/// Shared, read-only state for the webhook handlers.
pub struct WebhookState {
    /// Loaded configuration, including secrets.
    pub config: Arc<GlobalConfig>,
    /// Reply channel for processed events.
    pub notifier: Arc<dyn Notifier>,
    /// Background processing tasks still in flight.
    pub tasks: TaskTracker,
}

impl WebhookState {
    /// Build state with an empty task tracker.
    #[must_use]
    pub fn new(config: Arc<GlobalConfig>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            notifier,
            tasks: TaskTracker::new(),
        }
    }
}

/// Handler for `GET /health`.
async fn health() -> &'static str {
    "ok"
}

/// Build the router serving the events endpoint and health probe.
#[must_use]
pub fn router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/slack/events", post(slack_events))
        .with_state(state)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn authenticate(config: &GlobalConfig, headers: &HeaderMap, body: &[u8]) -> Result<()> {
    let timestamp = header(headers, TIMESTAMP_HEADER)
        .ok_or_else(|| AppError::Signature(format!("missing {TIMESTAMP_HEADER} header")))?;
    let sig = header(headers, SIGNATURE_HEADER)
        .ok_or_else(|| AppError::Signature(format!("missing {SIGNATURE_HEADER} header")))?;

    signature::verify(
        &config.slack.signing_secret,
        timestamp,
        sig,
        body,
        chrono::Utc::now().timestamp(),
        config.max_request_age_seconds,
    )
}

async fn slack_events(
    State(state): State<Arc<WebhookState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if state.config.verify_signatures {
        if let Err(err) = authenticate(&state.config, &headers, &body) {
            warn!(%err, "rejected unauthenticated slack request");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    let envelope = match SlackEnvelope::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(%err, "malformed slack payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match envelope {
        SlackEnvelope::UrlVerification { challenge } => {
            info!("answering url verification challenge");
            Json(json!({ "challenge": challenge })).into_response()
        }
        SlackEnvelope::EventCallback { event_id, event } => {
            if let Some(retry) = header(&headers, RETRY_HEADER) {
                info!(?event_id, retry, "ignoring slack redelivery");
                return StatusCode::OK.into_response();
            }

            let event = match InboundEvent::try_from(event) {
                Ok(event) => event,
                Err(err) => {
                    warn!(%err, ?event_id, "unusable slack event");
                    return StatusCode::BAD_REQUEST.into_response();
                }
            };

            let task_state = Arc::clone(&state);
            state.tasks.spawn(async move {
                process_event(
                    &event,
                    task_state.notifier.as_ref(),
                    &task_state.config.messages,
                )
                .await;
            });
            StatusCode::OK.into_response()
        }
        SlackEnvelope::Unsupported => {
            info!("ignoring unsupported slack envelope");
            StatusCode::OK.into_response()
        }
    }
}

/// Bind the configured address and serve until `ct` is cancelled.
///
/// # Errors
///
/// Returns `AppError::Io` if the listener cannot be bound or the server fails.
pub async fn serve(state: Arc<WebhookState>, ct: CancellationToken) -> Result<()> {
    let bind = state.config.bind_address();
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|err| AppError::Io(format!("failed to bind {bind}: {err}")))?;
    serve_on(listener, state, ct).await
}

/// Serve on an already-bound listener until `ct` is cancelled, then wait for
/// in-flight event processing to finish.
///
/// # Errors
///
/// Returns `AppError::Io` if the server fails.
pub async fn serve_on(
    listener: TcpListener,
    state: Arc<WebhookState>,
    ct: CancellationToken,
) -> Result<()> {
    let local = listener.local_addr()?;
    info!(%local, "starting slack events listener");

    axum::serve(listener, router(Arc::clone(&state)))
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await
        .map_err(|err| AppError::Io(format!("http server error: {err}")))?;

    state.tasks.close();
    state.tasks.wait().await;
    info!("slack events listener shut down");
    Ok(())
}
