#![forbid(unsafe_code)]

//! `connections-scorer`: Slack events webhook that scores puzzle shares.
//!
//! Bootstraps configuration and credentials, then serves the Slack Events
//! API endpoint until Ctrl-C or SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use connections_scorer::config::GlobalConfig;
use connections_scorer::notifier::Notifier;
use connections_scorer::slack::client::SlackNotifier;
use connections_scorer::slack::webhook::{self, WebhookState};
use connections_scorer::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "connections-scorer", about = "Scores Connections puzzle shares posted to Slack", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Override the listener host from the config file.
    #[arg(long)]
    host: Option<String>,

    /// Override the listener port from the config file.
    #[arg(long)]
    port: Option<u16>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("connections-scorer bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = GlobalConfig::load_from_path(&args.config)?;
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }

    config.load_credentials().await?;
    if !config.verify_signatures {
        tracing::warn!("request signature verification is disabled");
    }

    let config = Arc::new(config);
    info!(bind = %config.bind_address(), "configuration loaded");

    // ── Build collaborators ─────────────────────────────
    let notifier: Arc<dyn Notifier> = Arc::new(SlackNotifier::new(&config.slack).map_err(|err| {
        error!(%err, "slack client init failed");
        err
    })?);
    let state = Arc::new(WebhookState::new(Arc::clone(&config), notifier));

    // ── Serve until shutdown ────────────────────────────
    let ct = CancellationToken::new();
    let signal_ct = ct.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received");
        signal_ct.cancel();
    });

    webhook::serve(state, ct).await?;

    info!("connections-scorer shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
