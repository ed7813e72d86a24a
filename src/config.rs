//! Global configuration parsing, validation, and credential loading.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::{AppError, Result};

/// Keychain service name under which Slack secrets are stored.
pub const KEYRING_SERVICE: &str = "connections-scorer";

/// Placeholder substituted with the computed score in the success message.
pub const SCORE_PLACEHOLDER: &str = "{score}";

/// Slack Web API settings.
///
/// Secrets are loaded at runtime via OS keychain or environment variables,
/// never from the TOML config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SlackConfig {
    /// Upper bound on a single `chat.postMessage` call.
    #[serde(default = "default_notify_timeout_seconds")]
    pub notify_timeout_seconds: u64,
    /// Bot user token used for posting messages (populated at runtime).
    #[serde(skip)]
    pub bot_token: String,
    /// Signing secret used to authenticate inbound requests (populated at runtime).
    #[serde(skip)]
    pub signing_secret: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            notify_timeout_seconds: default_notify_timeout_seconds(),
            bot_token: String::new(),
            signing_secret: String::new(),
        }
    }
}

impl SlackConfig {
    /// Outbound notification timeout as a [`Duration`].
    #[must_use]
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_seconds)
    }
}

/// Reply texts posted back to the originating channel.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct MessagesConfig {
    /// Posted when a puzzle share fails tile validation.
    #[serde(default = "default_rejection")]
    pub rejection: String,
    /// Posted with the computed score; must contain `{score}`.
    #[serde(default = "default_success")]
    pub success: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            rejection: default_rejection(),
            success: default_success(),
        }
    }
}

impl MessagesConfig {
    /// Render the success reply for a computed score.
    #[must_use]
    pub fn success_for(&self, score: u32) -> String {
        self.success.replace(SCORE_PLACEHOLDER, &score.to_string())
    }
}

fn default_notify_timeout_seconds() -> u64 {
    20
}

fn default_rejection() -> String {
    "Invalid puzzle share. Report to Jim for his quarterly Ooni cleaning immediately.".into()
}

fn default_success() -> String {
    "Good job! Your score is {score}.".into()
}

fn default_http_host() -> String {
    "127.0.0.1".into()
}

fn default_http_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_max_request_age_seconds() -> u64 {
    300
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Interface the webhook listener binds to.
    #[serde(default = "default_http_host")]
    pub http_host: String,
    /// Port the webhook listener binds to.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Whether inbound requests must carry a valid Slack signature.
    #[serde(default = "default_true")]
    pub verify_signatures: bool,
    /// Maximum accepted skew between the request timestamp and now.
    #[serde(default = "default_max_request_age_seconds")]
    pub max_request_age_seconds: u64,
    /// Slack Web API settings.
    #[serde(default)]
    pub slack: SlackConfig,
    /// Reply texts.
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load Slack secrets from OS keychain with env-var fallback.
    ///
    /// The signing secret is only required when `verify_signatures` is on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required secret is found in neither
    /// the keychain nor the environment.
    pub async fn load_credentials(&mut self) -> Result<()> {
        self.slack.bot_token = load_credential("slack_bot_token", "SLACK_BOT_TOKEN").await?;
        if self.verify_signatures {
            self.slack.signing_secret =
                load_credential("slack_signing_secret", "SLACK_SIGNING_SECRET").await?;
        }
        Ok(())
    }

    /// `host:port` string the webhook listener binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    fn validate(&self) -> Result<()> {
        if self.http_host.trim().is_empty() {
            return Err(AppError::Config("http_host must not be empty".into()));
        }

        if self.max_request_age_seconds == 0 {
            return Err(AppError::Config(
                "max_request_age_seconds must be greater than zero".into(),
            ));
        }

        if self.slack.notify_timeout_seconds == 0 {
            return Err(AppError::Config(
                "slack.notify_timeout_seconds must be greater than zero".into(),
            ));
        }

        if !self.messages.success.contains(SCORE_PLACEHOLDER) {
            return Err(AppError::Config(format!(
                "messages.success must contain the {SCORE_PLACEHOLDER} placeholder"
            )));
        }

        Ok(())
    }
}

/// Load a single credential from OS keychain with env-var fallback.
async fn load_credential(keyring_key: &str, env_key: &str) -> Result<String> {
    let key = keyring_key.to_owned();

    // keyring is synchronous I/O.
    let keychain_result = tokio::task::spawn_blocking(move || {
        keyring::Entry::new(KEYRING_SERVICE, &key).and_then(|entry| entry.get_password())
    })
    .await
    .map_err(|err| AppError::Config(format!("keychain task panicked: {err}")))?;

    match keychain_result {
        Ok(value) if !value.is_empty() => return Ok(value),
        Ok(_) => {
            warn!(key = keyring_key, "keychain entry is empty, trying env var");
        }
        Err(err) => {
            warn!(
                key = keyring_key,
                ?err,
                "keychain lookup failed, trying env var"
            );
        }
    }

    match env::var(env_key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "credential {keyring_key} not found in keychain or {env_key} env var"
        ))),
    }
}
