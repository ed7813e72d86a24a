use std::io::Write;
use std::time::Duration;

use connections_scorer::{config::GlobalConfig, AppError};

fn sample_toml() -> &'static str {
    r#"
http_host = "0.0.0.0"
http_port = 8080
verify_signatures = false
max_request_age_seconds = 60

[slack]
notify_timeout_seconds = 5

[messages]
rejection = "nope"
success = "Score: {score}!"
"#
}

#[test]
fn parses_valid_config() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.http_port, 8080);
    assert!(!config.verify_signatures);
    assert_eq!(config.max_request_age_seconds, 60);
    assert_eq!(config.slack.notify_timeout(), Duration::from_secs(5));
    assert_eq!(config.messages.rejection, "nope");
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
}

#[test]
fn empty_config_uses_defaults() {
    let config = GlobalConfig::from_toml_str("").expect("config parses");

    assert_eq!(config.http_host, "127.0.0.1");
    assert_eq!(config.http_port, 3000);
    assert!(config.verify_signatures);
    assert_eq!(config.max_request_age_seconds, 300);
    assert_eq!(config.slack.notify_timeout_seconds, 20);
    assert!(config.messages.rejection.starts_with("Invalid puzzle share."));
    assert_eq!(config.messages.success_for(42), "Good job! Your score is 42.");
}

#[test]
fn secrets_are_not_read_from_toml() {
    let toml = r#"
[slack]
bot_token = "xoxb-from-file"
signing_secret = "from-file"
"#;
    let config = GlobalConfig::from_toml_str(toml).expect("config parses");
    assert!(config.slack.bot_token.is_empty());
    assert!(config.slack.signing_secret.is_empty());
}

#[test]
fn renders_custom_success_template() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");
    assert_eq!(config.messages.success_for(100), "Score: 100!");
}

#[test]
fn rejects_success_without_placeholder() {
    let toml = r#"
[messages]
success = "Good job!"
"#;
    let err = GlobalConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("{score}"));
}

#[test]
fn rejects_zero_notify_timeout() {
    let toml = r"
[slack]
notify_timeout_seconds = 0
";
    let err = GlobalConfig::from_toml_str(toml).unwrap_err();
    assert!(err.to_string().contains("notify_timeout_seconds"));
}

#[test]
fn rejects_zero_request_age() {
    let err = GlobalConfig::from_toml_str("max_request_age_seconds = 0").unwrap_err();
    assert!(err.to_string().contains("max_request_age_seconds"));
}

#[test]
fn rejects_blank_host() {
    let err = GlobalConfig::from_toml_str("http_host = \"  \"").unwrap_err();
    assert!(err.to_string().contains("http_host"));
}

#[test]
fn rejects_invalid_toml() {
    let err = GlobalConfig::from_toml_str("http_port = \"not a number\"").unwrap_err();
    assert!(err.to_string().starts_with("config: invalid config"));
}

#[test]
fn loads_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(sample_toml().as_bytes()).expect("write config");

    let config = GlobalConfig::load_from_path(file.path()).expect("config loads");
    assert_eq!(config.http_port, 8080);
}

#[test]
fn missing_file_is_config_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = GlobalConfig::load_from_path(temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}
