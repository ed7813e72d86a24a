//! Slack request signing (`v0` scheme).
//!
//! Slack signs every request with
//! `v0=hex(HMAC-SHA256(signing_secret, "v0:{timestamp}:{body}"))` and sends
//! the result in `X-Slack-Signature` alongside `X-Slack-Request-Timestamp`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request timestamp (Unix seconds).
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

const VERSION: &str = "v0";

fn mac_for(secret: &str, timestamp: &str, body: &[u8]) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| AppError::Signature(format!("invalid signing key: {err}")))?;
    mac.update(VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    Ok(mac)
}

/// Compute the `v0=<hex>` signature Slack would send for `body`.
///
/// # Errors
///
/// Returns `AppError::Signature` if the HMAC cannot be keyed.
pub fn sign(secret: &str, timestamp: &str, body: &[u8]) -> Result<String> {
    let digest = mac_for(secret, timestamp, body)?.finalize().into_bytes();
    Ok(format!("{VERSION}={}", hex::encode(digest)))
}

/// Authenticate a request.
///
/// `now` is the current Unix time in seconds; requests whose timestamp is
/// more than `max_age_seconds` away from it are rejected as replays.
///
/// # Errors
///
/// Returns `AppError::Signature` if the timestamp is malformed or stale, or
/// if the signature does not match. The comparison is constant-time.
pub fn verify(
    secret: &str,
    timestamp: &str,
    signature: &str,
    body: &[u8],
    now: i64,
    max_age_seconds: u64,
) -> Result<()> {
    let sent_at: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| AppError::Signature(format!("malformed timestamp {timestamp:?}")))?;
    if now.abs_diff(sent_at) > max_age_seconds {
        return Err(AppError::Signature("request timestamp outside allowed window".into()));
    }

    let hex_digest = signature
        .strip_prefix(VERSION)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| AppError::Signature("unsupported signature version".into()))?;
    let expected = hex::decode(hex_digest)
        .map_err(|_| AppError::Signature("signature is not valid hex".into()))?;

    mac_for(secret, timestamp, body)?
        .verify_slice(&expected)
        .map_err(|_| AppError::Signature("signature mismatch".into()))
}
