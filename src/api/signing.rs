//! Shared signing primitives used by every exchange signer.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use reqwest::header::HeaderValue;
use serde::Serialize;
use sha2::{Sha256, Sha512};

use super::error::ApiError;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

const JWT_HS256_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Source of the current time for nonces and timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn from_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Millisecond epoch as a decimal string
pub fn millis_nonce(clock: &dyn Clock) -> String {
    clock.now().timestamp_millis().to_string()
}

/// ISO-8601 UTC instant with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`
pub fn iso_timestamp(clock: &dyn Clock) -> String {
    clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn hmac_sha256(secret: &str, message: &[u8]) -> Result<Vec<u8>, ApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::AuthenticationError(format!("Invalid secret key: {}", e)))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

pub fn hmac_sha256_hex(secret: &str, message: &[u8]) -> Result<String, ApiError> {
    hmac_sha256(secret, message).map(hex::encode)
}

pub fn hmac_sha256_base64(secret: &str, message: &[u8]) -> Result<String, ApiError> {
    hmac_sha256(secret, message).map(|digest| general_purpose::STANDARD.encode(digest))
}

pub fn hmac_sha512_hex(secret: &str, message: &[u8]) -> Result<String, ApiError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::AuthenticationError(format!("Invalid secret key: {}", e)))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Compact HS256 JWT over `claims`
pub fn jwt_hs256<T: Serialize>(secret: &str, claims: &T) -> Result<String, ApiError> {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(JWT_HS256_HEADER);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{}.{}", header, payload);

    let signature = general_purpose::URL_SAFE_NO_PAD.encode(hmac_sha256(secret, signing_input.as_bytes())?);

    Ok(format!("{}.{}", signing_input, signature))
}

/// Reject blank credential fields before anything is signed
pub fn require_field<'a>(name: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidCredentials(format!("`{}` must not be empty", name)));
    }
    Ok(value)
}

/// Header value that must not show up in `Debug` output
pub fn sensitive_header(value: &str, what: &str) -> Result<HeaderValue, ApiError> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| ApiError::AuthenticationError(format!("Invalid {}: {}", what, e)))?;
    header.set_sensitive(true);
    Ok(header)
}
