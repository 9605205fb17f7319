use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::api::ApiError;

/// Supported exchanges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeId {
    Upbit,
    Bithumb,
    Binance,
    Bybit,
    Okx,
}

impl ExchangeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Upbit => "upbit",
            ExchangeId::Bithumb => "bithumb",
            ExchangeId::Binance => "binance",
            ExchangeId::Bybit => "bybit",
            ExchangeId::Okx => "okx",
        }
    }

    /// Request-body fields this exchange's credential requires
    pub fn credential_fields(&self) -> &'static [&'static str] {
        match self {
            ExchangeId::Upbit => &["accessKey", "secretKey"],
            ExchangeId::Bithumb => &["connectKey", "secretKey"],
            ExchangeId::Binance | ExchangeId::Bybit => &["apiKey", "secretKey"],
            ExchangeId::Okx => &["apiKey", "secretKey", "passphrase"],
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential material that must never be rendered
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpbitCredential {
    pub access_key: Secret,
    pub secret_key: Secret,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BithumbCredential {
    pub connect_key: Secret,
    pub secret_key: Secret,
}

/// Key/secret pair (Binance, Bybit)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyCredential {
    pub api_key: Secret,
    pub secret_key: Secret,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkxCredential {
    pub api_key: Secret,
    pub secret_key: Secret,
    pub passphrase: Secret,
}

/// Request-scoped credential set, one variant per exchange
#[derive(Debug, Clone)]
pub enum ExchangeCredential {
    Upbit(UpbitCredential),
    Bithumb(BithumbCredential),
    Binance(ApiKeyCredential),
    Bybit(ApiKeyCredential),
    Okx(OkxCredential),
}

impl ExchangeCredential {
    /// Parse a JSON request body into the credential shape `exchange` expects
    ///
    /// The serde error is not surfaced: it may quote the offending value.
    pub fn from_json(exchange: ExchangeId, value: Value) -> Result<Self, ApiError> {
        let parsed = match exchange {
            ExchangeId::Upbit => serde_json::from_value(value).map(ExchangeCredential::Upbit),
            ExchangeId::Bithumb => serde_json::from_value(value).map(ExchangeCredential::Bithumb),
            ExchangeId::Binance => serde_json::from_value(value).map(ExchangeCredential::Binance),
            ExchangeId::Bybit => serde_json::from_value(value).map(ExchangeCredential::Bybit),
            ExchangeId::Okx => serde_json::from_value(value).map(ExchangeCredential::Okx),
        };

        parsed.map_err(|_| {
            ApiError::InvalidCredentials(format!(
                "{} requires string fields: {}",
                exchange,
                exchange.credential_fields().join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exchange_id_deserializes_from_lowercase_name() {
        let id: ExchangeId = serde_json::from_value(json!("bybit")).unwrap();
        assert_eq!(id, ExchangeId::Bybit);
        assert_eq!(id.to_string(), "bybit");
        assert!(serde_json::from_value::<ExchangeId>(json!("kraken")).is_err());
    }

    #[test]
    fn test_parse_okx_credential() {
        let credential = ExchangeCredential::from_json(
            ExchangeId::Okx,
            json!({"apiKey": "k", "secretKey": "s", "passphrase": "p"}),
        )
        .unwrap();

        match credential {
            ExchangeCredential::Okx(okx) => assert_eq!(okx.passphrase.expose(), "p"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_rejected_without_echoing_values() {
        let err = ExchangeCredential::from_json(
            ExchangeId::Bithumb,
            json!({"connectKey": "my-connect-key", "secretKey": 123456}),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("connectKey, secretKey"));
        assert!(!message.contains("my-connect-key"));
        assert!(!message.contains("123456"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credential = ExchangeCredential::Upbit(UpbitCredential {
            access_key: Secret::new("access-abc"),
            secret_key: Secret::new("secret-xyz"),
        });

        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("access-abc"));
        assert!(!rendered.contains("secret-xyz"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
