use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::api::{
    client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest},
    error::ApiError,
    normalize::parse_body,
    signing::{hmac_sha512_hex, millis_nonce, require_field, sensitive_header, Clock},
};
use crate::models::{BithumbCredential, ExchangeId};

use super::mapper::map_response_to_balance;

const BASE_URL: &str = "https://api.bithumb.com";
const BALANCE_ENDPOINT: &str = "/info/balance";
/// Queried order currency; `total_krw` is reported regardless of the code
const QUERY_CURRENCY: &str = "BTC";

pub struct BithumbClient {
    credential: BithumbCredential,
}

impl BithumbClient {
    pub fn new(credential: BithumbCredential) -> Self {
        Self { credential }
    }

    /// HMAC-SHA512 (hex) over `endpoint NUL query NUL nonce`
    fn generate_signature(&self, query_string: &str, nonce: &str) -> Result<String, ApiError> {
        let secret_key = require_field("secretKey", self.credential.secret_key.expose())?;
        let payload = format!("{}\0{}\0{}", BALANCE_ENDPOINT, query_string, nonce);

        hmac_sha512_hex(secret_key, payload.as_bytes())
    }

    fn build_headers(&self, signature: &str, nonce: &str) -> Result<HeaderMap, ApiError> {
        let connect_key = require_field("connectKey", self.credential.connect_key.expose())?;

        let mut headers = HeaderMap::new();
        headers.insert("Api-Key", sensitive_header(connect_key, "connect key")?);
        headers.insert("Api-Sign", sensitive_header(signature, "signature")?);
        headers.insert(
            "Api-Nonce",
            HeaderValue::from_str(nonce)
                .map_err(|e| ApiError::AuthenticationError(format!("Invalid nonce: {}", e)))?,
        );
        headers.insert(
            "Content-Type",
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        Ok(headers)
    }
}

impl ExchangeClient for BithumbClient {
    fn exchange_id(&self) -> ExchangeId {
        ExchangeId::Bithumb
    }

    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError> {
        let nonce = millis_nonce(clock);
        let query_string = format!("currency={}", QUERY_CURRENCY);

        let signature = self.generate_signature(&query_string, &nonce)?;
        let headers = self.build_headers(&signature, &nonce)?;

        Ok(SignedRequest {
            method: HttpMethod::Post,
            url: format!("{}{}", BASE_URL, BALANCE_ENDPOINT),
            headers,
            body: Some(query_string),
        })
    }

    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError> {
        let payload: Value = parse_body(response)?;
        map_response_to_balance(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::signing::FixedClock;
    use crate::models::Secret;

    fn client() -> BithumbClient {
        BithumbClient::new(BithumbCredential {
            connect_key: Secret::new("bithumb-connect"),
            secret_key: Secret::new("bithumb-secret"),
        })
    }

    #[test]
    fn test_sign_matches_reference_signature() {
        let request = client().sign(&FixedClock::from_millis(1704067200000)).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.bithumb.com/info/balance");
        assert_eq!(request.body.as_deref(), Some("currency=BTC"));
        assert_eq!(request.headers.get("Api-Key").unwrap(), "bithumb-connect");
        assert_eq!(request.headers.get("Api-Nonce").unwrap(), "1704067200000");
        assert_eq!(
            request.headers.get("Content-Type").unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            request.headers.get("Api-Sign").unwrap(),
            "9c2415fc9565b60b2bc3a7607766b508a2b079830c9f19a8f61720233a0893c1\
             29ebd966c9d5fb9f5110afcf999a8f491c7e066f7f71bcb2240324bb1c84788f"
        );
    }

    #[test]
    fn test_normalize_failure_status() {
        let response = RawResponse {
            status: 200,
            body: r#"{"status":"5100","message":"Bad Request.(Auth Data)"}"#.to_string(),
        };
        assert!(matches!(
            client().normalize(&response),
            Err(ApiError::ExchangeError { .. })
        ));
    }

    #[tokio::test]
    async fn test_failure_body_reaches_envelope_verbatim() {
        use crate::api::{BalanceService, Transport};
        use async_trait::async_trait;
        use std::sync::Arc;

        const FAILURE_BODY: &str = r#"{"status":"5600","data":"Please try again"}"#;

        struct FailureTransport;

        #[async_trait]
        impl Transport for FailureTransport {
            async fn execute(&self, _request: SignedRequest) -> Result<RawResponse, ApiError> {
                Ok(RawResponse {
                    status: 200,
                    body: FAILURE_BODY.to_string(),
                })
            }
        }

        let service = BalanceService::new(Arc::new(FailureTransport));
        let result = service
            .get_balance_from_json(
                ExchangeId::Bithumb,
                serde_json::json!({"connectKey": "c", "secretKey": "s"}),
            )
            .await;

        assert!(!result.success);
        assert_eq!(result.balance, 0.0);
        assert_eq!(
            result.error,
            Some(serde_json::from_str::<Value>(FAILURE_BODY).unwrap())
        );
    }

    #[test]
    fn test_normalize_success() {
        let response = RawResponse {
            status: 200,
            body: r#"{"status":"0000","data":{"total_krw":"5000","total_btc":"0.1"}}"#.to_string(),
        };
        assert_eq!(client().normalize(&response).unwrap(), 5000.0);
    }
}
