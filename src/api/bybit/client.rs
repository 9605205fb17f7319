use reqwest::header::{HeaderMap, HeaderValue};

use crate::api::{
    client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest},
    error::ApiError,
    normalize::parse_body,
    signing::{hmac_sha256_hex, millis_nonce, require_field, sensitive_header, Clock},
};
use crate::models::{ApiKeyCredential, ExchangeId};

use super::{mapper::map_wallet_to_balance, types::BybitResponse};

const BASE_URL: &str = "https://api.bybit.com";
const WALLET_BALANCE_ENDPOINT: &str = "/v5/account/wallet-balance";
const QUERY_STRING: &str = "accountType=UNIFIED";
const RECV_WINDOW: &str = "5000";

pub struct BybitClient {
    credential: ApiKeyCredential,
}

impl BybitClient {
    pub fn new(credential: ApiKeyCredential) -> Self {
        Self { credential }
    }

    /// HMAC-SHA256 (hex) over `timestamp + apiKey + recvWindow + queryString`
    fn generate_signature(&self, api_key: &str, timestamp: &str) -> Result<String, ApiError> {
        let secret_key = require_field("secretKey", self.credential.secret_key.expose())?;
        let prehash = format!("{}{}{}{}", timestamp, api_key, RECV_WINDOW, QUERY_STRING);

        hmac_sha256_hex(secret_key, prehash.as_bytes())
    }

    fn build_headers(&self, api_key: &str, timestamp: &str, signature: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("X-BAPI-API-KEY", sensitive_header(api_key, "API key")?);
        headers.insert(
            "X-BAPI-TIMESTAMP",
            HeaderValue::from_str(timestamp)
                .map_err(|e| ApiError::AuthenticationError(format!("Invalid timestamp: {}", e)))?,
        );
        headers.insert("X-BAPI-SIGN", sensitive_header(signature, "signature")?);
        headers.insert("X-BAPI-RECV-WINDOW", HeaderValue::from_static(RECV_WINDOW));

        Ok(headers)
    }
}

impl ExchangeClient for BybitClient {
    fn exchange_id(&self) -> ExchangeId {
        ExchangeId::Bybit
    }

    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError> {
        let api_key = require_field("apiKey", self.credential.api_key.expose())?;
        let timestamp = millis_nonce(clock);

        let signature = self.generate_signature(api_key, &timestamp)?;
        let headers = self.build_headers(api_key, &timestamp, &signature)?;

        Ok(SignedRequest {
            method: HttpMethod::Get,
            url: format!("{}{}?{}", BASE_URL, WALLET_BALANCE_ENDPOINT, QUERY_STRING),
            headers,
            body: None,
        })
    }

    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError> {
        let parsed: BybitResponse = parse_body(response)?;
        Ok(map_wallet_to_balance(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::signing::FixedClock;
    use crate::models::Secret;

    #[test]
    fn test_sign_matches_reference_signature() {
        let client = BybitClient::new(ApiKeyCredential {
            api_key: Secret::new("bybit-key"),
            secret_key: Secret::new("bybit-secret"),
        });
        let request = client.sign(&FixedClock::from_millis(1704067200000)).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://api.bybit.com/v5/account/wallet-balance?accountType=UNIFIED"
        );
        assert_eq!(request.headers.get("X-BAPI-API-KEY").unwrap(), "bybit-key");
        assert_eq!(request.headers.get("X-BAPI-TIMESTAMP").unwrap(), "1704067200000");
        assert_eq!(request.headers.get("X-BAPI-RECV-WINDOW").unwrap(), "5000");
        assert_eq!(
            request.headers.get("X-BAPI-SIGN").unwrap(),
            "3ba97bb47393c6f6abc0ec0fff01be194600a93180838404c6465a68a036e198"
        );
    }
}
