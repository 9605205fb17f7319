use reqwest::header::HeaderMap;

use crate::api::{
    client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest},
    error::ApiError,
    normalize::parse_body,
    signing::{jwt_hs256, millis_nonce, require_field, sensitive_header, Clock},
};
use crate::models::{ExchangeId, UpbitCredential};

use super::{
    mapper::map_accounts_to_balance,
    types::{UpbitAccount, UpbitTokenClaims},
};

const BASE_URL: &str = "https://api.upbit.com";
const ACCOUNTS_ENDPOINT: &str = "/v1/accounts";

pub struct UpbitClient {
    credential: UpbitCredential,
}

impl UpbitClient {
    pub fn new(credential: UpbitCredential) -> Self {
        Self { credential }
    }

    /// HS256 JWT over `{access_key, nonce}`, keyed with the secret key
    fn generate_token(&self, nonce: String) -> Result<String, ApiError> {
        let access_key = require_field("accessKey", self.credential.access_key.expose())?;
        let secret_key = require_field("secretKey", self.credential.secret_key.expose())?;

        jwt_hs256(secret_key, &UpbitTokenClaims { access_key, nonce })
    }
}

impl ExchangeClient for UpbitClient {
    fn exchange_id(&self) -> ExchangeId {
        ExchangeId::Upbit
    }

    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError> {
        let token = self.generate_token(millis_nonce(clock))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            sensitive_header(&format!("Bearer {}", token), "authorization token")?,
        );

        Ok(SignedRequest {
            method: HttpMethod::Get,
            url: format!("{}{}", BASE_URL, ACCOUNTS_ENDPOINT),
            headers,
            body: None,
        })
    }

    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError> {
        let accounts: Vec<UpbitAccount> = parse_body(response)?;
        Ok(map_accounts_to_balance(&accounts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::signing::FixedClock;
    use crate::models::Secret;

    fn client(access_key: &str, secret_key: &str) -> UpbitClient {
        UpbitClient::new(UpbitCredential {
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
        })
    }

    #[test]
    fn test_sign_builds_bearer_jwt() {
        let request = client("upbit-access", "upbit-secret")
            .sign(&FixedClock::from_millis(1704067200000))
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.upbit.com/v1/accounts");
        assert!(request.body.is_none());
        assert_eq!(
            request.headers.get("Authorization").unwrap().to_str().unwrap(),
            "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
             eyJhY2Nlc3Nfa2V5IjoidXBiaXQtYWNjZXNzIiwibm9uY2UiOiIxNzA0MDY3MjAwMDAwIn0.\
             Zd37pjgrYdfkCtXh5P125-GwyM7zoSDLL7u3jPHbSSc"
        );
    }

    #[test]
    fn test_sign_is_deterministic_for_fixed_clock() {
        let clock = FixedClock::from_millis(1704067200000);
        let upbit = client("upbit-access", "upbit-secret");
        let first = upbit.sign(&clock).unwrap();
        let second = upbit.sign(&clock).unwrap();
        assert_eq!(first.headers.get("Authorization"), second.headers.get("Authorization"));
    }

    #[test]
    fn test_sign_rejects_blank_secret() {
        let err = client("upbit-access", "")
            .sign(&FixedClock::from_millis(1704067200000))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials(_)));
    }

    #[test]
    fn test_normalize_rejects_non_array_body() {
        let response = RawResponse {
            status: 200,
            body: r#"{"error": {"name": "invalid_query_payload"}}"#.to_string(),
        };
        assert!(client("a", "b").normalize(&response).is_err());
    }
}
