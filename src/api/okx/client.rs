use reqwest::header::{HeaderMap, HeaderValue};

use crate::api::{
    client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest},
    error::ApiError,
    normalize::parse_body,
    signing::{hmac_sha256_base64, iso_timestamp, require_field, sensitive_header, Clock},
};
use crate::models::{ExchangeId, OkxCredential};

use super::{mapper::map_response_to_balance, types::OkxResponse};

const BASE_URL: &str = "https://www.okx.com";
const BALANCE_ENDPOINT: &str = "/api/v5/account/balance";

pub struct OkxClient {
    credential: OkxCredential,
}

impl OkxClient {
    pub fn new(credential: OkxCredential) -> Self {
        Self { credential }
    }

    /// Generate HMAC-SHA256 signature for OKX API
    fn generate_signature(&self, timestamp: &str, method: &str, request_path: &str) -> Result<String, ApiError> {
        let secret_key = require_field("secretKey", self.credential.secret_key.expose())?;

        // Prehash string: timestamp + method + requestPath (GET, no body)
        let prehash = format!("{}{}{}", timestamp, method, request_path);

        // Base64, unlike the hex digests the other exchanges use
        hmac_sha256_base64(secret_key, prehash.as_bytes())
    }

    /// Build authenticated headers for OKX API
    fn build_headers(&self, timestamp: &str, signature: &str) -> Result<HeaderMap, ApiError> {
        let api_key = require_field("apiKey", self.credential.api_key.expose())?;
        let passphrase = require_field("passphrase", self.credential.passphrase.expose())?;

        let mut headers = HeaderMap::new();
        headers.insert("OK-ACCESS-KEY", sensitive_header(api_key, "API key")?);
        headers.insert("OK-ACCESS-SIGN", sensitive_header(signature, "signature")?);
        headers.insert(
            "OK-ACCESS-TIMESTAMP",
            HeaderValue::from_str(timestamp)
                .map_err(|e| ApiError::AuthenticationError(format!("Invalid timestamp: {}", e)))?,
        );
        headers.insert("OK-ACCESS-PASSPHRASE", sensitive_header(passphrase, "passphrase")?);

        Ok(headers)
    }
}

impl ExchangeClient for OkxClient {
    fn exchange_id(&self) -> ExchangeId {
        ExchangeId::Okx
    }

    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError> {
        let timestamp = iso_timestamp(clock);

        let signature = self.generate_signature(&timestamp, "GET", BALANCE_ENDPOINT)?;
        let headers = self.build_headers(&timestamp, &signature)?;

        Ok(SignedRequest {
            method: HttpMethod::Get,
            url: format!("{}{}", BASE_URL, BALANCE_ENDPOINT),
            headers,
            body: None,
        })
    }

    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError> {
        let parsed: OkxResponse = parse_body(response)?;
        Ok(map_response_to_balance(&parsed))
    }
}
