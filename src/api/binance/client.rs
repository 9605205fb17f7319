use reqwest::header::HeaderMap;

use crate::api::{
    client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest},
    error::ApiError,
    normalize::parse_body,
    signing::{hmac_sha256_hex, millis_nonce, require_field, sensitive_header, Clock},
};
use crate::models::{ApiKeyCredential, ExchangeId};

use super::{mapper::map_account_to_balance, types::BinanceAccount};

const BASE_URL: &str = "https://api.binance.com";
const ACCOUNT_ENDPOINT: &str = "/api/v3/account";

pub struct BinanceClient {
    credential: ApiKeyCredential,
}

impl BinanceClient {
    pub fn new(credential: ApiKeyCredential) -> Self {
        Self { credential }
    }

    /// Query string with the HMAC-SHA256 (hex) signature appended
    fn signed_query(&self, timestamp: &str) -> Result<String, ApiError> {
        let secret_key = require_field("secretKey", self.credential.secret_key.expose())?;
        let query_string = format!("timestamp={}", timestamp);

        let signature = hmac_sha256_hex(secret_key, query_string.as_bytes())?;

        Ok(format!("{}&signature={}", query_string, signature))
    }
}

impl ExchangeClient for BinanceClient {
    fn exchange_id(&self) -> ExchangeId {
        ExchangeId::Binance
    }

    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError> {
        let api_key = require_field("apiKey", self.credential.api_key.expose())?;
        let query = self.signed_query(&millis_nonce(clock))?;

        let mut headers = HeaderMap::new();
        headers.insert("X-MBX-APIKEY", sensitive_header(api_key, "API key")?);

        Ok(SignedRequest {
            method: HttpMethod::Get,
            url: format!("{}{}?{}", BASE_URL, ACCOUNT_ENDPOINT, query),
            headers,
            body: None,
        })
    }

    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError> {
        let account: BinanceAccount = parse_body(response)?;
        Ok(map_account_to_balance(&account))
    }
}
