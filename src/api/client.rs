use async_trait::async_trait;
use reqwest::header::HeaderMap;

use super::{error::ApiError, signing::Clock};
use crate::models::ExchangeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Fully signed request, ready to hand to a transport
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: HttpMethod,
    /// Absolute URL including any query string
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Raw provider response (before normalization)
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Core trait that all exchange clients must implement
///
/// Both operations are pure: signing reads only the credentials held by the
/// client and the supplied clock, normalization reads only the response.
pub trait ExchangeClient: Send + Sync {
    /// Get the exchange this client talks to
    fn exchange_id(&self) -> ExchangeId;

    /// Build the signed balance request
    fn sign(&self, clock: &dyn Clock) -> Result<SignedRequest, ApiError>;

    /// Extract the account balance from a successful response
    fn normalize(&self, response: &RawResponse) -> Result<f64, ApiError>;
}

/// Executes signed requests against the network
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: SignedRequest) -> Result<RawResponse, ApiError>;
}
