use async_trait::async_trait;
use std::time::Duration;

use super::{
    client::{HttpMethod, RawResponse, SignedRequest, Transport},
    error::ApiError,
};

/// `reqwest`-backed transport, one client shared across all queries
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build().map_err(|e| ApiError::HttpError(e.without_url()))?,
        })
    }
}

// Signed URLs carry signatures in the query string; keep them out of error text
fn map_send_error(err: reqwest::Error) -> ApiError {
    let err = err.without_url();
    if err.is_timeout() {
        ApiError::TimeoutError(err.to_string())
    } else if err.is_connect() {
        ApiError::NetworkError(err.to_string())
    } else {
        ApiError::HttpError(err)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: SignedRequest) -> Result<RawResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => self.http_client.get(&request.url),
            HttpMethod::Post => self.http_client.post(&request.url),
        };

        let mut builder = builder.headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::HttpError(e.without_url()))?;

        Ok(RawResponse { status, body })
    }
}
