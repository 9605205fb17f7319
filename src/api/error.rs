use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Invalid API response: {0}")]
    ParseError(String),

    #[error("Exchange API error: {code}")]
    ExchangeError { code: String, payload: Value },

    #[error("Exchange returned HTTP {status}")]
    HttpStatusError { status: u16, payload: Value },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout: {0}")]
    TimeoutError(String),
}

impl ApiError {
    /// Payload placed in the `error` field of a failed balance result.
    ///
    /// Provider bodies are passed through verbatim; everything else is the
    /// error's display text.
    pub fn to_payload(&self) -> Value {
        match self {
            ApiError::ExchangeError { payload, .. } | ApiError::HttpStatusError { payload, .. } => {
                payload.clone()
            }
            other => Value::String(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ParseError(err.to_string())
    }
}
