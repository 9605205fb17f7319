//! Helpers shared by the per-exchange response mappers.

use serde::{de::DeserializeOwned, Deserialize};

use super::{client::RawResponse, error::ApiError};

const BODY_PREVIEW_CHARS: usize = 200;

/// Numeric field that exchanges send either as a JSON string or a number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
    /// Booleans, objects and arrays; never a usable value
    Other(serde_json::Value),
}

impl Amount {
    /// Parsed value; `None` for empty or unparseable text
    pub fn value(&self) -> Option<f64> {
        let parsed = match self {
            Amount::Text(text) => text.trim().parse::<f64>().ok(),
            Amount::Number(number) => Some(*number),
            Amount::Other(_) => None,
        };
        parsed.filter(|v| v.is_finite())
    }
}

/// Value of an optional amount, 0 when absent or unparseable
pub fn amount_or_zero(amount: Option<&Amount>) -> f64 {
    amount.and_then(Amount::value).unwrap_or(0.0)
}

/// Parse a response body as JSON of the expected shape
pub fn parse_body<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        let preview: String = response.body.chars().take(BODY_PREVIEW_CHARS).collect();
        ApiError::ParseError(format!("Failed to parse response: {} - Body: {}", e, preview))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_accepts_strings_and_numbers() {
        let text: Amount = serde_json::from_str("\"100.5\"").unwrap();
        let number: Amount = serde_json::from_str("7.25").unwrap();
        assert_eq!(text.value(), Some(100.5));
        assert_eq!(number.value(), Some(7.25));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert_eq!(Amount::Text(String::new()).value(), None);
        assert_eq!(Amount::Text("abc".to_string()).value(), None);
        assert_eq!(Amount::Text("NaN".to_string()).value(), None);
        assert_eq!(amount_or_zero(None), 0.0);
    }

    #[test]
    fn test_amount_of_unexpected_type_is_unusable() {
        let flag: Amount = serde_json::from_str("true").unwrap();
        let object: Amount = serde_json::from_str(r#"{"value": "1"}"#).unwrap();
        assert_eq!(flag.value(), None);
        assert_eq!(object.value(), None);
        assert_eq!(amount_or_zero(Some(&flag)), 0.0);
    }

    #[test]
    fn test_parse_body_reports_html() {
        let response = RawResponse {
            status: 200,
            body: "<html><body>502 Bad Gateway</body></html>".to_string(),
        };
        let err = parse_body::<serde_json::Value>(&response).unwrap_err();
        assert!(matches!(err, ApiError::ParseError(ref msg) if msg.contains("502 Bad Gateway")));
    }

    #[test]
    fn test_parse_body_quotes_bounded_preview() {
        let response = RawResponse {
            status: 200,
            body: format!("<html>{}</html>", "x".repeat(500)),
        };
        match parse_body::<serde_json::Value>(&response).unwrap_err() {
            ApiError::ParseError(msg) => {
                let quoted = msg.split(" - Body: ").nth(1).unwrap();
                assert_eq!(quoted.chars().count(), BODY_PREVIEW_CHARS);
                assert!(quoted.starts_with("<html>"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
