use serde_json::Value;

use super::types::BithumbResponse;
use crate::api::{error::ApiError, normalize::amount_or_zero};

const SUCCESS_STATUS: &str = "0000";

/// Map a Bithumb balance response body to the KRW total
///
/// The status is read before any typed parsing, so a failure body of any
/// shape is attached to the error untouched.
pub fn map_response_to_balance(payload: &Value) -> Result<f64, ApiError> {
    let status = payload.get("status");
    if status.and_then(Value::as_str) != Some(SUCCESS_STATUS) {
        let code = match status {
            Some(Value::String(code)) => code.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        return Err(ApiError::ExchangeError {
            code,
            payload: payload.clone(),
        });
    }

    let response: BithumbResponse = serde_json::from_value(payload.clone())?;
    let total_krw = response
        .data
        .as_ref()
        .and_then(|data| data.total_krw.as_ref());

    Ok(amount_or_zero(total_krw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expect_exchange_error(payload: Value) -> (String, Value) {
        match map_response_to_balance(&payload).unwrap_err() {
            ApiError::ExchangeError { code, payload } => (code, payload),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_success_status_reads_total_krw() {
        let payload = json!({"status": "0000", "data": {"total_krw": "5000", "in_use_krw": "0"}});
        assert_eq!(map_response_to_balance(&payload).unwrap(), 5000.0);
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        assert_eq!(map_response_to_balance(&json!({"status": "0000", "data": {}})).unwrap(), 0.0);
        assert_eq!(map_response_to_balance(&json!({"status": "0000"})).unwrap(), 0.0);
    }

    #[test]
    fn test_error_status_keeps_raw_payload() {
        let payload = json!({"status": "5100", "message": "Bad Request.(Auth Data)"});
        let (code, attached) = expect_exchange_error(payload.clone());
        assert_eq!(code, "5100");
        assert_eq!(attached, payload);
    }

    #[test]
    fn test_error_status_with_untyped_data_keeps_raw_payload() {
        let payload = json!({"status": "5600", "data": "Please try again"});
        let (code, attached) = expect_exchange_error(payload.clone());
        assert_eq!(code, "5600");
        assert_eq!(attached, payload);
    }

    #[test]
    fn test_numeric_status_is_failure() {
        let payload = json!({"status": 5100, "message": "Bad Request"});
        let (code, attached) = expect_exchange_error(payload.clone());
        assert_eq!(code, "5100");
        assert_eq!(attached, payload);
    }

    #[test]
    fn test_missing_status_is_failure() {
        let (code, _) = expect_exchange_error(json!({"data": {"total_krw": "1"}}));
        assert_eq!(code, "");
    }
}
