use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ApiError;

/// Uniform balance envelope returned for every exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub success: bool,
    /// Never negative; 0 whenever `success` is false
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl BalanceResult {
    pub fn ok(balance: f64) -> Self {
        // NaN, infinities and negative sums all collapse to 0
        let balance = if balance.is_finite() && balance > 0.0 { balance } else { 0.0 };

        Self {
            success: true,
            balance,
            error: None,
        }
    }

    pub fn failed(error: &ApiError) -> Self {
        Self {
            success: false,
            balance: 0.0,
            error: Some(error.to_payload()),
        }
    }
}
