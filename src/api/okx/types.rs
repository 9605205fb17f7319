use serde::Deserialize;

use crate::api::normalize::Amount;

/// OKX v5 response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct OkxResponse {
    #[serde(default)]
    pub data: Vec<OkxAccountBalance>,
}

/// Trading account balance summary
#[derive(Debug, Clone, Deserialize)]
pub struct OkxAccountBalance {
    /// Total equity in USD
    #[serde(rename = "totalEq", default)]
    pub total_eq: Option<Amount>,
}
