use serde::Deserialize;

use crate::api::normalize::Amount;

/// Bithumb API response wrapper (read only once `status` is "0000")
#[derive(Debug, Clone, Deserialize)]
pub struct BithumbResponse {
    #[serde(default)]
    pub data: Option<BithumbBalanceData>,
}

/// Balance payload of `/info/balance`
#[derive(Debug, Clone, Deserialize)]
pub struct BithumbBalanceData {
    /// KRW held in total (available + in use)
    #[serde(default)]
    pub total_krw: Option<Amount>,
}
