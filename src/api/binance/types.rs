use serde::Deserialize;

use crate::api::normalize::Amount;

/// `/api/v3/account` response (fields unrelated to balances are ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceAccount {
    #[serde(default)]
    pub balances: Vec<BinanceBalance>,
}

/// Per-asset balance
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceBalance {
    /// Asset code (e.g., "USDT")
    #[serde(default)]
    pub asset: Option<String>,

    /// Available amount
    #[serde(default)]
    pub free: Option<Amount>,

    /// Amount held by open orders
    #[serde(default)]
    pub locked: Option<Amount>,
}
