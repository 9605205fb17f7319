use serde::Deserialize;

use crate::api::normalize::Amount;

/// Bybit v5 response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct BybitResponse {
    #[serde(default)]
    pub result: Option<BybitWalletResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BybitWalletResult {
    #[serde(default)]
    pub list: Vec<BybitWalletAccount>,
}

/// One wallet account (the unified account is the only one requested)
#[derive(Debug, Clone, Deserialize)]
pub struct BybitWalletAccount {
    /// Total equity in USD
    #[serde(rename = "totalEquity", default)]
    pub total_equity: Option<Amount>,

    /// Total wallet balance in USD
    #[serde(rename = "totalWalletBalance", default)]
    pub total_wallet_balance: Option<Amount>,

    /// Total available balance in USD
    #[serde(rename = "totalAvailableBalance", default)]
    pub total_available_balance: Option<Amount>,

    #[serde(default)]
    pub coin: Vec<BybitCoinBalance>,
}

/// Per-coin breakdown of a wallet account
#[derive(Debug, Clone, Deserialize)]
pub struct BybitCoinBalance {
    #[serde(rename = "walletBalance", default)]
    pub wallet_balance: Option<Amount>,
}
