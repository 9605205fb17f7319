use serde::{Deserialize, Serialize};

use crate::api::normalize::Amount;

/// JWT claims for Upbit private endpoints
#[derive(Debug, Clone, Serialize)]
pub struct UpbitTokenClaims<'a> {
    pub access_key: &'a str,
    /// Millisecond epoch
    pub nonce: String,
}

/// Upbit account record (one per held currency)
#[derive(Debug, Clone, Deserialize)]
pub struct UpbitAccount {
    /// Currency code (e.g., "KRW", "BTC")
    #[serde(default)]
    pub currency: Option<String>,

    /// Available balance
    #[serde(default)]
    pub balance: Option<Amount>,
}
