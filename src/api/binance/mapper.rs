use super::types::BinanceAccount;
use crate::api::normalize::amount_or_zero;

const BALANCE_ASSET: &str = "USDT";

/// Sum of `free + locked` over every USDT balance
pub fn map_account_to_balance(account: &BinanceAccount) -> f64 {
    account
        .balances
        .iter()
        .filter(|balance| balance.asset.as_deref() == Some(BALANCE_ASSET))
        .map(|balance| amount_or_zero(balance.free.as_ref()) + amount_or_zero(balance.locked.as_ref()))
        .sum()
}
