use super::types::UpbitAccount;
use crate::api::normalize::amount_or_zero;

const BALANCE_CURRENCY: &str = "KRW";

/// Sum of `balance` over every KRW account
pub fn map_accounts_to_balance(accounts: &[UpbitAccount]) -> f64 {
    accounts
        .iter()
        .filter(|account| account.currency.as_deref() == Some(BALANCE_CURRENCY))
        .map(|account| amount_or_zero(account.balance.as_ref()))
        .sum()
}
