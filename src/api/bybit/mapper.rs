use super::types::BybitResponse;
use crate::api::normalize::{amount_or_zero, Amount};

/// Balance of the first wallet account in `result.list`
///
/// Reads the first usable of `totalEquity`, `totalWalletBalance` and
/// `totalAvailableBalance`. When that comes out as 0, the per-coin
/// `walletBalance` values are summed instead.
pub fn map_wallet_to_balance(response: &BybitResponse) -> f64 {
    let Some(account) = response.result.as_ref().and_then(|result| result.list.first()) else {
        return 0.0;
    };

    let headline = [
        &account.total_equity,
        &account.total_wallet_balance,
        &account.total_available_balance,
    ]
    .into_iter()
    .find_map(|amount| amount.as_ref().and_then(Amount::value))
    .unwrap_or(0.0);

    if headline != 0.0 {
        return headline;
    }

    account
        .coin
        .iter()
        .map(|coin| amount_or_zero(coin.wallet_balance.as_ref()))
        .sum()
}
