use super::types::OkxResponse;
use crate::api::normalize::amount_or_zero;

/// `data[0].totalEq`, 0 when missing
pub fn map_response_to_balance(response: &OkxResponse) -> f64 {
    amount_or_zero(response.data.first().and_then(|balance| balance.total_eq.as_ref()))
}
