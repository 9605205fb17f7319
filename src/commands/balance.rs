use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::api::BalanceService;
use crate::models::{BalanceResult, ExchangeId};

/// Fetch the normalized balance for one exchange
///
/// Always answers 200 with the balance envelope; failures are reported
/// through `success: false`. The body is read as JSON whatever its content
/// type, and an unreadable body is treated as missing credentials.
pub async fn get_balance(
    State(service): State<BalanceService>,
    Path(exchange): Path<ExchangeId>,
    body: Bytes,
) -> Json<BalanceResult> {
    let credentials = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    Json(service.get_balance_from_json(exchange, credentials).await)
}
