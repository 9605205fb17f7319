//! Balance query orchestration: selects the exchange client, signs, sends,
//! normalizes, and folds every outcome into a [`BalanceResult`].

use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    binance::BinanceClient,
    bithumb::BithumbClient,
    bybit::BybitClient,
    client::{ExchangeClient, Transport},
    error::ApiError,
    okx::OkxClient,
    signing::{Clock, SystemClock},
    upbit::UpbitClient,
};
use crate::models::{BalanceResult, ExchangeCredential, ExchangeId};

/// Build the signer/normalizer pair for a credential set
///
/// The credential moves into the client and is dropped with it.
pub fn client_for(credential: ExchangeCredential) -> Box<dyn ExchangeClient> {
    match credential {
        ExchangeCredential::Upbit(credential) => Box::new(UpbitClient::new(credential)),
        ExchangeCredential::Bithumb(credential) => Box::new(BithumbClient::new(credential)),
        ExchangeCredential::Binance(credential) => Box::new(BinanceClient::new(credential)),
        ExchangeCredential::Bybit(credential) => Box::new(BybitClient::new(credential)),
        ExchangeCredential::Okx(credential) => Box::new(OkxClient::new(credential)),
    }
}

/// Stateless balance query service
///
/// Holds only the shared transport and clock; every query is independent.
#[derive(Clone)]
pub struct BalanceService {
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl BalanceService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_clock(transport, Arc::new(SystemClock))
    }

    pub fn with_clock(transport: Arc<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        Self { transport, clock }
    }

    /// Query the balance for a raw JSON credential object
    pub async fn get_balance_from_json(&self, exchange: ExchangeId, credentials: Value) -> BalanceResult {
        match ExchangeCredential::from_json(exchange, credentials) {
            Ok(credential) => self.get_balance(credential).await,
            Err(e) => {
                log::warn!("Rejected {} credentials: {}", exchange, e);
                BalanceResult::failed(&e)
            }
        }
    }

    /// Query the balance for a typed credential set
    pub async fn get_balance(&self, credential: ExchangeCredential) -> BalanceResult {
        let request_id = Uuid::new_v4();
        let client = client_for(credential);
        let exchange = client.exchange_id();

        log::info!("[{}] Fetching {} balance", request_id, exchange);

        match self.query(client.as_ref()).await {
            Ok(balance) => {
                log::debug!("[{}] {} balance: {}", request_id, exchange, balance);
                BalanceResult::ok(balance)
            }
            Err(e) => {
                log::warn!("[{}] {} balance query failed: {}", request_id, exchange, e);
                BalanceResult::failed(&e)
            }
        }
    }

    async fn query(&self, client: &dyn ExchangeClient) -> Result<f64, ApiError> {
        let request = client.sign(self.clock.as_ref())?;
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            let payload = serde_json::from_str::<Value>(&response.body)
                .unwrap_or_else(|_| Value::String(response.body.clone()));
            return Err(ApiError::HttpStatusError {
                status: response.status,
                payload,
            });
        }

        client.normalize(&response)
    }
}
