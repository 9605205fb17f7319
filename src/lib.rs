pub mod api;
pub mod commands;
pub mod models;
pub mod server;

pub use api::{ApiError, BalanceService};
pub use models::{BalanceResult, ExchangeCredential, ExchangeId, Settings};

/// Load settings from the environment and serve the gateway
pub async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    server::start_server(&settings).await
}
