use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{BalanceService, HttpTransport};
use crate::commands;
use crate::models::Settings;

/// Build the HTTP router around a balance service
pub fn build_router(service: BalanceService) -> Router {
    Router::new()
        .route("/health", get(commands::health_check))
        .route("/api/{exchange}/balance", post(commands::get_balance))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Bind and serve until the process is stopped
pub async fn start_server(settings: &Settings) -> anyhow::Result<()> {
    let transport = HttpTransport::new(settings.http_timeout)?;
    let app = build_router(BalanceService::new(Arc::new(transport)));

    let bind_addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    log::info!(
        "Balance gateway listening on http://{} ({})",
        bind_addr,
        settings.environment
    );

    axum::serve(listener, app).await?;
    Ok(())
}
