use std::sync::Arc;

use anyhow::Context;

use user_service::{app, config::Config, store::PgUserStore, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    let store = PgUserStore::connect(&config)
        .await
        .context("failed to connect to Postgres")?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");

    let app = app(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
