//! Server: reads config, bootstraps the `customer` table, serves the API.

use customer_api::{app, connect_lazy, AppConfig, AppState, CustomerStore, PgStore, UnconfiguredStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("customer_api=info")),
        )
        .init();

    let config = AppConfig::from_env();

    let store: Arc<dyn CustomerStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("DATABASE_URL set, initializing database connection");
            let store = PgStore::new(connect_lazy(url, config.max_connections)?);
            // An unusable store is fatal before any traffic is served.
            store.ensure_table().await?;
            tracing::info!("customer table ready");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data requests will fail");
            Arc::new(UnconfiguredStore)
        }
    };

    let state = AppState::new(store, config.auth_token.as_str());
    let app = app(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
