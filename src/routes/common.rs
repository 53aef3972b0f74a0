//! Common routes: health, readiness, version.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Readiness of the customer store. `database` is `ok`, `not_configured`
/// (no `DATABASE_URL`) or `unavailable`.
#[derive(Serialize)]
struct ReadyBody {
    ready: bool,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(AppError::DatabaseNotConfigured) => "not_configured",
        Err(e) => {
            tracing::warn!(error = %e, "customer store ping failed");
            "unavailable"
        }
    };
    let ready = database == "ok";
    let status = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(ReadyBody { ready, database }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready (store round trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
