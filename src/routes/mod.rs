//! Router assembly. Every route, including the fallback, sits behind the token check.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::customer_routes;

use crate::middleware::require_token;
use crate::response;
use crate::state::AppState;
use axum::{http::StatusCode, middleware::from_fn_with_state, response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

async fn not_found() -> impl IntoResponse {
    response::message(StatusCode::NOT_FOUND, "Not found")
}

/// Full application router: customer and common routes, 404 fallback,
/// auth middleware and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(customer_routes(state.clone()))
        .merge(common_routes(state.clone()))
        .fallback(not_found)
        .layer(from_fn_with_state(state, require_token))
        .layer(TraceLayer::new_for_http())
}
