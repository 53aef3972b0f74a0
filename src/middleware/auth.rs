//! Static shared-token check applied in front of every route.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Rejects with 401 `{"message":"Unauthorized"}` unless the `Authorization`
/// header equals the configured token. On rejection the wrapped handler never runs.
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "auth: pre handler");

    if !token_matches(request.headers(), &state.auth_token) {
        tracing::warn!(path = %request.uri().path(), "auth: rejected request");
        return AppError::Unauthorized.into_response();
    }

    let response = next.run(request).await;

    tracing::debug!(status = %response.status(), "auth: post handler");
    response
}

/// The raw header value is compared as-is; no `Bearer ` prefix is expected.
fn token_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(AUTHORIZATION_HEADER)
        .map(|value| constant_time_eq(value.as_bytes(), expected.as_bytes()))
        .unwrap_or(false)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
