#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use customer_api::{app, AppState, CustomerStore, MemoryStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TOKEN: &str = "token2019";

pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone() as Arc<dyn CustomerStore>, TOKEN);
    (app(state), store)
}

pub fn app_with_store(store: Arc<dyn CustomerStore>) -> Router {
    app(AppState::new(store, TOKEN))
}

/// Send one request through the router with a JSON content type on any body.
/// Non-JSON or empty response bodies come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    send_with_content_type(app, method, uri, token, body, Some("application/json")).await
}

pub async fn send_with_content_type(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    let request = match body {
        Some(body) => {
            if let Some(content_type) = content_type {
                builder = builder.header("Content-Type", content_type);
            }
            builder.body(Body::from(body.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
