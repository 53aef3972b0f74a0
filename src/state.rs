//! Shared application state for all routes.

use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide store handle, shared by every request without extra locking.
    pub store: Arc<dyn CustomerStore>,
    pub auth_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>, auth_token: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            auth_token: auth_token.into(),
        }
    }
}
