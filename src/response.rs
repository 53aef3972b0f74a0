//! Response bodies shared by handlers and the error mapping.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body used for errors and confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Message>) {
    (status, Json(Message::new(message)))
}
