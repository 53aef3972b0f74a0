//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::Message;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    /// Lookup by id found nothing (or the row could not be read).
    /// Still answered with 500: clients of this API treat 500 as "missing".
    #[error("Data not found")]
    DataNotFound,
    #[error("database is not configured (DATABASE_URL unset)")]
    DatabaseNotConfigured,
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::DataNotFound | AppError::DatabaseNotConfigured | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(Message::new(self.to_string()))).into_response()
    }
}
