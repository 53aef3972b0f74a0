//! Customer CRUD handlers: create, read, list, update, delete.

use crate::error::AppError;
use crate::model::Customer;
use crate::response;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Non-numeric and zero ids are both "missing". Serial ids start at 1.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    match id_str.parse::<i64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(AppError::BadRequest("id required".into())),
    }
}

fn parse_body(body: &[u8]) -> Result<Customer, AppError> {
    Customer::from_json(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let customer = parse_body(&body)?;
    let id = state.store.create(&customer).await?;
    Ok(response::created(customer.with_id(id)))
}

/// GET /customers/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    // Missing rows and failed reads are both reported as "Data not found".
    let customer = match state.store.get(id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => return Err(AppError::DataNotFound),
        Err(AppError::Db(e)) => {
            tracing::warn!(id, error = %e, "read customer failed");
            return Err(AppError::DataNotFound);
        }
        Err(e) => return Err(e),
    };
    Ok(response::ok(customer))
}

/// GET /customers
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = state.store.list().await?;
    Ok(response::ok(customers))
}

/// PUT /customers/:id. Succeeds whether or not a row matched; the body is
/// echoed back with the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let customer = parse_body(&body)?;
    let affected = state.store.update(id, &customer).await?;
    tracing::debug!(id, affected, "updated customer");
    Ok(response::ok(customer.with_id(id)))
}

/// DELETE /customers/:id. Succeeds whether or not a row matched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let affected = state.store.delete(id).await?;
    tracing::debug!(id, affected, "deleted customer");
    Ok(response::message(StatusCode::OK, "Customer deleted"))
}
