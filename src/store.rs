//! Persistence gateway for the `customer` table.
//!
//! Handlers talk to a [`CustomerStore`]; the server wires in [`PgStore`] when
//! `DATABASE_URL` is set and [`UnconfiguredStore`] when it is not. Tests use
//! [`MemoryStore`].

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{connect_lazy, PgStore, CREATE_CUSTOMER_TABLE};

use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Create the `customer` table if missing. Idempotent.
    async fn ensure_table(&self) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Insert name/email/status and return the id the store assigned.
    async fn create(&self, customer: &Customer) -> Result<i64, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// All rows in store order. No ordering or paging.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// Overwrite name/email/status for `id`. Returns rows affected (0 when the id is absent).
    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, AppError>;

    /// Returns rows affected (0 when the id is absent).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}

/// Store used when no database is configured: the process starts, and every
/// data operation fails at request time.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredStore;

#[async_trait]
impl CustomerStore for UnconfiguredStore {
    async fn ensure_table(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn create(&self, _customer: &Customer) -> Result<i64, AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn get(&self, _id: i64) -> Result<Option<Customer>, AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn update(&self, _id: i64, _customer: &Customer) -> Result<u64, AppError> {
        Err(AppError::DatabaseNotConfigured)
    }

    async fn delete(&self, _id: i64) -> Result<u64, AppError> {
        Err(AppError::DatabaseNotConfigured)
    }
}
