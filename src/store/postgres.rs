//! PostgreSQL implementation over a shared `PgPool`.

use crate::error::AppError;
use crate::model::Customer;
use crate::store::CustomerStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub const CREATE_CUSTOMER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customer (
        id SERIAL PRIMARY KEY,
        name TEXT,
        email TEXT,
        status TEXT
    )
"#;

/// Build a pool without opening a connection. Only a malformed URL fails here;
/// an unreachable server shows up on first use (the table bootstrap).
pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgStore {
    async fn ensure_table(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_CUSTOMER_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, customer: &Customer) -> Result<i64, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO customer (name, email, status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(i64::from(id))
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, status FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, Customer>("SELECT id, name, email, status FROM customer")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE customer SET name = $2, email = $3, status = $4 WHERE id = $1")
            .bind(id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.status)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
