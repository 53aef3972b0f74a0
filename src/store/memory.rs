//! In-process store with the same semantics as the Postgres table: serial ids
//! from 1, no existence checks on update/delete.

use crate::error::AppError;
use crate::model::Customer;
use crate::store::CustomerStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Customer>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn ensure_table(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, customer: &Customer) -> Result<i64, AppError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, customer.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, customer: &Customer) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = customer.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.inner.lock().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str) -> Customer {
        Customer {
            id: 0,
            name: name.into(),
            email: format!("{}@x.com", name),
            status: "active".into(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_serial_from_one() {
        let store = MemoryStore::new();
        assert_eq!(store.create(&customer("a")).await.unwrap(), 1);
        assert_eq!(store.create(&customer("b")).await.unwrap(), 2);
        store.delete(2).await.unwrap();
        assert_eq!(store.create(&customer("c")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_rows_affected() {
        let store = MemoryStore::new();
        let id = store.create(&customer("a")).await.unwrap();
        assert_eq!(store.update(id, &customer("z")).await.unwrap(), 1);
        assert_eq!(store.get(id).await.unwrap().map(|c| c.name), Some("z".to_string()));
        assert_eq!(store.update(99, &customer("z")).await.unwrap(), 0);
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
