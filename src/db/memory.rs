//! In-process [`ItemStore`] holding records in a vector.
//!
//! Mirrors the SQLite store's contract, including the unique-name rule, so
//! services can be exercised without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};
use crate::models::Item;

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    next_id: i32,
}

#[derive(Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().find(|i| i.name == name).cloned())
    }

    async fn insert(
        &self,
        name: &str,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.items.iter().any(|i| i.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        inner.next_id += 1;
        let item = Item {
            id: inner.next_id,
            name: name.to_string(),
            quantity,
            last_recorded_at: recorded_at,
        };
        inner.items.push(item.clone());

        Ok(item)
    }

    async fn update_quantity(
        &self,
        id: i32,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;

        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        item.quantity = quantity;
        item.last_recorded_at = recorded_at;

        Ok(item.clone())
    }

    async fn list_recent(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.read().await;

        let mut items = inner.items.clone();
        items.sort_by(Item::recency_cmp);

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(items.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.items.len() as u64)
    }
}
