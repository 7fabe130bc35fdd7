//! [`ItemStore`]-backed implementation of the `InventoryService` trait.

use crate::constants::limits::LATEST_ITEMS;
use crate::db::ItemStore;
use crate::models::Item;
use crate::services::inventory_service::{
    InventoryError, InventoryService, ItemPage, QuantityAdded, RecordOutcome,
};
use crate::validation::{ItemInput, validate_item};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

const QUANTITY_OVERFLOW: &str = "Quantity total exceeds the supported maximum";

pub struct DefaultInventoryService {
    store: Arc<dyn ItemStore>,
    latest_limit: u64,
}

impl DefaultInventoryService {
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            latest_limit: LATEST_ITEMS,
        }
    }

    #[must_use]
    pub fn with_latest_limit(mut self, limit: u64) -> Self {
        self.latest_limit = limit.max(1);
        self
    }

    fn checked_input(name: &str, quantity: i64) -> Result<ItemInput, InventoryError> {
        validate_item(name, quantity).map_err(InventoryError::Validation)
    }

    async fn increment(&self, existing: &Item, quantity: i64) -> Result<Item, InventoryError> {
        let total = existing
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::validation(QUANTITY_OVERFLOW))?;

        let updated = self
            .store
            .update_quantity(existing.id, total, Utc::now())
            .await?;

        Ok(updated)
    }
}

#[async_trait]
impl InventoryService for DefaultInventoryService {
    async fn record_item(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<RecordOutcome, InventoryError> {
        let input = Self::checked_input(name, quantity)?;

        let outcome = match self.store.find_by_name(&input.name).await? {
            Some(existing) => RecordOutcome {
                item: self.increment(&existing, input.quantity).await?,
                was_created: false,
            },
            None => RecordOutcome {
                item: self
                    .store
                    .insert(&input.name, input.quantity, Utc::now())
                    .await?,
                was_created: true,
            },
        };

        let label = if outcome.was_created {
            "created"
        } else {
            "incremented"
        };
        metrics::counter!("inventory_items_recorded_total", "outcome" => label).increment(1);

        info!(
            id = outcome.item.id,
            name = %outcome.item.name,
            added = input.quantity,
            total = outcome.item.quantity,
            outcome = label,
            "Recorded item"
        );

        Ok(outcome)
    }

    async fn add_quantity_to_existing(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<QuantityAdded, InventoryError> {
        let input = Self::checked_input(name, quantity)?;

        let existing = self
            .store
            .find_by_name(&input.name)
            .await?
            .ok_or_else(|| InventoryError::NotFound(input.name.clone()))?;

        let item = self.increment(&existing, input.quantity).await?;

        info!(
            id = item.id,
            name = %item.name,
            before = existing.quantity,
            total = item.quantity,
            "Added quantity to item"
        );

        Ok(QuantityAdded {
            item,
            quantity_before: existing.quantity,
            quantity_added: input.quantity,
        })
    }

    async fn get_latest(&self) -> Result<Vec<Item>, InventoryError> {
        Ok(self.store.list_recent(0, self.latest_limit).await?)
    }

    async fn get_all_paged(&self, page: u64, limit: u64) -> Result<ItemPage, InventoryError> {
        if page < 1 {
            return Err(InventoryError::validation("Page must be at least 1"));
        }
        if limit < 1 {
            return Err(InventoryError::validation("Limit must be at least 1"));
        }

        let offset = (page - 1).saturating_mul(limit);
        let total_items = self.store.count().await?;
        let items = if offset < total_items {
            self.store.list_recent(offset, limit).await?
        } else {
            Vec::new()
        };

        debug!(page, limit, total_items, "Listed items");

        Ok(ItemPage {
            items,
            page,
            limit,
            total_items,
            total_pages: total_items.div_ceil(limit),
        })
    }

    async fn get_by_name(&self, name: &str) -> Result<Item, InventoryError> {
        let trimmed = name.trim();

        self.store
            .find_by_name(trimmed)
            .await?
            .ok_or_else(|| InventoryError::NotFound(trimmed.to_string()))
    }
}
