//! Domain service for recording inventory intake.
//!
//! Recording a name either creates a record or adds to the quantity of the
//! record with the same trimmed name. Reads are ordered most-recent-first.

use crate::db::StoreError;
use crate::models::Item;
use thiserror::Error;

/// Result of [`InventoryService::record_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub item: Item,
    pub was_created: bool,
}

/// Result of [`InventoryService::add_quantity_to_existing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityAdded {
    pub item: Item,
    pub quantity_before: i64,
    pub quantity_added: i64,
}

/// One page of the most-recent-first listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Errors specific to inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// One message per violated rule.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(_) => {
                Self::validation(crate::constants::messages::DUPLICATE_NAME)
            }
            StoreError::RecordNotFound(id) => Self::NotFound(format!("id {id}")),
            StoreError::Database(msg) => Self::Database(msg),
        }
    }
}

/// Domain service trait for inventory intake.
#[async_trait::async_trait]
pub trait InventoryService: Send + Sync {
    /// Creates the record for `name` or adds `quantity` to it, refreshing its
    /// touch time either way.
    async fn record_item(&self, name: &str, quantity: i64)
    -> Result<RecordOutcome, InventoryError>;

    /// Adds to an existing record only. Never creates one.
    async fn add_quantity_to_existing(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<QuantityAdded, InventoryError>;

    /// The most recently touched records, newest first.
    async fn get_latest(&self) -> Result<Vec<Item>, InventoryError>;

    /// `page` and `limit` are 1-based and must be at least 1.
    async fn get_all_paged(&self, page: u64, limit: u64) -> Result<ItemPage, InventoryError>;

    /// Exact match on the trimmed name.
    async fn get_by_name(&self, name: &str) -> Result<Item, InventoryError>;
}
