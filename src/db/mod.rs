use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr, Statement,
};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::models::Item;

pub mod memory;
pub mod migrator;
pub mod repositories;

pub use memory::MemoryItemStore;

/// Errors raised by an [`ItemStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on `name` rejected a write.
    #[error("Item '{0}' already exists")]
    DuplicateName(String),

    #[error("Item {0} not found")]
    RecordNotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Classifies a failed insert or update of `name`.
    pub fn from_write(err: DbErr, name: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateName(name.to_string()),
            _ => Self::from(err),
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::DuplicateName(msg),
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Storage seam for item records.
///
/// Implemented by the SQLite-backed [`Store`] and by [`MemoryItemStore`].
/// Listings are ordered most-recent-first (`last_recorded_at` descending,
/// then `id` descending).
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Exact match on an already-trimmed name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError>;

    async fn insert(
        &self,
        name: &str,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError>;

    /// Overwrites the quantity and touch time of an existing record.
    async fn update_quantity(
        &self,
        id: i32,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError>;

    async fn list_recent(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !is_memory_url(db_url) {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to `sqlite::memory:` opens its own empty
        // database, so an in-memory store must stay on one connection.
        let (max_connections, min_connections) = if is_memory_url(db_url) {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        if !is_memory_url(db_url) {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn item_repo(&self) -> repositories::item::ItemRepository {
        repositories::item::ItemRepository::new(self.conn.clone())
    }
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:")
}

#[async_trait]
impl ItemStore for Store {
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        self.item_repo().find_by_name(name).await
    }

    async fn insert(
        &self,
        name: &str,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        self.item_repo().insert(name, quantity, recorded_at).await
    }

    async fn update_quantity(
        &self,
        id: i32,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        self.item_repo()
            .update_quantity(id, quantity, recorded_at)
            .await
    }

    async fn list_recent(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StoreError> {
        self.item_repo().list_recent(offset, limit).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.item_repo().count().await
    }
}
