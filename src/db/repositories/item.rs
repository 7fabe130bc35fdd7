use crate::db::StoreError;
use crate::entities::{items, prelude::*};
use crate::models::{Item, format_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

/// Repository for the `items` table
pub struct ItemRepository {
    conn: DatabaseConnection,
}

impl ItemRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: items::Model) -> Result<Item, StoreError> {
        let last_recorded_at = parse_timestamp(&m.last_recorded_at).map_err(|e| {
            StoreError::Database(format!(
                "Invalid timestamp '{}' on item {}: {e}",
                m.last_recorded_at, m.id
            ))
        })?;

        Ok(Item {
            id: m.id,
            name: m.name,
            quantity: m.quantity,
            last_recorded_at,
        })
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        let row = Items::find()
            .filter(items::Column::Name.eq(name))
            .one(&self.conn)
            .await?;

        row.map(Self::map_model).transpose()
    }

    pub async fn insert(
        &self,
        name: &str,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        let active_model = items::ActiveModel {
            name: Set(name.to_string()),
            quantity: Set(quantity),
            last_recorded_at: Set(format_timestamp(recorded_at)),
            ..Default::default()
        };

        let model = Items::insert(active_model)
            .exec_with_returning(&self.conn)
            .await
            .map_err(|e| StoreError::from_write(e, name))?;

        debug!(id = model.id, name = %model.name, "Inserted item");
        Self::map_model(model)
    }

    pub async fn update_quantity(
        &self,
        id: i32,
        quantity: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        let active_model = items::ActiveModel {
            id: Unchanged(id),
            quantity: Set(quantity),
            last_recorded_at: Set(format_timestamp(recorded_at)),
            ..Default::default()
        };

        let model = Items::update(active_model)
            .exec(&self.conn)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => StoreError::RecordNotFound(id),
                other => StoreError::from(other),
            })?;

        Self::map_model(model)
    }

    pub async fn list_recent(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StoreError> {
        // SQLite binds OFFSET/LIMIT as signed 64-bit integers.
        let offset = offset.min(i64::MAX as u64);
        let limit = limit.min(i64::MAX as u64);

        let rows = Items::find()
            .order_by_desc(items::Column::LastRecordedAt)
            .order_by_desc(items::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.conn)
            .await?;

        rows.into_iter().map(Self::map_model).collect()
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(Items::find().count(&self.conn).await?)
    }
}
