use sea_orm_migration::prelude::*;

use crate::constants::limits::MAX_NAME_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

const RECENCY_INDEX: &str = "idx_items_last_recorded_at_id";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::Name)
                            .string_len(MAX_NAME_LENGTH as u32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Items::Quantity).big_integer().not_null())
                    .col(ColumnDef::new(Items::LastRecordedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Backs the most-recent-first scan used by the latest and paged views.
        manager
            .create_index(
                Index::create()
                    .name(RECENCY_INDEX)
                    .table(Items::Table)
                    .col(Items::LastRecordedAt)
                    .col(Items::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(RECENCY_INDEX).table(Items::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Quantity,
    LastRecordedAt,
}
