use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000002_drink::Drink};

static FK_CONSUMPTION_ENTRY_USER_ID: &str = "fk_consumption_entry_user_id";
static FK_CONSUMPTION_ENTRY_DRINK_ID: &str = "fk_consumption_entry_drink_id";
static IDX_CONSUMPTION_ENTRY_USER_CONSUMED_AT: &str = "idx_consumption_entry_user_consumed_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsumptionEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ConsumptionEntry::Id))
                    .col(string(ConsumptionEntry::UserId))
                    .col(integer(ConsumptionEntry::DrinkId))
                    .col(integer(ConsumptionEntry::Quantity))
                    .col(integer(ConsumptionEntry::CaffeineMg))
                    .col(timestamp(ConsumptionEntry::ConsumedAt))
                    .col(timestamp(ConsumptionEntry::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONSUMPTION_ENTRY_USER_ID)
                    .from_tbl(ConsumptionEntry::Table)
                    .from_col(ConsumptionEntry::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONSUMPTION_ENTRY_DRINK_ID)
                    .from_tbl(ConsumptionEntry::Table)
                    .from_col(ConsumptionEntry::DrinkId)
                    .to_tbl(Drink::Table)
                    .to_col(Drink::Id)
                    .to_owned(),
            )
            .await?;

        // Daily aggregation always filters by user and consumed_at window
        manager
            .create_index(
                Index::create()
                    .name(IDX_CONSUMPTION_ENTRY_USER_CONSUMED_AT)
                    .table(ConsumptionEntry::Table)
                    .col(ConsumptionEntry::UserId)
                    .col(ConsumptionEntry::ConsumedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONSUMPTION_ENTRY_USER_CONSUMED_AT)
                    .table(ConsumptionEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONSUMPTION_ENTRY_DRINK_ID)
                    .table(ConsumptionEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONSUMPTION_ENTRY_USER_ID)
                    .table(ConsumptionEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ConsumptionEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ConsumptionEntry {
    Table,
    Id,
    UserId,
    DrinkId,
    Quantity,
    CaffeineMg,
    ConsumedAt,
    CreatedAt,
}
