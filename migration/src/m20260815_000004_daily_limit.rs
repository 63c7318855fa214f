use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static FK_DAILY_LIMIT_USER_ID: &str = "fk_daily_limit_user_id";
static IDX_DAILY_LIMIT_USER_EFFECTIVE_FROM: &str = "idx_daily_limit_user_effective_from";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyLimit::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyLimit::Id))
                    .col(string(DailyLimit::UserId))
                    .col(integer(DailyLimit::LimitMg))
                    .col(date(DailyLimit::EffectiveFrom))
                    .col(timestamp(DailyLimit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DAILY_LIMIT_USER_ID)
                    .from_tbl(DailyLimit::Table)
                    .from_col(DailyLimit::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DAILY_LIMIT_USER_EFFECTIVE_FROM)
                    .table(DailyLimit::Table)
                    .col(DailyLimit::UserId)
                    .col(DailyLimit::EffectiveFrom)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DAILY_LIMIT_USER_EFFECTIVE_FROM)
                    .table(DailyLimit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DAILY_LIMIT_USER_ID)
                    .table(DailyLimit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DailyLimit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DailyLimit {
    Table,
    Id,
    UserId,
    LimitMg,
    EffectiveFrom,
    CreatedAt,
}
