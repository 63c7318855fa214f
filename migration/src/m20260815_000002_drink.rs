use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static FK_DRINK_CREATED_BY_USER_ID: &str = "fk_drink_created_by_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drink::Table)
                    .if_not_exists()
                    .col(pk_auto(Drink::Id))
                    .col(string(Drink::Name))
                    .col(integer(Drink::CaffeineMg))
                    .col(integer(Drink::BaseSizeMl))
                    .col(string_null(Drink::CreatedByUserId))
                    .col(timestamp(Drink::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DRINK_CREATED_BY_USER_ID)
                    .from_tbl(Drink::Table)
                    .from_col(Drink::CreatedByUserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DRINK_CREATED_BY_USER_ID)
                    .table(Drink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Drink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Drink {
    Table,
    Id,
    Name,
    CaffeineMg,
    BaseSizeMl,
    CreatedByUserId,
    CreatedAt,
}
