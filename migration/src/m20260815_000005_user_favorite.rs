use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000002_drink::Drink};

static FK_USER_FAVORITE_USER_ID: &str = "fk_user_favorite_user_id";
static FK_USER_FAVORITE_DRINK_ID: &str = "fk_user_favorite_drink_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavorite::Table)
                    .if_not_exists()
                    .col(string(UserFavorite::UserId))
                    .col(integer(UserFavorite::DrinkId))
                    .col(timestamp(UserFavorite::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserFavorite::UserId)
                            .col(UserFavorite::DrinkId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_FAVORITE_USER_ID)
                    .from_tbl(UserFavorite::Table)
                    .from_col(UserFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_FAVORITE_DRINK_ID)
                    .from_tbl(UserFavorite::Table)
                    .from_col(UserFavorite::DrinkId)
                    .to_tbl(Drink::Table)
                    .to_col(Drink::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_FAVORITE_DRINK_ID)
                    .table(UserFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_FAVORITE_USER_ID)
                    .table(UserFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserFavorite {
    Table,
    UserId,
    DrinkId,
    CreatedAt,
}
