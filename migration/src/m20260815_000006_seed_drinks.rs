use sea_orm_migration::prelude::*;

use crate::m20260815_000002_drink::Drink;

/// Global seed drinks available to every user; `created_by_user_id` stays
/// NULL so search ranks them below a user's own drinks.
static SEED_DRINKS: &[(&str, i32, i32)] = &[
    ("Espresso", 63, 30),
    ("Drip Coffee", 95, 240),
    ("Black Tea", 47, 240),
    ("Green Tea", 28, 240),
    ("Cola", 34, 355),
    ("Energy Drink", 80, 250),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Drink::Table)
            .columns([
                Drink::Name,
                Drink::CaffeineMg,
                Drink::BaseSizeMl,
                Drink::CreatedAt,
            ])
            .to_owned();

        for (name, caffeine_mg, base_size_ml) in SEED_DRINKS {
            insert.values_panic([
                (*name).into(),
                (*caffeine_mg).into(),
                (*base_size_ml).into(),
                Expr::current_timestamp().into(),
            ]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let seed_names: Vec<&str> = SEED_DRINKS.iter().map(|(name, _, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Drink::Table)
                    .and_where(Expr::col(Drink::CreatedByUserId).is_null())
                    .and_where(Expr::col(Drink::Name).is_in(seed_names))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
