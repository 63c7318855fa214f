pub use sea_orm_migration::prelude::*;

mod m20260815_000001_user;
mod m20260815_000002_drink;
mod m20260815_000003_consumption_entry;
mod m20260815_000004_daily_limit;
mod m20260815_000005_user_favorite;
mod m20260815_000006_seed_drinks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_user::Migration),
            Box::new(m20260815_000002_drink::Migration),
            Box::new(m20260815_000003_consumption_entry::Migration),
            Box::new(m20260815_000004_daily_limit::Migration),
            Box::new(m20260815_000005_user_favorite::Migration),
            Box::new(m20260815_000006_seed_drinks::Migration),
        ]
    }
}
