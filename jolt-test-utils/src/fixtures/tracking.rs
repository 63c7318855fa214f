use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{ConsumptionEntryModel, DailyLimitModel, DrinkModel, UserFavoriteModel},
    setup::TestSetup,
};

/// Helpers for inserting drinks, consumption entries, daily limits, and
/// favorites into the test database.
pub struct TrackingFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestSetup {
    pub fn tracking(&self) -> TrackingFixtures<'_> {
        TrackingFixtures {
            db: &self.state.db,
        }
    }
}

impl<'a> TrackingFixtures<'a> {
    /// Insert a global drink (no owning user)
    pub async fn insert_drink(
        &self,
        name: &str,
        caffeine_mg: i32,
    ) -> Result<DrinkModel, TestError> {
        self.insert_drink_for(name, caffeine_mg, None).await
    }

    /// Insert a custom drink owned by the provided user
    pub async fn insert_user_drink(
        &self,
        user_id: &str,
        name: &str,
        caffeine_mg: i32,
    ) -> Result<DrinkModel, TestError> {
        self.insert_drink_for(name, caffeine_mg, Some(user_id.to_string()))
            .await
    }

    async fn insert_drink_for(
        &self,
        name: &str,
        caffeine_mg: i32,
        created_by_user_id: Option<String>,
    ) -> Result<DrinkModel, TestError> {
        let drink = entity::drink::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            caffeine_mg: ActiveValue::Set(caffeine_mg),
            base_size_ml: ActiveValue::Set(240),
            created_by_user_id: ActiveValue::Set(created_by_user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(drink.insert(self.db).await?)
    }

    /// Insert a consumption entry with an explicit caffeine amount and timestamp
    pub async fn insert_entry(
        &self,
        user_id: &str,
        drink_id: i32,
        caffeine_mg: i32,
        consumed_at: NaiveDateTime,
    ) -> Result<ConsumptionEntryModel, TestError> {
        let entry = entity::consumption_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            drink_id: ActiveValue::Set(drink_id),
            quantity: ActiveValue::Set(1),
            caffeine_mg: ActiveValue::Set(caffeine_mg),
            consumed_at: ActiveValue::Set(consumed_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(entry.insert(self.db).await?)
    }

    /// Insert a daily limit record effective from the provided date
    pub async fn insert_limit(
        &self,
        user_id: &str,
        limit_mg: i32,
        effective_from: NaiveDate,
    ) -> Result<DailyLimitModel, TestError> {
        let limit = entity::daily_limit::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            limit_mg: ActiveValue::Set(limit_mg),
            effective_from: ActiveValue::Set(effective_from),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(limit.insert(self.db).await?)
    }

    /// Insert a favorite association between a user and a drink
    pub async fn insert_favorite(
        &self,
        user_id: &str,
        drink_id: i32,
    ) -> Result<UserFavoriteModel, TestError> {
        let favorite = entity::user_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            drink_id: ActiveValue::Set(drink_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(favorite.insert(self.db).await?)
    }
}
