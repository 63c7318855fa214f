use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

pub struct ConsumptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConsumptionRepository<'a, C> {
    /// Creates a new instance of [`ConsumptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a consumption entry
    ///
    /// `caffeine_mg` is the full derived amount for this entry (drink
    /// caffeine times quantity), stored so later drink edits never rewrite
    /// logged history.
    pub async fn create(
        &self,
        user_id: &str,
        drink_id: i32,
        quantity: i32,
        caffeine_mg: i32,
        consumed_at: NaiveDateTime,
    ) -> Result<entity::consumption_entry::Model, DbErr> {
        let entry = entity::consumption_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            drink_id: ActiveValue::Set(drink_id),
            quantity: ActiveValue::Set(quantity),
            caffeine_mg: ActiveValue::Set(caffeine_mg),
            consumed_at: ActiveValue::Set(consumed_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Sum of `caffeine_mg` over the user's entries with `consumed_at` inside
    /// the inclusive window, as an exact integer milligram total
    pub async fn sum_in_window(
        &self,
        user_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::ConsumptionEntry::find()
            .select_only()
            .column_as(entity::consumption_entry::Column::CaffeineMg.sum(), "total_mg")
            .filter(entity::consumption_entry::Column::UserId.eq(user_id))
            .filter(entity::consumption_entry::Column::ConsumedAt.gte(window_start))
            .filter(entity::consumption_entry::Column::ConsumedAt.lte(window_end))
            .into_tuple()
            .one(self.db)
            .await?;

        // SUM over zero rows is NULL
        Ok(total.flatten().unwrap_or(0))
    }

    /// Latest entries for a user, newest `consumed_at` first
    pub async fn get_recent(
        &self,
        user_id: &str,
        limit: u64,
    ) -> Result<Vec<entity::consumption_entry::Model>, DbErr> {
        entity::prelude::ConsumptionEntry::find()
            .filter(entity::consumption_entry::Column::UserId.eq(user_id))
            .order_by_desc(entity::consumption_entry::Column::ConsumedAt)
            .order_by_desc(entity::consumption_entry::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Delete an entry only if it belongs to the provided user
    pub async fn delete_owned(&self, user_id: &str, entry_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ConsumptionEntry::delete_many()
            .filter(entity::consumption_entry::Column::Id.eq(entry_id))
            .filter(entity::consumption_entry::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Re-point every entry owned by `from_user_id` to `to_user_id`
    pub async fn reassign_user(
        &self,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::ConsumptionEntry::update_many()
            .col_expr(
                entity::consumption_entry::Column::UserId,
                Expr::value(to_user_id),
            )
            .filter(entity::consumption_entry::Column::UserId.eq(from_user_id))
            .exec(self.db)
            .await
    }
}
