use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, UpdateResult,
};

pub struct DailyLimitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DailyLimitRepository<'a, C> {
    /// Creates a new instance of [`DailyLimitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Append a daily limit record
    ///
    /// Limit history is append-only; changing a limit means inserting a new
    /// record with a later `effective_from` (or the same date, in which case
    /// the newest record wins).
    pub async fn create(
        &self,
        user_id: &str,
        limit_mg: i32,
        effective_from: NaiveDate,
    ) -> Result<entity::daily_limit::Model, DbErr> {
        let limit = entity::daily_limit::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            limit_mg: ActiveValue::Set(limit_mg),
            effective_from: ActiveValue::Set(effective_from),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        limit.insert(self.db).await
    }

    /// The record in effect for the provided calendar date: greatest
    /// `effective_from` on or before the date, ties broken by newest record
    ///
    /// `effective_from` is a date column, so this comparison is exactly the
    /// "limit applies from the start of its effective day (UTC)" policy; no
    /// time-of-day component can make a limit apply retroactively within a
    /// day.
    pub async fn effective_on(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<entity::daily_limit::Model>, DbErr> {
        entity::prelude::DailyLimit::find()
            .filter(entity::daily_limit::Column::UserId.eq(user_id))
            .filter(entity::daily_limit::Column::EffectiveFrom.lte(date))
            .order_by_desc(entity::daily_limit::Column::EffectiveFrom)
            .order_by_desc(entity::daily_limit::Column::Id)
            .one(self.db)
            .await
    }

    /// Full limit history for a user, most recent `effective_from` first
    pub async fn get_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::daily_limit::Model>, DbErr> {
        entity::prelude::DailyLimit::find()
            .filter(entity::daily_limit::Column::UserId.eq(user_id))
            .order_by_desc(entity::daily_limit::Column::EffectiveFrom)
            .order_by_desc(entity::daily_limit::Column::Id)
            .all(self.db)
            .await
    }

    /// Re-point every limit record owned by `from_user_id` to `to_user_id`
    pub async fn reassign_user(
        &self,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::DailyLimit::update_many()
            .col_expr(entity::daily_limit::Column::UserId, Expr::value(to_user_id))
            .filter(entity::daily_limit::Column::UserId.eq(from_user_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod effective_on {
        use chrono::NaiveDate;
        use jolt_test_utils::prelude::*;

        use crate::server::data::daily_limit::DailyLimitRepository;

        /// Expect Ok(None) when the user has no limit records
        #[tokio::test]
        async fn returns_none_without_records() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);
            let result = limit_repository
                .effective_on(TEST_USER_ID, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
                .await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect a record effective from a date to apply on that date but
        /// not the day before
        #[tokio::test]
        async fn applies_from_effective_date() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
            test.tracking().insert_limit(TEST_USER_ID, 400, day).await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);

            let on_day = limit_repository.effective_on(TEST_USER_ID, day).await?;
            assert_eq!(on_day.map(|l| l.limit_mg), Some(400));

            let day_before = limit_repository
                .effective_on(TEST_USER_ID, day.pred_opt().unwrap())
                .await?;
            assert!(day_before.is_none());

            Ok(())
        }

        /// Expect a later record to override earlier dates only from its own
        /// effective date onward
        #[tokio::test]
        async fn later_record_overrides_from_its_date() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let old_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
            let new_start = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
            test.tracking()
                .insert_limit(TEST_USER_ID, 400, old_start)
                .await?;
            test.tracking()
                .insert_limit(TEST_USER_ID, 200, new_start)
                .await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);

            let before_override = limit_repository
                .effective_on(TEST_USER_ID, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap())
                .await?;
            assert_eq!(before_override.map(|l| l.limit_mg), Some(400));

            let after_override = limit_repository
                .effective_on(TEST_USER_ID, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
                .await?;
            assert_eq!(after_override.map(|l| l.limit_mg), Some(200));

            Ok(())
        }

        /// Expect the newest record to win when two share an effective date
        #[tokio::test]
        async fn newest_record_wins_same_day() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
            test.tracking().insert_limit(TEST_USER_ID, 400, day).await?;
            test.tracking().insert_limit(TEST_USER_ID, 250, day).await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);
            let result = limit_repository.effective_on(TEST_USER_ID, day).await?;

            assert_eq!(result.map(|l| l.limit_mg), Some(250));

            Ok(())
        }

        /// Expect other users' records to be ignored
        #[tokio::test]
        async fn ignores_other_users() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.user().insert_guest(TEST_GUEST_ID).await?;
            let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
            test.tracking()
                .insert_limit(TEST_GUEST_ID, 150, day)
                .await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);
            let result = limit_repository.effective_on(TEST_USER_ID, day).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod reassign_user {
        use chrono::NaiveDate;
        use jolt_test_utils::prelude::*;
        use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

        use crate::server::data::daily_limit::DailyLimitRepository;

        /// Expect all limit records to move from one user to another
        #[tokio::test]
        async fn moves_all_records() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.user().insert_guest(TEST_GUEST_ID).await?;
            let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
            test.tracking()
                .insert_limit(TEST_GUEST_ID, 400, day)
                .await?;
            test.tracking()
                .insert_limit(TEST_GUEST_ID, 200, day.succ_opt().unwrap())
                .await?;

            let limit_repository = DailyLimitRepository::new(&test.state.db);
            let result = limit_repository
                .reassign_user(TEST_GUEST_ID, TEST_USER_ID)
                .await?;

            assert_eq!(result.rows_affected, 2);
            let moved = entity::prelude::DailyLimit::find()
                .filter(entity::daily_limit::Column::UserId.eq(TEST_USER_ID))
                .count(&test.state.db)
                .await?;
            assert_eq!(moved, 2);

            Ok(())
        }
    }
}
