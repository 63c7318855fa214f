use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{consumption::ConsumptionRepository, drink::DrinkRepository},
    error::{tracking::TrackingError, Error},
    service::limit::LimitService,
};

/// How many entries the recent-entries listing returns at most.
const RECENT_ENTRIES_LIMIT: u64 = 50;

/// Caffeine status for one UTC calendar date.
pub struct DailyStatus {
    pub date: NaiveDate,
    pub total_mg: i64,
    pub limit_mg: Option<i32>,
    pub remaining_mg: Option<i64>,
    pub over_limit: bool,
}

pub struct ConsumptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConsumptionService<'a> {
    /// Creates a new instance of [`ConsumptionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Log a drink consumption for the user
    ///
    /// The entry's caffeine amount is derived from the drink's per-serving
    /// caffeine times the quantity and frozen into the entry, so editing a
    /// drink later never rewrites logged history. `consumed_at` defaults to
    /// the current time (UTC) when not provided.
    pub async fn log_drink(
        &self,
        user_id: &str,
        drink_id: i32,
        quantity: i32,
        consumed_at: Option<NaiveDateTime>,
    ) -> Result<entity::consumption_entry::Model, Error> {
        if quantity <= 0 {
            return Err(TrackingError::InvalidQuantity(quantity).into());
        }

        let drink_repository = DrinkRepository::new(self.db);
        let consumption_repository = ConsumptionRepository::new(self.db);

        let drink = drink_repository
            .get(drink_id)
            .await?
            .ok_or(TrackingError::DrinkNotFound(drink_id))?;

        // Absurd quantities that overflow the milligram total are bad input
        let caffeine_mg = drink
            .caffeine_mg
            .checked_mul(quantity)
            .ok_or(TrackingError::QuantityTooLarge(quantity))?;

        let consumed_at = consumed_at.unwrap_or_else(|| Utc::now().naive_utc());

        Ok(consumption_repository
            .create(user_id, drink_id, quantity, caffeine_mg, consumed_at)
            .await?)
    }

    /// Daily caffeine status for the user on the provided UTC calendar date
    ///
    /// Sums every entry with `consumed_at` inside the date's UTC day window
    /// and compares against the limit in effect for that date. `over_limit`
    /// is true only when the total strictly exceeds the limit; a total equal
    /// to the limit is still within it. Without a configured limit the total
    /// is reported alone and `over_limit` stays false.
    pub async fn daily_status(&self, user_id: &str, date: NaiveDate) -> Result<DailyStatus, Error> {
        let consumption_repository = ConsumptionRepository::new(self.db);
        let limit_service = LimitService::new(self.db);

        let window_start = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            Error::InternalError(format!("failed to build day window start for {}", date))
        })?;
        let window_end = date.and_hms_milli_opt(23, 59, 59, 999).ok_or_else(|| {
            Error::InternalError(format!("failed to build day window end for {}", date))
        })?;

        let total_mg = consumption_repository
            .sum_in_window(user_id, window_start, window_end)
            .await?;
        let limit_mg = limit_service.effective_limit(user_id, date).await?;

        // remaining_mg goes negative on overage, by how much
        let remaining_mg = limit_mg.map(|limit| i64::from(limit) - total_mg);
        let over_limit = limit_mg.is_some_and(|limit| total_mg > i64::from(limit));

        Ok(DailyStatus {
            date,
            total_mg,
            limit_mg,
            remaining_mg,
            over_limit,
        })
    }

    /// Latest consumption entries for the user, newest first
    pub async fn get_recent_entries(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::consumption_entry::Model>, Error> {
        let consumption_repository = ConsumptionRepository::new(self.db);

        Ok(consumption_repository
            .get_recent(user_id, RECENT_ENTRIES_LIMIT)
            .await?)
    }

    /// Delete one of the user's entries
    ///
    /// Returns whether an entry was deleted; entries owned by other users
    /// are invisible here rather than an error.
    pub async fn delete_entry(&self, user_id: &str, entry_id: i32) -> Result<bool, Error> {
        let consumption_repository = ConsumptionRepository::new(self.db);

        let result = consumption_repository.delete_owned(user_id, entry_id).await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {

    mod log_drink {
        use chrono::NaiveDate;
        use jolt_test_utils::prelude::*;

        use crate::server::{
            error::{tracking::TrackingError, Error},
            service::consumption::ConsumptionService,
        };

        /// Expect the stored caffeine amount to be the drink's caffeine
        /// times the quantity
        #[tokio::test]
        async fn derives_caffeine_from_quantity() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Espresso", 63).await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let entry = consumption_service
                .log_drink(TEST_USER_ID, drink.id, 3, None)
                .await?;

            assert_eq!(entry.caffeine_mg, 189);
            assert_eq!(entry.quantity, 3);

            Ok(())
        }

        /// Expect an explicit consumption time to be stored as provided
        #[tokio::test]
        async fn stores_explicit_consumed_at() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Espresso", 63).await?;
            let consumed_at = NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap();

            let consumption_service = ConsumptionService::new(&test.state.db);
            let entry = consumption_service
                .log_drink(TEST_USER_ID, drink.id, 1, Some(consumed_at))
                .await?;

            assert_eq!(entry.consumed_at, consumed_at);

            Ok(())
        }

        /// Expect Error when the drink does not exist
        #[tokio::test]
        async fn fails_for_unknown_drink() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let result = consumption_service
                .log_drink(TEST_USER_ID, 9000, 1, None)
                .await;

            assert!(matches!(
                result,
                Err(Error::TrackingError(TrackingError::DrinkNotFound(9000)))
            ));

            Ok(())
        }

        /// Expect Error when the quantity overflows the milligram total
        #[tokio::test]
        async fn rejects_overflowing_quantity() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Pure Caffeine", i32::MAX).await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let result = consumption_service
                .log_drink(TEST_USER_ID, drink.id, 2, None)
                .await;

            assert!(matches!(
                result,
                Err(Error::TrackingError(TrackingError::QuantityTooLarge(2)))
            ));

            Ok(())
        }

        /// Expect Error when the quantity is zero or negative
        #[tokio::test]
        async fn rejects_non_positive_quantity() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Espresso", 63).await?;

            let consumption_service = ConsumptionService::new(&test.state.db);

            for invalid in [0, -2] {
                let result = consumption_service
                    .log_drink(TEST_USER_ID, drink.id, invalid, None)
                    .await;

                assert!(matches!(
                    result,
                    Err(Error::TrackingError(TrackingError::InvalidQuantity(_)))
                ));
            }

            Ok(())
        }
    }

    mod daily_status {
        use chrono::NaiveDate;
        use jolt_test_utils::prelude::*;
        use jolt_test_utils::TestSetup;

        use crate::server::service::consumption::ConsumptionService;

        async fn setup_user_with_drink() -> Result<(TestSetup, i32), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Drip Coffee", 95).await?;

            Ok((test, drink.id))
        }

        fn day() -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        }

        /// Expect a zero total and no limit fields when the user has neither
        /// entries nor a configured limit
        #[tokio::test]
        async fn empty_day_without_limit() -> Result<(), TestError> {
            let (test, _) = setup_user_with_drink().await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let status = consumption_service.daily_status(TEST_USER_ID, day()).await?;

            assert_eq!(status.total_mg, 0);
            assert!(status.limit_mg.is_none());
            assert!(status.remaining_mg.is_none());
            assert!(!status.over_limit);

            Ok(())
        }

        /// Expect a total equal to the limit not to count as over the limit
        #[tokio::test]
        async fn total_equal_to_limit_is_within() -> Result<(), TestError> {
            let (test, drink_id) = setup_user_with_drink().await?;
            test.tracking().insert_limit(TEST_USER_ID, 400, day()).await?;
            test.tracking()
                .insert_entry(TEST_USER_ID, drink_id, 400, day().and_hms_opt(9, 0, 0).unwrap())
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let status = consumption_service.daily_status(TEST_USER_ID, day()).await?;

            assert_eq!(status.total_mg, 400);
            assert_eq!(status.limit_mg, Some(400));
            assert_eq!(status.remaining_mg, Some(0));
            assert!(!status.over_limit);

            Ok(())
        }

        /// Expect one milligram over the limit to flag over_limit with a
        /// negative remaining amount
        #[tokio::test]
        async fn one_milligram_over_is_over() -> Result<(), TestError> {
            let (test, drink_id) = setup_user_with_drink().await?;
            test.tracking().insert_limit(TEST_USER_ID, 400, day()).await?;
            test.tracking()
                .insert_entry(TEST_USER_ID, drink_id, 401, day().and_hms_opt(9, 0, 0).unwrap())
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let status = consumption_service.daily_status(TEST_USER_ID, day()).await?;

            assert!(status.over_limit);
            assert_eq!(status.remaining_mg, Some(-1));

            Ok(())
        }

        /// Expect entries at both edges of the day to count and entries on
        /// adjacent days to be excluded
        #[tokio::test]
        async fn respects_day_boundaries() -> Result<(), TestError> {
            let (test, drink_id) = setup_user_with_drink().await?;
            test.tracking()
                .insert_entry(TEST_USER_ID, drink_id, 10, day().and_hms_opt(0, 0, 0).unwrap())
                .await?;
            test.tracking()
                .insert_entry(
                    TEST_USER_ID,
                    drink_id,
                    20,
                    day().and_hms_milli_opt(23, 59, 59, 999).unwrap(),
                )
                .await?;
            test.tracking()
                .insert_entry(
                    TEST_USER_ID,
                    drink_id,
                    500,
                    day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
                )
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let status = consumption_service.daily_status(TEST_USER_ID, day()).await?;

            assert_eq!(status.total_mg, 30);

            Ok(())
        }

        /// Expect the status to use the limit in effect for the queried date,
        /// not the latest limit
        #[tokio::test]
        async fn uses_limit_effective_on_date() -> Result<(), TestError> {
            let (test, drink_id) = setup_user_with_drink().await?;
            test.tracking()
                .insert_limit(TEST_USER_ID, 400, day().pred_opt().unwrap())
                .await?;
            test.tracking()
                .insert_limit(TEST_USER_ID, 100, day().succ_opt().unwrap())
                .await?;
            test.tracking()
                .insert_entry(TEST_USER_ID, drink_id, 250, day().and_hms_opt(9, 0, 0).unwrap())
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let status = consumption_service.daily_status(TEST_USER_ID, day()).await?;

            assert_eq!(status.limit_mg, Some(400));
            assert!(!status.over_limit);

            Ok(())
        }
    }

    mod delete_entry {
        use chrono::Utc;
        use jolt_test_utils::prelude::*;

        use crate::server::service::consumption::ConsumptionService;

        /// Expect true when deleting the user's own entry
        #[tokio::test]
        async fn deletes_own_entry() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Espresso", 63).await?;
            let entry = test
                .tracking()
                .insert_entry(TEST_USER_ID, drink.id, 63, Utc::now().naive_utc())
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let deleted = consumption_service.delete_entry(TEST_USER_ID, entry.id).await?;

            assert!(deleted);

            Ok(())
        }

        /// Expect false when the entry belongs to another user
        #[tokio::test]
        async fn ignores_other_users_entry() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.user().insert_guest(TEST_GUEST_ID).await?;
            let drink = test.tracking().insert_drink("Espresso", 63).await?;
            let entry = test
                .tracking()
                .insert_entry(TEST_USER_ID, drink.id, 63, Utc::now().naive_utc())
                .await?;

            let consumption_service = ConsumptionService::new(&test.state.db);
            let deleted = consumption_service.delete_entry(TEST_GUEST_ID, entry.id).await?;

            assert!(!deleted);

            Ok(())
        }
    }
}
