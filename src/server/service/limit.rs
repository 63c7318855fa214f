use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::daily_limit::DailyLimitRepository,
    error::{tracking::TrackingError, Error},
};

pub struct LimitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LimitService<'a> {
    /// Creates a new instance of [`LimitService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the daily limit in effect for the user on the provided date
    ///
    /// The winning record is the one with the greatest `effective_from` on or
    /// before the date; when several share that date the newest record wins.
    /// `Ok(None)` means no limit was configured on or before the date, which
    /// is a valid state and never an error.
    pub async fn effective_limit(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<i32>, Error> {
        let limit_repository = DailyLimitRepository::new(self.db);

        let record = limit_repository.effective_on(user_id, date).await?;

        Ok(record.map(|r| r.limit_mg))
    }

    /// Record a new daily limit effective from the provided date
    ///
    /// History is append-only; earlier dates keep resolving to the records
    /// that were in effect then.
    pub async fn set_limit(
        &self,
        user_id: &str,
        limit_mg: i32,
        effective_from: NaiveDate,
    ) -> Result<entity::daily_limit::Model, Error> {
        if limit_mg <= 0 {
            return Err(TrackingError::InvalidLimit(limit_mg).into());
        }

        let limit_repository = DailyLimitRepository::new(self.db);

        Ok(limit_repository
            .create(user_id, limit_mg, effective_from)
            .await?)
    }

    /// Full limit history for the user, most recent first
    pub async fn get_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::daily_limit::Model>, Error> {
        let limit_repository = DailyLimitRepository::new(self.db);

        Ok(limit_repository.get_history(user_id).await?)
    }
}
