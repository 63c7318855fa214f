use sea_orm::{DatabaseConnection, DatabaseTransaction, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        consumption::ConsumptionRepository, daily_limit::DailyLimitRepository,
        favorite::FavoriteRepository, user::UserRepository,
    },
    error::{auth::AuthError, merge::MergeError, Error},
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a fresh guest account with a random opaque id
    pub async fn start_guest(&self) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        let guest_id = format!("guest_{:016x}", rand::random::<u64>());

        Ok(user_repository.create(&guest_id, true).await?)
    }

    /// Sign a user in, creating their account on first sign-in
    ///
    /// When the session previously belonged to a guest account, that guest's
    /// tracked data is merged into the signed-in account and the guest is
    /// deleted, so nothing logged before signing in is lost.
    pub async fn sign_in(
        &self,
        user_id: &str,
        session_user_id: Option<String>,
    ) -> Result<entity::user::Model, Error> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AuthError::InvalidUserId.into());
        }

        let user_repository = UserRepository::new(self.db);

        let user = match user_repository.get(user_id).await? {
            Some(user) => user,
            None => user_repository.create(user_id, false).await?,
        };

        // Carry over guest data when the session was previously a guest
        if let Some(previous_id) = session_user_id {
            if previous_id != user.id {
                let was_guest = user_repository
                    .get(&previous_id)
                    .await?
                    .is_some_and(|previous| previous.is_guest);

                if was_guest {
                    self.merge_guest_account(&previous_id, &user.id).await?;
                }
            }
        }

        Ok(user)
    }

    /// Merge a guest account's tracked data into another account
    ///
    /// Re-points the guest's consumption entries, favorites, and daily limit
    /// records to the target account and deletes the guest user, all inside
    /// one transaction; on any failure the whole merge rolls back and the
    /// guest's data stays untouched. Favorites both accounts share are
    /// dropped from the guest side rather than duplicated. Retrying a merge
    /// whose guest is already gone is a no-op success.
    pub async fn merge_guest_account(
        &self,
        guest_user_id: &str,
        target_user_id: &str,
    ) -> Result<(), Error> {
        if guest_user_id == target_user_id {
            return Err(MergeError::SelfMerge.into());
        }

        let txn = self.db.begin().await.map_err(MergeError::MergeFailed)?;

        match merge_in_txn(&txn, guest_user_id, target_user_id).await {
            Ok(()) => {
                txn.commit().await.map_err(MergeError::MergeFailed)?;

                tracing::info!(
                    guest_user_id = %guest_user_id,
                    target_user_id = %target_user_id,
                    "merged guest account"
                );

                Ok(())
            }
            Err(Error::MergeError(err)) => {
                // Transaction rolls back on drop
                Err(err.into())
            }
            Err(err) => Err(err),
        }
    }
}

/// The merge steps, run against the open transaction.
async fn merge_in_txn(
    txn: &DatabaseTransaction,
    guest_user_id: &str,
    target_user_id: &str,
) -> Result<(), Error> {
    let user_repository = UserRepository::new(txn);
    let consumption_repository = ConsumptionRepository::new(txn);
    let favorite_repository = FavoriteRepository::new(txn);
    let limit_repository = DailyLimitRepository::new(txn);

    if user_repository
        .get(guest_user_id)
        .await
        .map_err(classify_merge_err)?
        .is_none()
    {
        // Already merged and deleted; retrying must not fail
        return Ok(());
    }

    if user_repository
        .get(target_user_id)
        .await
        .map_err(classify_merge_err)?
        .is_none()
    {
        return Err(MergeError::InvalidTarget.into());
    }

    consumption_repository
        .reassign_user(guest_user_id, target_user_id)
        .await
        .map_err(classify_merge_err)?;

    // Favorites the target already has would collide on the composite key
    let shared_drink_ids = favorite_repository
        .drink_ids(target_user_id)
        .await
        .map_err(classify_merge_err)?;
    if !shared_drink_ids.is_empty() {
        favorite_repository
            .delete_for_drinks(guest_user_id, &shared_drink_ids)
            .await
            .map_err(classify_merge_err)?;
    }
    favorite_repository
        .reassign_user(guest_user_id, target_user_id)
        .await
        .map_err(classify_merge_err)?;

    limit_repository
        .reassign_user(guest_user_id, target_user_id)
        .await
        .map_err(classify_merge_err)?;

    user_repository
        .delete(guest_user_id)
        .await
        .map_err(classify_merge_err)?;

    Ok(())
}

/// Distinguish merges that failed because the target account is invalid from
/// infrastructure failures.
fn classify_merge_err(err: sea_orm::DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => MergeError::InvalidTarget.into(),
        _ => MergeError::MergeFailed(err).into(),
    }
}
