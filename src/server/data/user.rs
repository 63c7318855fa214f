use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the provided opaque id
    pub async fn create(
        &self,
        user_id: &str,
        is_guest: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id.to_string()),
            is_guest: ActiveValue::Set(is_guest),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use jolt_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.create(TEST_USER_ID, false).await;

            assert!(result.is_ok());
            assert!(!result.unwrap().is_guest);

            Ok(())
        }

        /// Expect the guest flag to be stored when creating a guest user
        #[tokio::test]
        async fn creates_guest_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.create(TEST_GUEST_ID, true).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_guest);

            Ok(())
        }

        /// Expect Error when creating a user with an id already in use
        #[tokio::test]
        async fn fails_for_duplicate_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            test.user().insert_user(TEST_USER_ID).await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.create(TEST_USER_ID, false).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use jolt_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_model = test.user().insert_user(TEST_USER_ID).await?;

            let user_repo = UserRepository::new(&test.state.db);
            let result = user_repo.get(&user_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repo = UserRepository::new(&test.state.db);
            let result = user_repo.get(TEST_USER_ID).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user_repo = UserRepository::new(&test.state.db);

            let result = user_repo.get(TEST_USER_ID).await;
            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete {
        use jolt_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::user::UserRepository;

        /// Expect success when deleting user
        #[tokio::test]
        async fn deletes_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_model = test.user().insert_guest(TEST_GUEST_ID).await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.delete(&user_model.id).await;

            assert!(result.is_ok());
            let delete_result = result.unwrap();
            assert_eq!(delete_result.rows_affected, 1);
            // Ensure user has actually been deleted
            let user_exists = entity::prelude::User::find_by_id(user_model.id)
                .one(&test.state.db)
                .await?;
            assert!(user_exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting user that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.delete(TEST_GUEST_ID).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }
}
