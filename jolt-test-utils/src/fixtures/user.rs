use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, model::UserModel, setup::TestSetup};

/// Helpers for inserting user rows into the test database.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures {
            db: &self.state.db,
        }
    }
}

impl<'a> UserFixtures<'a> {
    /// Insert an authenticated user with the provided id
    pub async fn insert_user(&self, user_id: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id.to_string()),
            is_guest: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(user.insert(self.db).await?)
    }

    /// Insert a guest user with the provided id
    pub async fn insert_guest(&self, guest_id: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(guest_id.to_string()),
            is_guest: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(user.insert(self.db).await?)
    }
}
