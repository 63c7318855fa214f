use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Mark a drink as a favorite of the user
    ///
    /// The (user, drink) pair is the primary key, so favoriting the same
    /// drink twice fails with a unique constraint violation.
    pub async fn add(
        &self,
        user_id: &str,
        drink_id: i32,
    ) -> Result<entity::user_favorite::Model, DbErr> {
        let favorite = entity::user_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            drink_id: ActiveValue::Set(drink_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        user_id: &str,
        drink_id: i32,
    ) -> Result<Option<entity::user_favorite::Model>, DbErr> {
        entity::prelude::UserFavorite::find_by_id((user_id.to_string(), drink_id))
            .one(self.db)
            .await
    }

    /// A user's favorites joined with their drink definitions
    pub async fn list(
        &self,
        user_id: &str,
    ) -> Result<Vec<(entity::user_favorite::Model, Option<entity::drink::Model>)>, DbErr> {
        entity::prelude::UserFavorite::find()
            .filter(entity::user_favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Drink)
            .order_by_desc(entity::user_favorite::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn remove(&self, user_id: &str, drink_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavorite::delete_by_id((user_id.to_string(), drink_id))
            .exec(self.db)
            .await
    }

    /// The drink ids a user has favorited
    pub async fn drink_ids(&self, user_id: &str) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserFavorite::find()
            .select_only()
            .column(entity::user_favorite::Column::DrinkId)
            .filter(entity::user_favorite::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Delete a user's favorites for the provided drink ids
    pub async fn delete_for_drinks(
        &self,
        user_id: &str,
        drink_ids: &[i32],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavorite::delete_many()
            .filter(entity::user_favorite::Column::UserId.eq(user_id))
            .filter(entity::user_favorite::Column::DrinkId.is_in(drink_ids.iter().copied()))
            .exec(self.db)
            .await
    }

    /// Re-point every favorite owned by `from_user_id` to `to_user_id`
    ///
    /// Callers must first remove favorites that would collide with rows the
    /// destination user already has, or the composite primary key rejects
    /// the update.
    pub async fn reassign_user(
        &self,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::UserFavorite::update_many()
            .col_expr(entity::user_favorite::Column::UserId, Expr::value(to_user_id))
            .filter(entity::user_favorite::Column::UserId.eq(from_user_id))
            .exec(self.db)
            .await
    }
}
