use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, ExprTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct DrinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DrinkRepository<'a, C> {
    /// Creates a new instance of [`DrinkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a drink definition
    ///
    /// # Arguments
    /// - `name`: Display name of the drink
    /// - `caffeine_mg`: Caffeine in milligrams per base serving
    /// - `base_size_ml`: Base serving size in milliliters
    /// - `created_by_user_id`: Owning user for custom drinks, `None` for
    ///   global drinks
    pub async fn create(
        &self,
        name: &str,
        caffeine_mg: i32,
        base_size_ml: i32,
        created_by_user_id: Option<String>,
    ) -> Result<entity::drink::Model, DbErr> {
        let drink = entity::drink::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            caffeine_mg: ActiveValue::Set(caffeine_mg),
            base_size_ml: ActiveValue::Set(base_size_ml),
            created_by_user_id: ActiveValue::Set(created_by_user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        drink.insert(self.db).await
    }

    pub async fn get(&self, drink_id: i32) -> Result<Option<entity::drink::Model>, DbErr> {
        entity::prelude::Drink::find_by_id(drink_id)
            .one(self.db)
            .await
    }

    /// Find drinks whose name contains the term as a literal substring,
    /// case-insensitively
    ///
    /// Drinks owned by `user_id` rank before global and other users' drinks,
    /// alphabetically by name within each group. The ranking happens in SQL
    /// so the row limit never drops an owned drink in favor of a global one.
    pub async fn search_by_name(
        &self,
        user_id: &str,
        term: &str,
        limit: u64,
    ) -> Result<Vec<entity::drink::Model>, DbErr> {
        // Escape LIKE metacharacters so the term matches literally
        let escaped = term
            .to_lowercase()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = LikeExpr::new(format!("%{}%", escaped)).escape('\\');

        let own_first: SimpleExpr = Expr::case(
            Expr::col(entity::drink::Column::CreatedByUserId).eq(user_id),
            0,
        )
        .finally(1)
        .into();

        entity::prelude::Drink::find()
            .filter(Expr::expr(Func::lower(Expr::col(entity::drink::Column::Name))).like(pattern))
            .order_by(own_first, Order::Asc)
            .order_by_asc(entity::drink::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }
}
