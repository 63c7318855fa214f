//! Type aliases for database models used by fixtures and tests.

pub type UserModel = entity::user::Model;
pub type DrinkModel = entity::drink::Model;
pub type ConsumptionEntryModel = entity::consumption_entry::Model;
pub type DailyLimitModel = entity::daily_limit::Model;
pub type UserFavoriteModel = entity::user_favorite::Model;
