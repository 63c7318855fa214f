pub use super::consumption_entry::Entity as ConsumptionEntry;
pub use super::daily_limit::Entity as DailyLimit;
pub use super::drink::Entity as Drink;
pub use super::user::Entity as User;
pub use super::user_favorite::Entity as UserFavorite;
