//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models so the rest of the server can
//! refer to domain types without importing from the `entity` crate directly.

/// A user account; `is_guest` marks anonymous accounts eligible for merging.
pub type UserModel = entity::user::Model;

/// A drink definition; global when `created_by_user_id` is `None`.
pub type DrinkModel = entity::drink::Model;

/// A single logged consumption with its derived caffeine amount.
pub type ConsumptionEntryModel = entity::consumption_entry::Model;

/// An append-only daily limit record, time-versioned by `effective_from`.
pub type DailyLimitModel = entity::daily_limit::Model;

/// A user's favorite drink association.
pub type UserFavoriteModel = entity::user_favorite::Model;
