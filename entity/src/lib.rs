pub mod prelude;

pub mod consumption_entry;
pub mod daily_limit;
pub mod drink;
pub mod user;
pub mod user_favorite;
