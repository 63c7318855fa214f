//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each
//! repository is generic over [`sea_orm::ConnectionTrait`] so the same code
//! runs against the shared connection and inside the account merge
//! transaction; the connection handle is always passed in explicitly, never
//! held as process-wide state.

pub mod consumption;
pub mod daily_limit;
pub mod drink;
pub mod favorite;
pub mod user;
