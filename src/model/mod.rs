//! API data transfer objects shared across controllers.

pub mod api;
pub mod tracking;
pub mod user;
