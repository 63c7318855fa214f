//! Jolt: caffeine intake tracking service.
//!
//! Users (authenticated or guest) log drinks, the service aggregates daily
//! caffeine totals against a time-versioned daily limit, and guest history is
//! merged into an authenticated account at sign-in.

pub mod model;
pub mod server;
