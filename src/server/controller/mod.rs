//! HTTP controller endpoints for the Jolt web API.
//!
//! Axum handlers for account and session management, consumption logging,
//! daily status, limit management, drink search, and favorites. Controllers
//! resolve the current user from the session, delegate to services, and map
//! models to DTOs; business rules live in the service layer.

pub mod auth;
pub mod consumption;
pub mod drink;
pub mod limit;
pub mod user;
pub mod util;
