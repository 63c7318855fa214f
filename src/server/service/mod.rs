//! Service layer for business logic.
//!
//! Services compose repositories into the operations the HTTP layer exposes:
//! account lifecycle and guest merging, consumption logging and daily status,
//! limit resolution, and drink search. Validation and error classification
//! live here; controllers stay thin.

pub mod account;
pub mod consumption;
pub mod drink;
pub mod limit;
