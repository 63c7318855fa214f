//! Fixture helpers for inserting test data.
//!
//! Accessed through [`TestSetup::user`](crate::TestSetup::user) and
//! [`TestSetup::tracking`](crate::TestSetup::tracking).

pub mod tracking;
pub mod user;
