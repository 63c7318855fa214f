//! Server application core modules.
//!
//! This module contains all server-side functionality for the Jolt application, including
//! HTTP routing, session identity, database operations, daily caffeine aggregation, and
//! guest account merging. The surrounding request layer is thin glue; the interesting
//! invariants live in the limit resolver, the daily aggregator, and the account merge
//! transaction inside [`service`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
