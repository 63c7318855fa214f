//! Server application models and type definitions.

pub mod app;
pub mod db;
pub mod session;
