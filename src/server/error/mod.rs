//! Error types for the Jolt server application.
//!
//! Specialized error types per domain (session identity, account merging,
//! consumption tracking, configuration), aggregated into a single [`Error`]
//! enum. All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic definitions. Absence of data (no limit
//! configured, no session user on optional paths) is modeled as a value,
//! never as an error.

pub mod auth;
pub mod config;
pub mod merge;
pub mod tracking;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, merge::MergeError, tracking::TrackingError,
    },
};

/// Main error type for the Jolt server application.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type, with `#[from]` conversions so the `?` operator
/// works throughout the service and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session identity error (no user in session, stale session user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Guest account merge error (self-merge, missing target, rolled-back merge).
    #[error(transparent)]
    MergeError(#[from] MergeError),
    /// Consumption tracking error (unknown drink, invalid quantity or limit).
    #[error(transparent)]
    TrackingError(#[from] TrackingError),
    /// Internal error indicating a bug in Jolt's code.
    #[error("Internal error with Jolt's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else (database,
/// session store, internal bugs) is an opaque 500 with the cause logged rather
/// than leaked to the client.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MergeError(err) => err.into_response(),
            Self::TrackingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

// Lets tests use `?` on service results while keeping database and session
// failures in their structured variants
#[cfg(test)]
impl From<Error> for jolt_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(err) => Self::DbErr(err),
            Error::SessionError(err) => Self::SessionError(err),
            err => Self::AppError(err.to_string()),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid exposing implementation details or sensitive information.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
