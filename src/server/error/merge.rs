use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures of the guest account merge transaction.
///
/// `SelfMerge` and `InvalidTarget` are user-correctable and map to 400-class
/// responses; `MergeFailed` is an opaque infrastructure failure. In every
/// error case the merge transaction is rolled back in full, so no partial
/// re-pointing of guest rows is ever observable.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Cannot merge a user into itself")]
    SelfMerge,
    #[error("New user does not exist")]
    InvalidTarget,
    #[error("Failed to merge guest account data")]
    MergeFailed(#[source] sea_orm::DbErr),
}

impl IntoResponse for MergeError {
    fn into_response(self) -> Response {
        match self {
            Self::SelfMerge | Self::InvalidTarget => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MergeFailed(ref cause) => {
                tracing::error!(cause = %cause, "{}", self);

                InternalServerError(self).into_response()
            }
        }
    }
}
