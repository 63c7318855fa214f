use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Drink {0} does not exist")]
    DrinkNotFound(i32),
    #[error("Quantity must be a positive number of servings, got {0}")]
    InvalidQuantity(i32),
    #[error("Quantity {0} is too large for this drink")]
    QuantityTooLarge(i32),
    #[error("Daily limit must be a positive number of milligrams, got {0}")]
    InvalidLimit(i32),
    #[error("Invalid drink: {0}")]
    InvalidDrink(String),
}

impl IntoResponse for TrackingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DrinkNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidQuantity(_)
            | Self::QuantityTooLarge(_)
            | Self::InvalidLimit(_)
            | Self::InvalidDrink(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
