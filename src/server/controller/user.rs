use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        tracking::{DrinkDto, FavoriteDto},
    },
    server::{
        controller::{drink::to_dto, util::get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::drink::DrinkService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the current user's favorite drinks
#[utoipa::path(
    get,
    path = "/api/user/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorite drinks, most recently favorited first", body = Vec<DrinkDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let drink_service = DrinkService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let favorites = drink_service.get_favorites(&user.id).await?;

    let drink_dtos: Vec<DrinkDto> = favorites.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(drink_dtos)))
}

/// Mark a drink as a favorite of the current user
///
/// Favoriting a drink that is already a favorite is a no-op.
#[utoipa::path(
    post,
    path = "/api/user/favorites",
    tag = USER_TAG,
    request_body = FavoriteDto,
    responses(
        (status = 204, description = "Drink favorited"),
        (status = 404, description = "User or drink not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(favorite): Json<FavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let drink_service = DrinkService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    drink_service.add_favorite(&user.id, favorite.drink_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a drink from the current user's favorites
#[utoipa::path(
    delete,
    path = "/api/user/favorites/{drink_id}",
    tag = USER_TAG,
    params(
        ("drink_id" = i32, Path, description = "ID of the drink to unfavorite")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(drink_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let drink_service = DrinkService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let removed = drink_service.remove_favorite(&user.id, drink_id).await?;

    if !removed {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("Drink {} is not a favorite", drink_id),
            }),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
