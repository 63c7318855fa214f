use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        tracking::{CreateDrinkDto, DrinkDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::drink::DrinkService,
    },
};

pub static DRINK_TAG: &str = "drink";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct SearchParams {
    /// Search term; fewer than two characters returns an empty list
    pub term: String,
}

pub(super) fn to_dto(drink: entity::drink::Model) -> DrinkDto {
    DrinkDto {
        id: drink.id,
        name: drink.name,
        caffeine_mg: drink.caffeine_mg,
        base_size_ml: drink.base_size_ml,
        created_by_user_id: drink.created_by_user_id,
    }
}

/// Search the drink catalog by name
///
/// Case-insensitive substring search with the current user's custom drinks
/// listed before global drinks.
#[utoipa::path(
    get,
    path = "/api/drinks/search",
    tag = DRINK_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching drinks", body = Vec<DrinkDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_drinks(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let drink_service = DrinkService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let drinks = drink_service.search(&user.id, &params.term).await?;

    let drink_dtos: Vec<DrinkDto> = drinks.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(drink_dtos)))
}

/// Create a custom drink owned by the current user
#[utoipa::path(
    post,
    path = "/api/drinks",
    tag = DRINK_TAG,
    request_body = CreateDrinkDto,
    responses(
        (status = 201, description = "Drink created", body = DrinkDto),
        (status = 400, description = "Invalid drink fields", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drink(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateDrinkDto>,
) -> Result<impl IntoResponse, Error> {
    let drink_service = DrinkService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let drink = drink_service
        .create_drink(&user.id, &create.name, create.caffeine_mg, create.base_size_ml)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(drink))))
}
