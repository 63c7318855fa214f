use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        tracking::{ConsumptionEntryDto, DailyStatusDto, LogConsumptionDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::consumption::ConsumptionService,
    },
};

pub static CONSUMPTION_TAG: &str = "consumption";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct DailyStatusParams {
    /// UTC calendar date to report on; defaults to today (UTC)
    pub date: Option<NaiveDate>,
}

fn to_dto(entry: entity::consumption_entry::Model) -> ConsumptionEntryDto {
    ConsumptionEntryDto {
        id: entry.id,
        drink_id: entry.drink_id,
        quantity: entry.quantity,
        caffeine_mg: entry.caffeine_mg,
        consumed_at: entry.consumed_at,
    }
}

/// Log a drink consumption for the current user
#[utoipa::path(
    post,
    path = "/api/consumption",
    tag = CONSUMPTION_TAG,
    request_body = LogConsumptionDto,
    responses(
        (status = 201, description = "Consumption entry logged", body = ConsumptionEntryDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 404, description = "User or drink not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_consumption(
    State(state): State<AppState>,
    session: Session,
    Json(log): Json<LogConsumptionDto>,
) -> Result<impl IntoResponse, Error> {
    let consumption_service = ConsumptionService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let entry = consumption_service
        .log_drink(&user.id, log.drink_id, log.quantity, log.consumed_at)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(entry))))
}

/// Get the current user's latest consumption entries, newest first
#[utoipa::path(
    get,
    path = "/api/consumption",
    tag = CONSUMPTION_TAG,
    responses(
        (status = 200, description = "Latest consumption entries", body = Vec<ConsumptionEntryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_consumption(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let consumption_service = ConsumptionService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let entries = consumption_service.get_recent_entries(&user.id).await?;

    let entry_dtos: Vec<ConsumptionEntryDto> = entries.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(entry_dtos)))
}

/// Delete one of the current user's consumption entries
#[utoipa::path(
    delete,
    path = "/api/consumption/{entry_id}",
    tag = CONSUMPTION_TAG,
    params(
        ("entry_id" = i32, Path, description = "ID of the entry to delete")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "User or entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_consumption(
    State(state): State<AppState>,
    session: Session,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let consumption_service = ConsumptionService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let deleted = consumption_service.delete_entry(&user.id, entry_id).await?;

    if !deleted {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("Entry {} not found", entry_id),
            }),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Get the current user's caffeine status for a UTC calendar date
///
/// Reports the exact milligram total for the date alongside the limit in
/// effect for that date, if any. A total equal to the limit is still within
/// it; `remaining_mg` goes negative once the limit is exceeded.
#[utoipa::path(
    get,
    path = "/api/consumption/daily",
    tag = CONSUMPTION_TAG,
    params(DailyStatusParams),
    responses(
        (status = 200, description = "Daily caffeine status", body = DailyStatusDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_status(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DailyStatusParams>,
) -> Result<impl IntoResponse, Error> {
    let consumption_service = ConsumptionService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let status = consumption_service.daily_status(&user.id, date).await?;

    Ok((
        StatusCode::OK,
        Json(DailyStatusDto {
            date: status.date,
            total_mg: status.total_mg,
            limit_mg: status.limit_mg,
            remaining_mg: status.remaining_mg,
            over_limit: status.over_limit,
        }),
    ))
}
