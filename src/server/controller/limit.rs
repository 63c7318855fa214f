use axum::{
    extract::{Query, State},
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
        tracking::{DailyLimitDto, LimitStatusDto, SetLimitDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::limit::LimitService,
    },
};

pub static LIMIT_TAG: &str = "limit";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct LimitStatusParams {
    /// UTC calendar date to resolve the limit for; defaults to today (UTC)
    pub date: Option<NaiveDate>,
}

/// Get the daily limit in effect for the current user on a date
#[utoipa::path(
    get,
    path = "/api/limit",
    tag = LIMIT_TAG,
    params(LimitStatusParams),
    responses(
        (status = 200, description = "Limit in effect for the date, if any", body = LimitStatusDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_limit(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LimitStatusParams>,
) -> Result<impl IntoResponse, Error> {
    let limit_service = LimitService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let limit_mg = limit_service.effective_limit(&user.id, date).await?;

    Ok((StatusCode::OK, Json(LimitStatusDto { date, limit_mg })))
}

/// Set a new daily limit for the current user
///
/// Limits are versioned by effective date; this appends a record rather than
/// editing history, so past days keep the limit that applied then.
#[utoipa::path(
    post,
    path = "/api/limit",
    tag = LIMIT_TAG,
    request_body = SetLimitDto,
    responses(
        (status = 201, description = "Limit recorded", body = DailyLimitDto),
        (status = 400, description = "Non-positive limit", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_limit(
    State(state): State<AppState>,
    session: Session,
    Json(set): Json<SetLimitDto>,
) -> Result<impl IntoResponse, Error> {
    let limit_service = LimitService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let effective_from = set.effective_from.unwrap_or_else(|| Utc::now().date_naive());

    let limit = limit_service
        .set_limit(&user.id, set.limit_mg, effective_from)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DailyLimitDto {
            limit_mg: limit.limit_mg,
            effective_from: limit.effective_from,
        }),
    ))
}

/// Get the current user's full limit history, most recent first
#[utoipa::path(
    get,
    path = "/api/limit/history",
    tag = LIMIT_TAG,
    responses(
        (status = 200, description = "Limit history", body = Vec<DailyLimitDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_limit_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let limit_service = LimitService::new(&state.db);

    let user = get_user_from_session(&state, &session).await?;

    let history = limit_service.get_history(&user.id).await?;

    let limit_dtos: Vec<DailyLimitDto> = history
        .into_iter()
        .map(|l| DailyLimitDto {
            limit_mg: l.limit_mg,
            effective_from: l.effective_from,
        })
        .collect();

    Ok((StatusCode::OK, Json(limit_dtos)))
}
