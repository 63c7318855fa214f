use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::account::AccountService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Start a guest session
///
/// Creates a fresh guest account and binds it to the session so tracking can
/// begin immediately without signing in.
#[utoipa::path(
    post,
    path = "/api/auth/guest",
    tag = AUTH_TAG,
    responses(
        (status = 201, description = "Guest account created and bound to session", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_guest(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    let guest = account_service.start_guest().await?;

    SessionUserId::insert(&session, &guest.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserDto {
            id: guest.id,
            is_guest: guest.is_guest,
        }),
    ))
}

/// Sign in with an identity-provider user id
///
/// Creates the account on first sign-in. When the session previously held a
/// guest account, the guest's tracked data is merged into the signed-in
/// account and the guest is deleted.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in; any guest data was carried over", body = UserDto),
        (status = 400, description = "Blank user id or invalid merge", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    let session_user_id = SessionUserId::get(&session).await?;

    let user = account_service
        .sign_in(&login.user_id, session_user_id)
        .await?;

    SessionUserId::insert(&session, &user.id).await?;

    Ok((
        StatusCode::OK,
        Json(UserDto {
            id: user.id,
            is_guest: user.is_guest,
        }),
    ))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the current user bound to the session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
