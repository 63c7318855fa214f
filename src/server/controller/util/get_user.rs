use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
    },
};

/// Retrieves the current user from session and then from database
///
/// # Returns
/// - `Ok(UserDto)`: User found, containing the opaque user id and guest flag
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user id in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User id in session
///   but no matching row in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let user_repository = UserRepository::new(&state.db);

    let Some(user) = user_repository.get(&user_id).await? else {
        // A guest merged on another device lands here after its deletion;
        // clearing the session lets the client start over cleanly
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(UserDto {
        id: user.id,
        is_guest: user.is_guest,
    })
}
