//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications
//! via utoipa, and Swagger UI serves the interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/guest` - Start a guest session
/// - `POST /api/auth/login` - Sign in, merging any guest session data
/// - `POST /api/auth/logout` - Log out the current user
/// - `GET /api/auth/user` - Get the current session user
/// - `POST /api/consumption` - Log a drink consumption
/// - `GET /api/consumption` - Latest consumption entries
/// - `DELETE /api/consumption/{entry_id}` - Delete a consumption entry
/// - `GET /api/consumption/daily` - Daily caffeine status for a date
/// - `GET /api/limit` - Limit in effect for a date
/// - `POST /api/limit` - Set a new daily limit
/// - `GET /api/limit/history` - Full limit history
/// - `GET /api/drinks/search` - Search the drink catalog
/// - `POST /api/drinks` - Create a custom drink
/// - `GET /api/user/favorites` - Favorite drinks
/// - `POST /api/user/favorites` - Favorite a drink
/// - `DELETE /api/user/favorites/{drink_id}` - Unfavorite a drink
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Jolt", description = "Jolt caffeine tracking API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session API routes"),
        (name = controller::consumption::CONSUMPTION_TAG, description = "Consumption logging and daily status API routes"),
        (name = controller::limit::LIMIT_TAG, description = "Daily limit API routes"),
        (name = controller::drink::DRINK_TAG, description = "Drink catalog API routes"),
        (name = controller::user::USER_TAG, description = "User favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::start_guest))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::consumption::log_consumption,
            controller::consumption::get_recent_consumption
        ))
        .routes(routes!(controller::consumption::delete_consumption))
        .routes(routes!(controller::consumption::get_daily_status))
        .routes(routes!(
            controller::limit::get_limit,
            controller::limit::set_limit
        ))
        .routes(routes!(controller::limit::get_limit_history))
        .routes(routes!(controller::drink::search_drinks))
        .routes(routes!(controller::drink::create_drink))
        .routes(routes!(
            controller::user::get_favorites,
            controller::user::add_favorite
        ))
        .routes(routes!(controller::user::remove_favorite))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
