//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's API router with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Exchange admin credentials for a session
/// - `GET /api/auth/logout` - Clear the session and redirect to the login screen
/// - `GET /api/auth/session` - Report whether an admin session is active
/// - `GET /api/trips` - Public trip cards from all three collections
/// - `GET /api/admin/dashboard` - Admin overview of every collection
/// - `GET|POST /api/admin/{resource}` - List or create records
/// - `POST|DELETE /api/admin/{resource}/{id}` - Update or delete a record
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { backend });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Sky Egypt", description = "Sky Egypt API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Admin session routes"),
        (name = controller::trip::TRIP_TAG, description = "Public trip listing"),
        (name = controller::inventory::ADMIN_TAG, description = "Inventory administration"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::trip::get_trips))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(
            controller::inventory::list_records,
            controller::inventory::create_record
        ))
        .routes(routes!(
            controller::inventory::update_record,
            controller::inventory::delete_record
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
