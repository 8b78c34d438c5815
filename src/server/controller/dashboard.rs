use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::{inventory::ADMIN_TAG, util::session::clear_if_rejected},
        error::Error,
        model::{app::AppState, session::auth::AdminSession},
        service::dashboard::DashboardService,
    },
};

/// Counts, columns, and preview rows for every inventory collection
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardDto),
        (status = 401, description = "Not logged in, or the session expired", body = ErrorDto),
        (status = 502, description = "Backend unreachable", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = AdminSession::from_session(&session).await?;

    let result = DashboardService::new(&state.backend).overview(&admin).await;
    let dashboard = clear_if_rejected(&session, result).await?;

    Ok(Json(dashboard))
}
