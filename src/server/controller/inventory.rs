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
        inventory::{RecordFormDto, RecordListDto},
        resource::Resource,
    },
    server::{
        controller::util::session::clear_if_rejected,
        error::{validation::ValidationError, Error},
        model::{app::AppState, session::auth::AdminSession},
        service::inventory::InventoryService,
    },
};

pub static ADMIN_TAG: &str = "admin";

fn parse_resource(slug: &str) -> Result<Resource, Error> {
    Resource::from_slug(slug).ok_or_else(|| ValidationError::UnknownResource(slug.to_string()).into())
}

/// List every record of a collection
#[utoipa::path(
    get,
    path = "/api/admin/{resource}",
    tag = ADMIN_TAG,
    params(("resource" = String, Path, description = "hotels, seatrips, or safaris")),
    responses(
        (status = 200, description = "Normalized records", body = RecordListDto),
        (status = 401, description = "Not logged in, or the session expired", body = ErrorDto),
        (status = 404, description = "Unknown collection", body = ErrorDto)
    ),
)]
pub async fn list_records(
    State(state): State<AppState>,
    session: Session,
    Path(resource): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let resource = parse_resource(&resource)?;
    let admin = AdminSession::from_session(&session).await?;

    let result = InventoryService::new(&state.backend)
        .list(&admin, resource)
        .await;
    let records = clear_if_rejected(&session, result).await?;

    Ok(Json(records))
}

/// Create a record
#[utoipa::path(
    post,
    path = "/api/admin/{resource}",
    tag = ADMIN_TAG,
    params(("resource" = String, Path, description = "hotels, seatrips, or safaris")),
    request_body = RecordFormDto,
    responses(
        (status = 201, description = "Created; body is whatever the backend returned", body = Object),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in, or the session expired", body = ErrorDto)
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    session: Session,
    Path(resource): Path<String>,
    Json(form): Json<RecordFormDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = parse_resource(&resource)?;
    let admin = AdminSession::from_session(&session).await?;

    let result = InventoryService::new(&state.backend)
        .save(&admin, resource, None, &form)
        .await;
    let saved = clear_if_rejected(&session, result).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update a record
#[utoipa::path(
    post,
    path = "/api/admin/{resource}/{id}",
    tag = ADMIN_TAG,
    params(
        ("resource" = String, Path, description = "hotels, seatrips, or safaris"),
        ("id" = String, Path, description = "Backend record id")
    ),
    request_body = RecordFormDto,
    responses(
        (status = 200, description = "Updated; body is whatever the backend returned", body = Object),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in, or the session expired", body = ErrorDto)
    ),
)]
pub async fn update_record(
    State(state): State<AppState>,
    session: Session,
    Path((resource, id)): Path<(String, String)>,
    Json(form): Json<RecordFormDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = parse_resource(&resource)?;
    let admin = AdminSession::from_session(&session).await?;

    let result = InventoryService::new(&state.backend)
        .save(&admin, resource, Some(&id), &form)
        .await;
    let saved = clear_if_rejected(&session, result).await?;

    Ok(Json(saved))
}

/// Delete a record
#[utoipa::path(
    delete,
    path = "/api/admin/{resource}/{id}",
    tag = ADMIN_TAG,
    params(
        ("resource" = String, Path, description = "hotels, seatrips, or safaris"),
        ("id" = String, Path, description = "Backend record id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Not logged in, or the session expired", body = ErrorDto),
        (status = 404, description = "Unknown collection", body = ErrorDto)
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    session: Session,
    Path((resource, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let resource = parse_resource(&resource)?;
    let admin = AdminSession::from_session(&session).await?;

    let result = InventoryService::new(&state.backend)
        .delete(&admin, resource, &id)
        .await;
    clear_if_rejected(&session, result).await?;

    Ok(StatusCode::NO_CONTENT)
}
