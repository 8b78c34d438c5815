use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, LoginDto, SessionDto},
    server::{
        error::Error,
        model::{app::AppState, session::auth::SessionAuthToken},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in to the admin console
///
/// Exchanges the credentials for a backend bearer token and keeps the token in the
/// server-side session. The browser only ever receives the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session established", body = SessionDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Backend rejected the credentials", body = ErrorDto),
        (status = 502, description = "Backend unreachable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.backend).login(&credentials).await?;

    SessionAuthToken::insert(&session, &token).await?;

    tracing::info!(username = %credentials.username, "Admin logged in");

    Ok(Json(SessionDto {
        authenticated: true,
    }))
}

/// Logs the admin out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the login screen
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing an empty session errors in the store, so only clear when logged in
    if SessionAuthToken::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/admin/login"))
}

/// Report whether the current session holds a backend token
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session state", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let authenticated = SessionAuthToken::get(&session).await?.is_some();

    Ok(Json(SessionDto { authenticated }))
}
