//! Calls to the application's own `/api` routes.
//!
//! Requests are only sent from the browser. Builds without the `web` feature render
//! the client on the server, where every call resolves to [`ApiError::Message`].

use serde::de::DeserializeOwned;
use thiserror::Error;

use skyegypt::model::{
    api::{ErrorDto, LoginDto, SessionDto},
    dashboard::DashboardDto,
    inventory::{RecordFormDto, RecordListDto},
    resource::Resource,
    trip::TripDto,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Not logged in, or the backend rejected the session's token
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Message(String),
}

enum Method {
    Get,
    Post,
    Delete,
}

#[cfg(feature = "web")]
async fn send(method: Method, path: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Delete => Request::delete(path),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(body),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Message(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Ok((status, text))
}

#[cfg(not(feature = "web"))]
async fn send(_method: Method, _path: &str, _body: Option<String>) -> Result<(u16, String), ApiError> {
    Err(ApiError::Message(
        "Requests can only be sent from the browser".to_string(),
    ))
}

/// Turns a non-2xx response into an error, preferring the `{error}` message
fn check_status(status: u16, text: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorDto>(text)
        .map(|dto| dto.error)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                text.to_string()
            }
        });

    if status == 401 {
        Err(ApiError::Unauthorized(message))
    } else {
        Err(ApiError::Message(message))
    }
}

async fn fetch_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let (status, text) = send(method, path, body).await?;
    check_status(status, &text)?;

    serde_json::from_str(&text)
        .map_err(|e| ApiError::Message(format!("Failed to parse response: {}", e)))
}

async fn fetch_empty(method: Method, path: &str, body: Option<String>) -> Result<(), ApiError> {
    let (status, text) = send(method, path, body).await?;
    check_status(status, &text)
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Option<String>, ApiError> {
    serde_json::to_string(value)
        .map(Some)
        .map_err(|e| ApiError::Message(format!("Failed to encode request: {}", e)))
}

pub async fn get_trips() -> Result<Vec<TripDto>, ApiError> {
    fetch_json(Method::Get, "/api/trips", None).await
}

pub async fn get_session() -> Result<SessionDto, ApiError> {
    fetch_json(Method::Get, "/api/auth/session", None).await
}

pub async fn login(credentials: &LoginDto) -> Result<SessionDto, ApiError> {
    fetch_json(Method::Post, "/api/auth/login", to_body(credentials)?).await
}

pub async fn get_dashboard() -> Result<DashboardDto, ApiError> {
    fetch_json(Method::Get, "/api/admin/dashboard", None).await
}

pub async fn get_records(resource: Resource) -> Result<RecordListDto, ApiError> {
    fetch_json(Method::Get, &format!("/api/admin/{}", resource), None).await
}

/// Creates the record when `id` is `None`, otherwise updates it
pub async fn save_record(
    resource: Resource,
    id: Option<&str>,
    form: &RecordFormDto,
) -> Result<(), ApiError> {
    let path = match id {
        Some(id) => format!("/api/admin/{}/{}", resource, id),
        None => format!("/api/admin/{}", resource),
    };

    fetch_empty(Method::Post, &path, to_body(form)?).await
}

pub async fn delete_record(resource: Resource, id: &str) -> Result<(), ApiError> {
    fetch_empty(
        Method::Delete,
        &format!("/api/admin/{}/{}", resource, id),
        None,
    )
    .await
}
