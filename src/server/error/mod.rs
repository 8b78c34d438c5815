//! Error types for the Sky Egypt server.
//!
//! Each domain (admin session, backend requests, configuration, form validation) has
//! its own `thiserror` enum with its own HTTP mapping. They are aggregated into
//! [`Error`] so handlers and services can propagate everything with `?`.

pub mod auth;
pub mod backend;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, backend::BackendError, config::ConfigError, validation::ValidationError,
    },
};

/// Main error type for the Sky Egypt server.
///
/// Uses `#[from]` so domain errors and library errors convert through `?`. The
/// `IntoResponse` implementation delegates to the domain error's own mapping and falls
/// back to a logged 500 for everything else.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin session error (missing or rejected token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Remote backend error (unreachable, non-2xx, failed aggregate).
    #[error(transparent)]
    BackendError(#[from] BackendError),
    /// Submitted form failed validation before reaching the backend.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::BackendError(BackendError::Request(err))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BackendError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details are not
/// leaked to the browser.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
