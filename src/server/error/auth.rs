use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Raised before any backend request is made
    #[error("No authentication token found")]
    TokenNotInSession,
    /// The backend answered 401 or 419 for the session's token
    #[error("Backend rejected the session token with status {0}")]
    TokenRejected(u16),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::TokenNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::TokenRejected(status) => {
                tracing::debug!(status = %status, "{}", self);

                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Session expired, please log in again",
                )
            }
        }
    }
}
