use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// A form submission rejected before reaching the backend
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid record id: {0:?}")]
    InvalidId(String),
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
