use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// A public endpoint that answered with a non-2xx status during aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointFailure {
    pub label: &'static str,
    pub status: u16,
    pub reason: String,
}

impl fmt::Display for EndpointFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{} API: {}", self.label, self.status)
        } else {
            write!(f, "{} API: {} {}", self.label, self.status, self.reason)
        }
    }
}

fn join_failures(failures: &[EndpointFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection, TLS, or body transfer failure
    #[error("Failed to reach backend: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx response; the body is surfaced to the user verbatim
    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// One or more public listing endpoints failed
    #[error("API Errors: {}", join_failures(.0))]
    Aggregate(Vec<EndpointFailure>),
    #[error("{0}")]
    LoginRejected(String),
    #[error("Network error")]
    LoginUnreachable,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            Self::Request(ref err) => {
                tracing::warn!("{}", err);

                error_response(StatusCode::BAD_GATEWAY, self.to_string())
            }
            Self::Status { status, body } => {
                tracing::debug!(status = %status, "Backend request failed");

                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                let message = if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Request failed").to_string()
                } else {
                    body
                };

                error_response(status, message)
            }
            Self::Aggregate(ref failures) => {
                tracing::warn!(failed = failures.len(), "{}", self);

                error_response(StatusCode::BAD_GATEWAY, self.to_string())
            }
            Self::LoginRejected(message) => error_response(StatusCode::UNAUTHORIZED, message),
            Self::LoginUnreachable => error_response(StatusCode::BAD_GATEWAY, self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_names_every_failing_endpoint() {
        let err = BackendError::Aggregate(vec![
            EndpointFailure {
                label: "Sea Trips",
                status: 500,
                reason: "Internal Server Error".to_string(),
            },
            EndpointFailure {
                label: "Safari Trips",
                status: 404,
                reason: String::new(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "API Errors: Sea Trips API: 500 Internal Server Error, Safari Trips API: 404"
        );
    }

    #[test]
    fn status_error_keeps_backend_status() {
        let resp = BackendError::Status {
            status: 422,
            body: "{\"message\":\"The name field is required.\"}".to_string(),
        }
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn non_error_status_maps_to_bad_gateway() {
        let resp = BackendError::Status {
            status: 302,
            body: String::new(),
        }
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
