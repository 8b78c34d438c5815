use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    model::api::LoginDto,
    server::{
        data::BackendClient,
        error::{backend::BackendError, Error},
    },
};

#[derive(Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct AuthRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> AuthRepository<'a> {
    /// Creates a new instance of [`AuthRepository`]
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Exchanges admin credentials for a backend bearer token via `POST /admin/login`
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token issued by the backend
    /// - `Err(BackendError::LoginRejected)` - Backend's `message`, or "Login failed"
    /// - `Err(BackendError::LoginUnreachable)` - Backend could not be reached
    pub async fn login(&self, credentials: &LoginDto) -> Result<String, Error> {
        let response = self
            .client
            .post("/admin/login")
            .json(credentials)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("Login request failed: {}", err);

                BackendError::LoginUnreachable
            })?;

        let status = response.status();
        let body: LoginResponse = response.json().await.unwrap_or_default();

        if status.is_success() {
            if let Some(token) = body.token.filter(|t| !t.is_empty()) {
                return Ok(token);
            }
        }

        let message = body
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Login failed".to_string());

        Err(BackendError::LoginRejected(message).into())
    }
}
