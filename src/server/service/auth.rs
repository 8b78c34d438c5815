use crate::{
    model::api::LoginDto,
    server::{
        data::{auth::AuthRepository, BackendClient},
        error::{validation::ValidationError, Error},
    },
};

/// Admin login against the inventory backend.
pub struct AuthService<'a> {
    client: &'a BackendClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Validates credentials and exchanges them for a bearer token
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token to store in the admin's session
    /// - `Err(Error::ValidationError)` - Username or password left blank
    /// - `Err(Error::BackendError)` - Backend rejected the login or was unreachable
    pub async fn login(&self, credentials: &LoginDto) -> Result<String, Error> {
        if credentials.username.trim().is_empty() {
            return Err(ValidationError::MissingField("Username").into());
        }
        if credentials.password.is_empty() {
            return Err(ValidationError::MissingField("Password").into());
        }

        AuthRepository::new(self.client).login(credentials).await
    }
}
