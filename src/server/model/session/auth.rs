//! Admin session data models.
//!
//! The backend bearer token lives only in the server-side session; the browser holds
//! nothing but the HttpOnly session cookie. Handlers turn the stored token into an
//! [`AdminSession`] and pass it explicitly to every backend call that needs auth.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for storing the backend bearer token.
///
/// Namespaced under "skyegypt:auth:" to avoid collisions with other session data.
pub const SESSION_AUTH_TOKEN_KEY: &str = "skyegypt:auth:token";

/// Session wrapper for the backend bearer token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthToken(pub String);

impl SessionAuthToken {
    /// Stores the token obtained from `/admin/login`, replacing any previous token.
    ///
    /// # Arguments
    /// - `session` - Admin's session
    /// - `token` - Bearer token issued by the backend
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(Error::SessionError)` - Session storage failed
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_TOKEN_KEY, SessionAuthToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the token without removing it.
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .get::<SessionAuthToken>(SESSION_AUTH_TOKEN_KEY)
            .await?
            .map(|SessionAuthToken(token)| token)
            .filter(|token| !token.is_empty());

        Ok(token)
    }
}

/// Credentials for one admin's backend requests.
///
/// Obtained from the session once per request and handed to backend-calling
/// collaborators instead of having them read ambient state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Loads the admin session from the request's session store.
    ///
    /// # Returns
    /// - `Ok(AdminSession)` - A token is present
    /// - `Err(Error::AuthError(AuthError::TokenNotInSession))` - Nobody is logged in
    /// - `Err(Error::SessionError)` - Session retrieval failed
    pub async fn from_session(session: &Session) -> Result<Self, Error> {
        match SessionAuthToken::get(session).await? {
            Some(token) => Ok(Self::new(token)),
            None => Err(AuthError::TokenNotInSession.into()),
        }
    }
}

#[cfg(test)]
mod tests {

    mod insert {
        use skyegypt_test_utils::prelude::*;

        use crate::server::model::session::auth::SessionAuthToken;

        #[tokio::test]
        /// Expect a stored token to be retrievable unchanged
        async fn inserted_token_is_retrievable() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            SessionAuthToken::insert(&test.session, TEST_AUTH_TOKEN)
                .await
                .unwrap();

            let token = SessionAuthToken::get(&test.session).await.unwrap();
            assert_eq!(token.as_deref(), Some(TEST_AUTH_TOKEN));

            Ok(())
        }

        #[tokio::test]
        /// Expect a second login to overwrite the previous token
        async fn overwrites_existing_token() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            SessionAuthToken::insert(&test.session, "first").await.unwrap();
            SessionAuthToken::insert(&test.session, "second").await.unwrap();

            let token = SessionAuthToken::get(&test.session).await.unwrap();
            assert_eq!(token.as_deref(), Some("second"));

            Ok(())
        }
    }

    mod from_session {
        use skyegypt_test_utils::prelude::*;

        use crate::server::{
            error::{auth::AuthError, Error},
            model::session::auth::{AdminSession, SessionAuthToken},
        };

        #[tokio::test]
        /// Expect TokenNotInSession when nobody has logged in
        async fn errors_without_token() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let result = AdminSession::from_session(&test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::TokenNotInSession))
            ));

            Ok(())
        }

        #[tokio::test]
        /// Expect an empty stored token to count as logged out
        async fn empty_token_counts_as_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            SessionAuthToken::insert(&test.session, "").await.unwrap();

            let result = AdminSession::from_session(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }

        #[tokio::test]
        /// Expect the stored token to be carried by the admin session
        async fn carries_stored_token() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            SessionAuthToken::insert(&test.session, TEST_AUTH_TOKEN)
                .await
                .unwrap();

            let admin = AdminSession::from_session(&test.session).await.unwrap();

            assert_eq!(admin.token(), TEST_AUTH_TOKEN);

            Ok(())
        }
    }
}
