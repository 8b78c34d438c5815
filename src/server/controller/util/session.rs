use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Clears the session when the backend rejected its token, then passes the result on
///
/// The client reacts to the resulting 401 by sending the admin to the login screen.
pub async fn clear_if_rejected<T>(session: &Session, result: Result<T, Error>) -> Result<T, Error> {
    if let Err(Error::AuthError(AuthError::TokenRejected(status))) = &result {
        session.clear().await;

        tracing::debug!(
            status = %status,
            "Cleared session after the backend rejected its token"
        );
    }

    result
}
