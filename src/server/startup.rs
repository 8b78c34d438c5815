use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, data::BackendClient, error::Error};

/// Build the backend client from the configured base URL and user agent
pub fn build_backend_client(config: &Config) -> Result<BackendClient, Error> {
    let client = BackendClient::new(&config.backend_api_url, &config.user_agent)?;

    Ok(client)
}

/// Configure session management backed by an in-process memory store
///
/// Sessions do not survive a restart; admins log in again afterwards.
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
