use crate::server::data::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

/// Builds state pointing at an arbitrary backend base URL, used by tests against a mock server
impl From<String> for AppState {
    fn from(base_url: String) -> Self {
        Self {
            backend: BackendClient::from_base_url(base_url),
        }
    }
}
