use dioxus_logger::tracing;
use reqwest::{header::ACCEPT, RequestBuilder, Response};

use crate::server::{
    error::{auth::AuthError, backend::BackendError, config::ConfigError, Error},
    model::session::auth::AdminSession,
};

/// HTTP client bound to the inventory backend's base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client sending `user_agent` on every request
    ///
    /// # Returns
    /// - `Ok(BackendClient)` - Client ready for use
    /// - `Err(ConfigError::HttpClient)` - TLS backend failed to initialize
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url: trim_base_url(base_url.into()),
        })
    }

    /// Builds a client with reqwest's defaults
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_base_url(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path)).header(ACCEPT, "application/json")
    }

    pub(super) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path)).header(ACCEPT, "application/json")
    }

    pub(super) fn delete(&self, path: &str) -> RequestBuilder {
        self.http
            .delete(self.url(path))
            .header(ACCEPT, "application/json")
    }

    /// Attaches the admin's bearer token to a request
    pub(super) fn authorized(request: RequestBuilder, admin: &AdminSession) -> RequestBuilder {
        request.bearer_auth(admin.token())
    }
}

fn trim_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Passes 2xx responses through and converts everything else into an error.
///
/// 401 and 419 mean the token was rejected and map to [`AuthError::TokenRejected`]; any
/// other failure keeps the backend's status and raw body text.
pub(super) async fn ensure_success(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status.as_u16() == 401 || status.as_u16() == 419 {
        return Err(AuthError::TokenRejected(status.as_u16()).into());
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();

    tracing::debug!(status = %status, path = %url, "Backend returned an error");

    Err(BackendError::Status {
        status: status.as_u16(),
        body,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let client = BackendClient::from_base_url("http://localhost:9000/api/");
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert_eq!(client.url("/hotels"), "http://localhost:9000/api/hotels");
    }

    mod new {
        use skyegypt_test_utils::prelude::*;

        use crate::server::data::BackendClient;

        #[tokio::test]
        /// Expect the configured user agent on every backend request
        async fn sends_configured_user_agent() -> Result<(), TestError> {
            let mut test = TestBuilder::new().build().await?;
            test.mock(|server| {
                server
                    .mock("GET", "/hotels")
                    .match_header("user-agent", TEST_USER_AGENT)
                    .match_header("accept", "application/json")
                    .with_status(200)
                    .with_body("[]")
                    .expect(1)
                    .create()
            });

            let client = BackendClient::new(test.url(), TEST_USER_AGENT).unwrap();
            let response = client.get("/hotels").send().await.unwrap();

            assert!(response.status().is_success());
            test.assert_mocks();

            Ok(())
        }
    }
}
