//! Mock inventory backend endpoints.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_AUTH_TOKEN, error::TestError, TestContext};

impl TestContext {
    pub fn backend<'a>(&'a mut self) -> BackendFixtures<'a> {
        BackendFixtures { setup: self }
    }
}

pub struct BackendFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> BackendFixtures<'a> {
    /// Mock `GET {path}` that requires the test bearer token.
    pub fn create_list_endpoint(
        &mut self,
        path: &str,
        payload: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("GET", path)
            .match_header("authorization", format!("Bearer {}", TEST_AUTH_TOKEN).as_str())
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(payload)?)
            .expect(expected_requests)
            .create())
    }

    /// Mock unauthenticated `GET {path}` with the given status.
    pub fn create_public_endpoint(
        &mut self,
        path: &str,
        status: usize,
        payload: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("GET", path)
            .match_header("authorization", Matcher::Missing)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(payload)?)
            .expect(expected_requests)
            .create())
    }

    /// Mock `POST /admin/login` expecting the test credentials as JSON.
    pub fn create_login_endpoint(
        &mut self,
        status: usize,
        payload: &Value,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("POST", "/admin/login")
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(payload)?)
            .expect(1)
            .create())
    }
}
