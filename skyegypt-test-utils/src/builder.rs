//! Declarative test setup.
//!
//! Queue mock backend endpoints on a [`TestBuilder`]; they are all created during
//! [`TestBuilder::build`].

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for a mock backend and an empty session.
pub struct TestBuilder {
    // Custom mocks, created first so tests can stack error-then-success on one path
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // (path, payload, expected_requests)
    list_endpoints: Vec<(String, Value, usize)>,
    // (path, status, payload, expected_requests)
    public_endpoints: Vec<(String, usize, Value, usize)>,
    // (status, payload)
    login_endpoints: Vec<(usize, Value)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            list_endpoints: Vec::new(),
            public_endpoints: Vec::new(),
            login_endpoints: Vec::new(),
        }
    }

    /// Add an authenticated listing endpoint.
    ///
    /// The mock only matches requests carrying `Authorization: Bearer TEST_AUTH_TOKEN`.
    ///
    /// # Arguments
    /// - `path` - Backend path, e.g. `/hotels`
    /// - `payload` - JSON body in any of the envelope shapes the backend uses
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_list_endpoint(
        mut self,
        path: impl Into<String>,
        payload: Value,
        expected_requests: usize,
    ) -> Self {
        self.list_endpoints
            .push((path.into(), payload, expected_requests));
        self
    }

    /// Add an unauthenticated public listing endpoint answering with `status`.
    pub fn with_public_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        payload: Value,
        expected_requests: usize,
    ) -> Self {
        self.public_endpoints
            .push((path.into(), status, payload, expected_requests));
        self
    }

    /// Add the `POST /admin/login` endpoint answering with `status` and `payload`.
    pub fn with_login_endpoint(mut self, status: usize, payload: Value) -> Self {
        self.login_endpoints.push((status, payload));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create every queued endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, payload, expected) in self.list_endpoints {
            mocks.push(setup.backend().create_list_endpoint(&path, &payload, expected)?);
        }

        for (path, status, payload, expected) in self.public_endpoints {
            mocks.push(
                setup
                    .backend()
                    .create_public_endpoint(&path, status, &payload, expected)?,
            );
        }

        for (status, payload) in self.login_endpoints {
            mocks.push(setup.backend().create_login_endpoint(status, &payload)?);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
