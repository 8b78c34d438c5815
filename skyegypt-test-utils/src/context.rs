//! Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// A mock inventory backend plus an empty admin session.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_list_endpoint("/hotels", factory::hotels_payload(3), 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
/// // ... exercise handlers ...
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session for admin login flows, backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server standing in for the inventory backend
    pub(crate) server: ServerGuard,
    /// Mock endpoints kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock backend, without a trailing slash
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Converts the mock backend URL into any type constructible from a base URL
    ///
    /// Keeps the test-utils crate independent of the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<String>,
    {
        T::from(self.url())
    }

    /// Registers an additional mock after the context has been built
    pub fn mock<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
